//! Synchronous form validation for the login and signup pages.
//!
//! DESIGN
//! ======
//! Each form has a rule set: the list of fields to check. The signup rule set
//! is keyed by the selected role, which is how the admin-token requirement
//! comes and goes. Every field in the active set is checked on every attempt
//! and all failures are reported together; within one field the first failing
//! check wins.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::net::types::Role;
use crate::state::login::LoginForm;
use crate::state::signup::SignupForm;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MOBILE_NUMBER_LEN: usize = 10;
pub const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// A validated form field. Ordering follows the on-screen field order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    MobileNumber,
    Role,
    AdminToken,
    Terms,
}

impl Field {
    /// Field name as sent on the wire.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::MobileNumber => "mobile_number",
            Self::Role => "role",
            Self::AdminToken => "adminToken",
            Self::Terms => "terms",
        }
    }
}

/// Field-to-message mapping produced by one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[cfg(test)]
    pub(crate) fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// All messages joined with `". "`, in field order.
    pub fn summary(&self) -> String {
        self.0.values().copied().collect::<Vec<_>>().join(". ")
    }

    fn record(&mut self, field: Field, message: Option<&'static str>) {
        if let Some(message) = message {
            self.0.insert(field, message);
        }
    }
}

const LOGIN_RULES: &[Field] = &[Field::Email, Field::Password];

const USER_SIGNUP_RULES: &[Field] =
    &[Field::Name, Field::Email, Field::Password, Field::MobileNumber, Field::Role, Field::Terms];

const ADMIN_SIGNUP_RULES: &[Field] = &[
    Field::Name,
    Field::Email,
    Field::Password,
    Field::MobileNumber,
    Field::Role,
    Field::AdminToken,
    Field::Terms,
];

/// Fields the signup form must satisfy for the selected role.
pub fn signup_rules(role: Option<Role>) -> &'static [Field] {
    match role {
        Some(Role::Admin) => ADMIN_SIGNUP_RULES,
        Some(Role::User) | None => USER_SIGNUP_RULES,
    }
}

pub fn validate_login(form: &LoginForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for &field in LOGIN_RULES {
        let message = match field {
            Field::Email => check_email(&form.email),
            Field::Password => check_present(&form.password, "Password is required"),
            _ => None,
        };
        errors.record(field, message);
    }
    errors
}

pub fn validate_signup(form: &SignupForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for &field in signup_rules(form.role) {
        let message = match field {
            Field::Name => check_present(&form.name, "Name is required"),
            Field::Email => check_email(&form.email),
            Field::Password => check_signup_password(&form.password),
            Field::MobileNumber => check_mobile_number(&form.mobile_number),
            Field::Role => form.role.is_none().then_some("Role is required"),
            Field::AdminToken => form.admin_token.is_empty().then_some("Admin token is required"),
            Field::Terms => (!form.terms).then_some("Please agree to the terms and conditions"),
        };
        errors.record(field, message);
    }
    errors
}

/// Whitespace as browsers treat it in form input, which includes the BOM.
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn trim_blank(value: &str) -> &str {
    value.trim_matches(is_blank_char)
}

fn check_present(value: &str, message: &'static str) -> Option<&'static str> {
    trim_blank(value).is_empty().then_some(message)
}

fn check_email(email: &str) -> Option<&'static str> {
    if trim_blank(email).is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email) {
        Some("Invalid email format")
    } else {
        None
    }
}

fn check_signup_password(password: &str) -> Option<&'static str> {
    let trimmed = trim_blank(password);
    // Length in UTF-16 units, the way the browser measures an input value.
    if trimmed.is_empty() {
        Some("Password is required")
    } else if trimmed.encode_utf16().count() < MIN_PASSWORD_LEN {
        Some("Password must be at least 8 characters")
    } else if !is_strong_password(password) {
        Some(
            "Password must contain at least one uppercase letter, one lowercase letter, one digit, and one special character",
        )
    } else {
        None
    }
}

fn check_mobile_number(mobile_number: &str) -> Option<&'static str> {
    if trim_blank(mobile_number).is_empty() {
        Some("Mobile number is required")
    } else if !is_valid_mobile_number(mobile_number) {
        Some("Invalid mobile number format (should be 10 digits)")
    } else {
        None
    }
}

/// `local@domain.tld` shape: no whitespace anywhere, something before an `@`,
/// and after it a `.` with something on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_blank_char) {
        return false;
    }
    email.match_indices('@').any(|(at, _)| {
        let domain = &email[at + 1..];
        at > 0 && domain.match_indices('.').any(|(dot, _)| dot > 0 && dot + 1 < domain.len())
    })
}

/// At least eight characters from `[A-Za-z0-9@$!%*?&]` covering all four classes.
pub fn is_strong_password(password: &str) -> bool {
    let is_special = |c: char| PASSWORD_SPECIALS.contains(c);
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().all(|c| c.is_ascii_alphanumeric() || is_special(c))
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(is_special)
}

pub fn is_valid_mobile_number(mobile_number: &str) -> bool {
    mobile_number.len() == MOBILE_NUMBER_LEN && mobile_number.bytes().all(|b| b.is_ascii_digit())
}

/// Keep only ASCII digits from a `tel` input value.
pub fn sanitize_mobile_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
