//! Side effects a page performs after a submit settles.

use crate::state::toast::Toast;

/// Navigation and notification requested by a finished submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitEffect {
    pub redirect: Option<&'static str>,
    pub toast: Option<Toast>,
}

impl SubmitEffect {
    pub fn redirect(path: &'static str) -> Self {
        Self { redirect: Some(path), toast: None }
    }

    pub fn toast(toast: Toast) -> Self {
        Self { redirect: None, toast: Some(toast) }
    }

    #[must_use]
    pub fn then_redirect(mut self, path: &'static str) -> Self {
        self.redirect = Some(path);
        self
    }
}
