use super::*;

#[test]
fn password_input_type_follows_toggle() {
    assert_eq!(password_input_type(false), "password");
    assert_eq!(password_input_type(true), "text");
}

#[test]
fn visibility_label_names_the_next_action() {
    assert_eq!(visibility_label(false), "Show");
    assert_eq!(visibility_label(true), "Hide");
}
