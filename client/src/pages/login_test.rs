use super::*;

fn creds(email: &str, password: &str) -> Credentials {
    Credentials { email: email.to_owned(), password: password.to_owned() }
}

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input(&creds("  ana@uni.edu ", "pw")),
        Ok(creds("ana@uni.edu", "pw"))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input(&creds("   ", "pw")), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input(&creds("ana@uni.edu", "")), Err(MISSING_CREDENTIALS));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(validate_login_input(&creds("a@b.c", " pw ")).map(|c| c.password), Ok(" pw ".to_owned()));
}
