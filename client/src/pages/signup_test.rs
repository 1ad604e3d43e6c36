use super::*;

fn request(name: &str, email: &str, password: &str) -> SignupRequest {
    SignupRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() }
}

#[test]
fn validate_signup_input_trims_name_and_email() {
    assert_eq!(
        validate_signup_input(&request(" Ana ", " ana@uni.edu", "pw")),
        Ok(request("Ana", "ana@uni.edu", "pw"))
    );
}

#[test]
fn validate_signup_input_requires_every_field() {
    assert_eq!(validate_signup_input(&request("", "a@b.c", "pw")), Err(MISSING_FIELDS));
    assert_eq!(validate_signup_input(&request("Ana", "  ", "pw")), Err(MISSING_FIELDS));
    assert_eq!(validate_signup_input(&request("Ana", "a@b.c", "")), Err(MISSING_FIELDS));
}

#[test]
fn redirect_waits_one_and_a_half_seconds() {
    assert_eq!(REDIRECT_DELAY.as_millis(), 1500);
}
