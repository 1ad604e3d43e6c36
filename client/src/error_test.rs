use super::*;

#[test]
fn display_with_substitutes_network_message() {
    let err = PortalError::Network;
    assert_eq!(err.display_with("Network error submitting claim"), "Network error submitting claim");
}

#[test]
fn display_with_keeps_server_detail() {
    let err = PortalError::Server("Item not found".to_owned());
    assert_eq!(err.display_with("ignored"), "Item not found");
}

#[test]
fn validation_and_auth_show_their_text() {
    assert_eq!(PortalError::Validation("Please fill all fields.".to_owned()).to_string(), "Please fill all fields.");
    assert_eq!(PortalError::Auth("Invalid credentials".to_owned()).display_with("ignored"), "Invalid credentials");
}
