use super::*;

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "kai@reef.example".to_owned(),
        display_name: "Kai".to_owned(),
        avatar_url: None,
        user_type: UserType::Instructor,
        is_approved: true,
    }
}

// =============================================================
// UserType
// =============================================================

#[test]
fn user_type_serializes_to_lowercase() {
    assert_eq!(serde_json::to_string(&UserType::Consumer).unwrap(), "\"consumer\"");
    assert_eq!(serde_json::to_string(&UserType::Instructor).unwrap(), "\"instructor\"");
    assert_eq!(serde_json::to_string(&UserType::Resort).unwrap(), "\"resort\"");
    assert_eq!(serde_json::to_string(&UserType::Admin).unwrap(), "\"admin\"");
}

#[test]
fn user_type_from_str_ignores_case_and_whitespace() {
    assert_eq!(" Resort ".parse::<UserType>(), Ok(UserType::Resort));
    assert_eq!("ADMIN".parse::<UserType>(), Ok(UserType::Admin));
}

#[test]
fn user_type_from_str_rejects_unknown() {
    assert_eq!("diver".parse::<UserType>(), Err(UnknownUserType("diver".to_owned())));
}

#[test]
fn user_type_display_matches_wire_name() {
    assert_eq!(UserType::Instructor.to_string(), "instructor");
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_camel_case_document() {
    let json = serde_json::json!({
        "id": "u-1",
        "email": "kai@reef.example",
        "displayName": "Kai",
        "userType": "instructor",
        "isApproved": true
    });
    let user: User = serde_json::from_value(json).unwrap();
    assert_eq!(user, make_user());
}

#[test]
fn user_missing_approval_defaults_to_unapproved() {
    let json = serde_json::json!({
        "id": "u-2",
        "email": "resort@reef.example",
        "userType": "resort"
    });
    let user: User = serde_json::from_value(json).unwrap();
    assert!(!user.is_approved);
    assert_eq!(user.display_name, "");
}

#[test]
fn user_rejects_unknown_user_type() {
    let json = serde_json::json!({ "id": "u-3", "email": "x@y.z", "userType": "shark" });
    assert!(serde_json::from_value::<User>(json).is_err());
}

#[test]
fn user_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(make_user()).unwrap();
    assert_eq!(value["userType"], "instructor");
    assert_eq!(value["isApproved"], true);
    assert_eq!(value["displayName"], "Kai");
}

#[test]
fn label_falls_back_to_email() {
    let mut user = make_user();
    assert_eq!(user.label(), "Kai");
    user.display_name = "  ".to_owned();
    assert_eq!(user.label(), "kai@reef.example");
}
