use super::*;

#[test]
fn approval_pending_message_has_notice() {
    assert!(dashboard_notice(Some("approval-pending")).is_some());
}

#[test]
fn unknown_or_missing_message_has_no_notice() {
    assert_eq!(dashboard_notice(None), None);
    assert_eq!(dashboard_notice(Some("hello")), None);
    assert_eq!(dashboard_notice(Some("")), None);
}

#[test]
fn portal_routes_by_user_type() {
    assert_eq!(portal_route(UserType::Consumer), None);
    assert_eq!(portal_route(UserType::Instructor), Some("/instructor"));
    assert_eq!(portal_route(UserType::Resort), Some("/resort"));
    assert_eq!(portal_route(UserType::Admin), Some("/admin"));
}
