use super::*;

#[test]
fn reveal_class_without_base() {
    assert_eq!(reveal_class("", false), "reveal");
    assert_eq!(reveal_class("  ", true), "reveal reveal--visible");
}

#[test]
fn reveal_class_keeps_base_first() {
    assert_eq!(reveal_class("card", false), "card reveal");
    assert_eq!(reveal_class("card", true), "card reveal reveal--visible");
}
