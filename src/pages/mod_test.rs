use super::*;

#[test]
fn known_pages_parse() {
    assert_eq!(Page::from_attr(Some("home")), Some(Page::Home));
    assert_eq!(Page::from_attr(Some("projects")), Some(Page::Projects));
    assert_eq!(Page::from_attr(Some("contact")), Some(Page::Contact));
}

#[test]
fn unknown_or_missing_page_has_no_controller() {
    assert_eq!(Page::from_attr(Some("about")), None);
    assert_eq!(Page::from_attr(Some("Home")), None);
    assert_eq!(Page::from_attr(None), None);
}

#[test]
fn as_str_round_trips() {
    for page in [Page::Home, Page::Projects, Page::Contact] {
        assert_eq!(Page::from_attr(Some(page.as_str())), Some(page));
    }
}
