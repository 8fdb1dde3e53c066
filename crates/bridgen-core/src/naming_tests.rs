use crate::naming::{entry_accessor, escape_identifier, short_name_for_index};

#[test]
fn short_names_first_cycle() {
    assert_eq!(short_name_for_index(0), "a");
    assert_eq!(short_name_for_index(1), "b");
    assert_eq!(short_name_for_index(25), "z");
}

#[test]
fn short_names_wrap_to_two_letters() {
    assert_eq!(short_name_for_index(26), "aa");
    assert_eq!(short_name_for_index(27), "ab");
    assert_eq!(short_name_for_index(51), "az");
    assert_eq!(short_name_for_index(52), "ba");
}

#[test]
fn short_names_are_deterministic() {
    assert_eq!(short_name_for_index(700), short_name_for_index(700));
}

#[test]
fn entry_accessors_are_stable() {
    assert_eq!(entry_accessor("Season", "SPRING"), "Season_SPRING");
}

#[test]
fn keywords_are_escaped() {
    assert_eq!(escape_identifier("object"), "`object`");
    assert_eq!(escape_identifier("in"), "`in`");
    assert_eq!(escape_identifier("name"), "name");
}
