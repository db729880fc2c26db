use crate::{TaskQuery, TaskSort};

use googletest::prelude::*;

#[test]
fn given_blank_search_when_new_then_search_is_dropped() {
    let query = TaskQuery::new(Some("   ".to_string()), TaskSort::Created, 1, 20);
    assert_that!(query.search, none());
}

#[test]
fn given_padded_search_when_new_then_search_is_trimmed() {
    let query = TaskQuery::new(Some("  bug ".to_string()), TaskSort::Created, 1, 20);
    assert_that!(query.search, some(eq("bug")));
}

#[test]
fn given_mixed_case_search_when_new_then_search_is_folded() {
    let query = TaskQuery::new(Some(" ÉCRIRE la Doc ".to_string()), TaskSort::Created, 1, 20);
    assert_that!(query.search, some(eq("écrire la doc")));
}

#[test]
fn given_page_three_when_offset_then_skips_two_pages() {
    let query = TaskQuery::new(None, TaskSort::Priority, 3, 15);
    assert_that!(query.offset(), eq(30));
}

#[test]
fn given_page_zero_when_new_then_clamped_to_first_page() {
    let query = TaskQuery::new(None, TaskSort::Created, 0, 0);
    assert_that!(query.page, eq(1));
    assert_that!(query.limit, eq(1));
    assert_that!(query.offset(), eq(0));
}
