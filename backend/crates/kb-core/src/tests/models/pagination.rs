use crate::Pagination;

use googletest::prelude::*;

#[test]
fn given_partial_last_page_when_new_then_total_pages_rounds_up() {
    let pagination = Pagination::new(1, 20, 41);
    assert_that!(pagination.total_pages, eq(3));
}

#[test]
fn given_no_rows_when_new_then_zero_pages() {
    let pagination = Pagination::new(1, 20, 0);
    assert_that!(pagination.total_pages, eq(0));
}

#[test]
fn given_exact_multiple_when_new_then_no_extra_page() {
    let pagination = Pagination::new(2, 10, 20);
    assert_that!(pagination.total_pages, eq(2));
}
