use crate::{Board, DEFAULT_COLUMN_NAMES};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_new_board_when_default_columns_then_three_columns_numbered_from_zero() {
    // Given
    let board = Board::new(Uuid::new_v4(), "Roadmap".to_string());

    // When
    let columns = board.default_columns();

    // Then
    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    let orders: Vec<i32> = columns.iter().map(|c| c.order).collect();
    assert_that!(names, eq(&DEFAULT_COLUMN_NAMES.to_vec()));
    assert_that!(orders, eq(&vec![0, 1, 2]));
    assert_that!(columns.iter().all(|c| c.board_id == board.id), eq(true));
}
