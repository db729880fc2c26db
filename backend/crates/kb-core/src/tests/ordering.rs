use crate::{CoreError, MovePlan, Placement, next_order};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_empty_parent_when_next_order_then_zero() {
    assert_that!(next_order(None).unwrap(), eq(0));
}

#[test]
fn given_max_two_when_next_order_then_three() {
    assert_that!(next_order(Some(2)).unwrap(), eq(3));
}

#[test]
fn given_max_one_below_upper_bound_when_next_order_then_upper_bound() {
    assert_that!(next_order(Some(i32::MAX - 1)).unwrap(), eq(i32::MAX));
}

#[test]
fn given_max_at_upper_bound_when_next_order_then_validation_error_on_order() {
    match next_order(Some(i32::MAX)) {
        Err(err @ CoreError::Validation { .. }) => assert_that!(err.field(), eq("order")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_full_destination_when_appending_move_then_validation_error() {
    let current = Placement::new(Uuid::new_v4(), 0);
    let plan = MovePlan::resolve(current, Some(Uuid::new_v4()), None).unwrap();

    assert_that!(plan.apply(current, Some(i32::MAX)), err(anything()));
}

#[test]
fn given_order_and_new_parent_when_resolve_then_literal_placement() {
    // Given
    let current = Placement::new(Uuid::new_v4(), 1);
    let destination = Uuid::new_v4();

    // When
    let plan = MovePlan::resolve(current, Some(destination), Some(2)).unwrap();

    // Then
    assert_that!(plan, eq(MovePlan::Place(Placement::new(destination, 2))));
    assert_that!(plan.new_parent(&current), some(eq(destination)));
    assert_that!(plan.apply(current, Some(9)).unwrap(), eq(Placement::new(destination, 2)));
}

#[test]
fn given_order_only_when_resolve_then_stays_in_same_parent() {
    let current = Placement::new(Uuid::new_v4(), 4);

    let plan = MovePlan::resolve(current, None, Some(0)).unwrap();

    assert_that!(plan.apply(current, None).unwrap(), eq(Placement::new(current.parent_id, 0)));
    assert_that!(plan.new_parent(&current), none());
}

#[test]
fn given_new_parent_without_order_when_resolve_then_appends_to_destination() {
    // Given
    let current = Placement::new(Uuid::new_v4(), 0);
    let destination = Uuid::new_v4();

    // When
    let plan = MovePlan::resolve(current, Some(destination), None).unwrap();

    // Then
    assert_that!(plan, eq(MovePlan::Append { parent_id: destination }));
    assert_that!(plan.apply(current, Some(1)).unwrap(), eq(Placement::new(destination, 2)));
    assert_that!(plan.apply(current, None).unwrap(), eq(Placement::new(destination, 0)));
}

#[test]
fn given_same_parent_without_order_when_resolve_then_stays() {
    let current = Placement::new(Uuid::new_v4(), 3);

    let plan = MovePlan::resolve(current, Some(current.parent_id), None).unwrap();

    assert_that!(plan, eq(MovePlan::Stay));
    assert_that!(plan.apply(current, Some(10)).unwrap(), eq(current));
}

#[test]
fn given_nothing_requested_when_resolve_then_stays() {
    let current = Placement::new(Uuid::new_v4(), 3);

    let plan = MovePlan::resolve(current, None, None).unwrap();

    assert_that!(plan, eq(MovePlan::Stay));
    assert_that!(plan.new_parent(&current), none());
}

#[test]
fn given_negative_order_when_resolve_then_validation_error_on_order() {
    let current = Placement::new(Uuid::new_v4(), 3);

    let result = MovePlan::resolve(current, None, Some(-1));

    match result {
        Err(err @ CoreError::Validation { .. }) => assert_that!(err.field(), eq("order")),
        other => panic!("expected validation error, got {other:?}"),
    }
}
