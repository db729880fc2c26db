//! Sibling ordering for columns within a board and tasks within a column.
//!
//! Orders are plain integers. Appending takes `max + 1`; moving overwrites the
//! moved entity's order with the requested index and never touches siblings,
//! so gaps and duplicates are expected and resolved by the read-side tie-break
//! (creation time, then insertion order).

use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Order for a new sibling given the current maximum among its future siblings.
///
/// An empty parent yields `0`. A parent whose maximum is already `i32::MAX`
/// has no room left and is a validation error on `order`.
#[track_caller]
pub fn next_order(current_max: Option<i32>) -> CoreResult<i32> {
    let location = ErrorLocation::from(Location::caller());
    current_max
        .unwrap_or(-1)
        .checked_add(1)
        .ok_or_else(|| CoreError::Validation {
            field: "order".to_string(),
            message: format!("has no room after {}", i32::MAX),
            location,
        })
}

/// Where an entity sits: its parent and its order among that parent's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub parent_id: Uuid,
    pub order: i32,
}

impl Placement {
    pub fn new(parent_id: Uuid, order: i32) -> Self {
        Self { parent_id, order }
    }
}

/// Outcome of a move request against an entity's current placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePlan {
    /// Neither parent nor order change.
    Stay,
    /// Literal overwrite of parent and order.
    Place(Placement),
    /// Parent changes and no order was given: append after the destination's siblings.
    Append { parent_id: Uuid },
}

impl MovePlan {
    /// Decide how a move request applies to `current`.
    ///
    /// `order` must be non-negative. A `parent_id` equal to the current parent
    /// without an `order` is not a move.
    #[track_caller]
    pub fn resolve(
        current: Placement,
        parent_id: Option<Uuid>,
        order: Option<i32>,
    ) -> CoreResult<Self> {
        if let Some(order) = order {
            if order < 0 {
                return Err(CoreError::Validation {
                    field: "order".to_string(),
                    message: format!("must be a non-negative integer, got {order}"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            let parent_id = parent_id.unwrap_or(current.parent_id);
            return Ok(Self::Place(Placement::new(parent_id, order)));
        }

        match parent_id {
            Some(parent_id) if parent_id != current.parent_id => Ok(Self::Append { parent_id }),
            _ => Ok(Self::Stay),
        }
    }

    /// Parent the entity ends up under when it differs from `current`.
    ///
    /// Callers verify the acting user owns this parent before applying the plan.
    pub fn new_parent(&self, current: &Placement) -> Option<Uuid> {
        let parent_id = match self {
            Self::Stay => return None,
            Self::Place(placement) => placement.parent_id,
            Self::Append { parent_id } => *parent_id,
        };
        (parent_id != current.parent_id).then_some(parent_id)
    }

    /// Final placement. `destination_max` is only consulted for [`MovePlan::Append`].
    #[track_caller]
    pub fn apply(self, current: Placement, destination_max: Option<i32>) -> CoreResult<Placement> {
        match self {
            Self::Stay => Ok(current),
            Self::Place(placement) => Ok(placement),
            Self::Append { parent_id } => {
                Ok(Placement::new(parent_id, next_order(destination_max)?))
            }
        }
    }
}
