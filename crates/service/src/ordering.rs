//! Order-index rules shared by every content table.
//!
//! The functions here only plan: they turn the current ordered rows into a
//! list of [`IndexWrite`]s. Applying the writes (one update per entry, in
//! order, without a transaction) is the caller's job.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// How a move-by-one is persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveStrategy {
    /// Swap the rows in the list, then write every row's position.
    Rewrite,
    /// Write the new positions of the two swapped rows only.
    Positional,
    /// Exchange the two rows' stored index values.
    Swap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexWrite {
    pub id: i32,
    pub order_index: i32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("id {0} is not in the list")]
    UnknownId(i32),
    #[error("id {0} has no order index")]
    MissingIndex(i32),
    #[error("id {0} appears more than once")]
    DuplicateId(i32),
}

/// Index for a newly inserted row: one past the current maximum, or 0.
pub fn next_order_index(current_max: Option<i32>) -> i32 {
    current_max.map_or(0, |m| m + 1)
}

/// Whole-list rewrite: every id gets its position as index.
pub fn plan_reorder(ids: &[i32]) -> Result<Vec<IndexWrite>, PlanError> {
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(*id) {
            return Err(PlanError::DuplicateId(*id));
        }
    }
    Ok(ids
        .iter()
        .enumerate()
        .map(|(pos, id)| IndexWrite { id: *id, order_index: pos as i32 })
        .collect())
}

/// Plan moving `id` one step in `direction` within `rows` (`(id, order_index)`
/// in display order). `Ok(None)` means the row is already at that edge and
/// nothing must be written.
pub fn plan_move(
    rows: &[(i32, Option<i32>)],
    id: i32,
    direction: Direction,
    strategy: MoveStrategy,
) -> Result<Option<Vec<IndexWrite>>, PlanError> {
    let pos = rows
        .iter()
        .position(|(rid, _)| *rid == id)
        .ok_or(PlanError::UnknownId(id))?;
    let target = match direction {
        Direction::Up => pos.checked_sub(1),
        Direction::Down => (pos + 1 < rows.len()).then_some(pos + 1),
    };
    let Some(target) = target else {
        return Ok(None);
    };
    let (moved, neighbor) = (rows[pos], rows[target]);

    let writes = match strategy {
        MoveStrategy::Rewrite => {
            let mut ids: Vec<i32> = rows.iter().map(|(rid, _)| *rid).collect();
            ids.swap(pos, target);
            plan_reorder(&ids)?
        }
        MoveStrategy::Positional => vec![
            IndexWrite { id: neighbor.0, order_index: pos as i32 },
            IndexWrite { id: moved.0, order_index: target as i32 },
        ],
        MoveStrategy::Swap => {
            let current = moved.1.ok_or(PlanError::MissingIndex(moved.0))?;
            let other = neighbor.1.ok_or(PlanError::MissingIndex(neighbor.0))?;
            vec![
                IndexWrite { id: moved.0, order_index: other },
                IndexWrite { id: neighbor.0, order_index: current },
            ]
        }
    };
    Ok(Some(writes))
}

/// Display order for tables whose index is optional: indexed rows first,
/// ascending; unindexed rows after them, ordered by `fallback`.
pub fn sort_indexed_first<T>(
    rows: &mut [T],
    index: impl Fn(&T) -> Option<i32>,
    fallback: impl Fn(&T, &T) -> Ordering,
) {
    rows.sort_by(|a, b| match (index(a), index(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => fallback(a, b),
    });
}
