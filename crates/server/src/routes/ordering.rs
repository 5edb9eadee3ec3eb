//! Request and response bodies shared by the reorder and move endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use service::ordering::Direction;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderRequest {
    /// Every id in the desired order.
    pub ids: Vec<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MoveRequest {
    #[schema(value_type = String, example = "up")]
    pub direction: Direction,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderRequest {
    pub order_index: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MoveResult {
    /// `false` when the row was already at that edge.
    pub moved: bool,
}
