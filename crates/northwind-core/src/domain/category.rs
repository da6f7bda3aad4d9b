//! Product category domain model.

use serde::{Deserialize, Serialize};

/// A row of the `categories` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
    pub description: Option<String>,
    pub picture: Option<Vec<u8>>,
}
