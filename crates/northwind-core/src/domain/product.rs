//! Product domain model.

use serde::{Deserialize, Serialize};

/// A row of the `products` table.
///
/// Numeric fields default to `None` when the column is null at the store;
/// absence is never conflated with zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    pub supplier_id: Option<i32>,
    pub category_id: Option<i32>,
    pub quantity_per_unit: Option<String>,
    pub unit_price: Option<f64>,
    pub units_in_stock: Option<i16>,
    pub units_on_order: Option<i16>,
    pub reorder_level: Option<i16>,
    pub discontinued: bool,
}
