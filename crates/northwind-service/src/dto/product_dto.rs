//! Product DTOs.

use northwind_core::{rules::not_blank, Product};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for creating or replacing a product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(custom(function = not_blank), length(max = 40))]
    pub product_name: String,

    pub supplier_id: Option<i32>,

    pub category_id: Option<i32>,

    #[validate(length(max = 20))]
    pub quantity_per_unit: Option<String>,

    #[validate(range(min = 0.0))]
    pub unit_price: Option<f64>,

    #[validate(range(min = 0))]
    pub units_in_stock: Option<i16>,

    #[validate(range(min = 0))]
    pub units_on_order: Option<i16>,

    #[validate(range(min = 0))]
    pub reorder_level: Option<i16>,

    #[serde(default)]
    pub discontinued: bool,
}

impl ProductRequest {
    /// Maps the request onto a domain model with the given id.
    #[must_use]
    pub fn into_model(self, product_id: i32) -> Product {
        Product {
            product_id,
            product_name: self.product_name,
            supplier_id: self.supplier_id,
            category_id: self.category_id,
            quantity_per_unit: self.quantity_per_unit,
            unit_price: self.unit_price,
            units_in_stock: self.units_in_stock,
            units_on_order: self.units_on_order,
            reorder_level: self.reorder_level,
            discontinued: self.discontinued,
        }
    }
}

/// Product response DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
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

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id,
            product_name: product.product_name,
            supplier_id: product.supplier_id,
            category_id: product.category_id,
            quantity_per_unit: product.quantity_per_unit,
            unit_price: product.unit_price,
            units_in_stock: product.units_in_stock,
            units_on_order: product.units_on_order,
            reorder_level: product.reorder_level,
            discontinued: product.discontinued,
        }
    }
}
