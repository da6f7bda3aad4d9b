//! Product category DTOs.

use northwind_core::{rules::not_blank, Category};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for creating or replacing a product category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(custom(function = not_blank), length(max = 15))]
    pub category_name: String,

    pub description: Option<String>,
}

impl CategoryRequest {
    /// Maps the request onto a domain model with the given id.
    ///
    /// The picture column is a separate sub-resource and stays untouched.
    #[must_use]
    pub fn into_model(self, category_id: i32) -> Category {
        Category {
            category_id,
            category_name: self.category_name,
            description: self.description,
            picture: None,
        }
    }
}

/// Product category response DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub category_id: i32,
    pub category_name: String,
    pub description: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            category_id: category.category_id,
            category_name: category.category_name,
            description: category.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = CategoryRequest {
            category_name: "Beverages".to_string(),
            description: Some("Soft drinks, coffees, teas".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_name_too_long_rejected() {
        let request = CategoryRequest {
            category_name: "A name longer than fifteen".to_string(),
            description: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_response_omits_picture() {
        let category = Category {
            category_id: 1,
            category_name: "Beverages".to_string(),
            description: None,
            picture: Some(vec![1, 2, 3]),
        };
        let json = serde_json::to_string(&CategoryResponse::from(category)).unwrap();
        assert!(!json.contains("picture"));
    }
}
