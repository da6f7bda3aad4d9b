//! Employee DTOs.

use chrono::{DateTime, Utc};
use northwind_core::{rules::not_blank, Employee};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for creating or replacing an employee.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmployeeRequest {
    #[validate(custom(function = not_blank), length(max = 20))]
    pub last_name: String,

    #[validate(custom(function = not_blank), length(max = 10))]
    pub first_name: String,

    #[validate(length(max = 30))]
    pub title: Option<String>,

    #[validate(length(max = 25))]
    pub title_of_courtesy: Option<String>,

    pub birth_date: Option<DateTime<Utc>>,

    pub hire_date: Option<DateTime<Utc>>,

    #[validate(length(max = 60))]
    pub address: Option<String>,

    #[validate(length(max = 15))]
    pub city: Option<String>,

    #[validate(length(max = 15))]
    pub region: Option<String>,

    #[validate(length(max = 10))]
    pub postal_code: Option<String>,

    #[validate(length(max = 15))]
    pub country: Option<String>,

    #[validate(length(max = 24))]
    pub home_phone: Option<String>,

    #[validate(length(max = 4))]
    pub extension: Option<String>,

    pub notes: Option<String>,

    pub reports_to: Option<i32>,

    #[validate(length(max = 255))]
    pub photo_path: Option<String>,
}

impl EmployeeRequest {
    /// Maps the request onto a domain model with the given id.
    ///
    /// The photo column is a separate sub-resource and stays untouched.
    #[must_use]
    pub fn into_model(self, employee_id: i32) -> Employee {
        Employee {
            employee_id,
            last_name: self.last_name,
            first_name: self.first_name,
            title: self.title,
            title_of_courtesy: self.title_of_courtesy,
            birth_date: self.birth_date,
            hire_date: self.hire_date,
            address: self.address,
            city: self.city,
            region: self.region,
            postal_code: self.postal_code,
            country: self.country,
            home_phone: self.home_phone,
            extension: self.extension,
            photo: None,
            notes: self.notes,
            reports_to: self.reports_to,
            photo_path: self.photo_path,
        }
    }
}

/// Employee response DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub employee_id: i32,
    pub last_name: String,
    pub first_name: String,
    pub title: Option<String>,
    pub title_of_courtesy: Option<String>,
    pub birth_date: Option<DateTime<Utc>>,
    pub hire_date: Option<DateTime<Utc>>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub home_phone: Option<String>,
    pub extension: Option<String>,
    pub notes: Option<String>,
    pub reports_to: Option<i32>,
    pub photo_path: Option<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            employee_id: employee.employee_id,
            last_name: employee.last_name,
            first_name: employee.first_name,
            title: employee.title,
            title_of_courtesy: employee.title_of_courtesy,
            birth_date: employee.birth_date,
            hire_date: employee.hire_date,
            address: employee.address,
            city: employee.city,
            region: employee.region,
            postal_code: employee.postal_code,
            country: employee.country,
            home_phone: employee.home_phone,
            extension: employee.extension,
            notes: employee.notes,
            reports_to: employee.reports_to,
            photo_path: employee.photo_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> EmployeeRequest {
        EmployeeRequest {
            last_name: "Doe".to_string(),
            first_name: "Jane".to_string(),
            title: Some("Sales Representative".to_string()),
            title_of_courtesy: None,
            birth_date: None,
            hire_date: None,
            address: None,
            city: Some("London".to_string()),
            region: None,
            postal_code: None,
            country: None,
            home_phone: None,
            extension: None,
            notes: None,
            reports_to: None,
            photo_path: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_blank_last_name_rejected() {
        let mut request = valid_request();
        request.last_name = "   ".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_first_name_too_long_rejected() {
        let mut request = valid_request();
        request.first_name = "Maximiliane".to_string(); // 11 chars
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_into_model_keeps_photo_untouched() {
        let model = valid_request().into_model(7);
        assert_eq!(model.employee_id, 7);
        assert_eq!(model.last_name, "Doe");
        assert_eq!(model.photo, None);
    }

    #[test]
    fn test_response_from_model() {
        let model = valid_request().into_model(3);
        let response = EmployeeResponse::from(model.clone());
        assert_eq!(response.employee_id, 3);
        assert_eq!(response.first_name, model.first_name);
        assert_eq!(response.city, model.city);
    }
}
