//! Employee domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the `employees` table.
///
/// `employee_id` is assigned by the store on insert; an id of `0` marks a
/// model that has not been persisted yet. `reports_to`, when set, references
/// another employee (enforced by the store-level foreign key, not here).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
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
    pub photo: Option<Vec<u8>>,
    pub notes: Option<String>,
    pub reports_to: Option<i32>,
    pub photo_path: Option<String>,
}
