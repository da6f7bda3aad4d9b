//! SQLite employee DAO implementation.

use crate::dao::{guards, EmployeeDao};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use northwind_core::{Employee, NorthwindError, NorthwindResult, PageRequest};
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

const EMPLOYEE_COLUMNS: &str = "employee_id, last_name, first_name, title, title_of_courtesy, \
     birth_date, hire_date, address, city, region, postal_code, country, \
     home_phone, extension, photo, notes, reports_to, photo_path";

/// SQLite employee DAO.
#[derive(Clone)]
pub struct SqliteEmployeeDao {
    pool: SqlitePool,
}

impl SqliteEmployeeDao {
    /// Creates a new SQLite employee DAO.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an employee.
#[derive(Debug, FromRow)]
struct EmployeeRow {
    employee_id: i32,
    last_name: String,
    first_name: String,
    title: Option<String>,
    title_of_courtesy: Option<String>,
    birth_date: Option<DateTime<Utc>>,
    hire_date: Option<DateTime<Utc>>,
    address: Option<String>,
    city: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
    home_phone: Option<String>,
    extension: Option<String>,
    photo: Option<Vec<u8>>,
    notes: Option<String>,
    reports_to: Option<i32>,
    photo_path: Option<String>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            employee_id: row.employee_id,
            last_name: row.last_name,
            first_name: row.first_name,
            title: row.title,
            title_of_courtesy: row.title_of_courtesy,
            birth_date: row.birth_date,
            hire_date: row.hire_date,
            address: row.address,
            city: row.city,
            region: row.region,
            postal_code: row.postal_code,
            country: row.country,
            home_phone: row.home_phone,
            extension: row.extension,
            photo: row.photo,
            notes: row.notes,
            reports_to: row.reports_to,
            photo_path: row.photo_path,
        }
    }
}

#[async_trait]
impl EmployeeDao for SqliteEmployeeDao {
    async fn insert(&self, employee: &Employee) -> NorthwindResult<i32> {
        guards::not_blank("last_name", &employee.last_name)?;
        guards::not_blank("first_name", &employee.first_name)?;
        debug!(
            "Inserting employee: {} {}",
            employee.first_name, employee.last_name
        );

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO employees (last_name, first_name, title, title_of_courtesy,
                                   birth_date, hire_date, address, city, region,
                                   postal_code, country, home_phone, extension,
                                   photo, notes, reports_to, photo_path)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING employee_id
            "#,
        )
        .bind(&employee.last_name)
        .bind(&employee.first_name)
        .bind(&employee.title)
        .bind(&employee.title_of_courtesy)
        .bind(employee.birth_date)
        .bind(employee.hire_date)
        .bind(&employee.address)
        .bind(&employee.city)
        .bind(&employee.region)
        .bind(&employee.postal_code)
        .bind(&employee.country)
        .bind(&employee.home_phone)
        .bind(&employee.extension)
        .bind(&employee.photo)
        .bind(&employee.notes)
        .bind(employee.reports_to)
        .bind(&employee.photo_path)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete(&self, id: i32) -> NorthwindResult<bool> {
        guards::positive_id(id)?;
        debug!("Deleting employee: {}", id);

        let result = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn update(&self, employee: &Employee) -> NorthwindResult<bool> {
        guards::positive_id(employee.employee_id)?;
        guards::not_blank("last_name", &employee.last_name)?;
        guards::not_blank("first_name", &employee.first_name)?;
        debug!("Updating employee: {}", employee.employee_id);

        // Whole-record replace of the scalar columns. The photo column is a
        // separate sub-resource and only changes through store_photo.
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET last_name = ?, first_name = ?, title = ?, title_of_courtesy = ?,
                birth_date = ?, hire_date = ?, address = ?, city = ?, region = ?,
                postal_code = ?, country = ?, home_phone = ?, extension = ?,
                notes = ?, reports_to = ?, photo_path = ?
            WHERE employee_id = ?
            "#,
        )
        .bind(&employee.last_name)
        .bind(&employee.first_name)
        .bind(&employee.title)
        .bind(&employee.title_of_courtesy)
        .bind(employee.birth_date)
        .bind(employee.hire_date)
        .bind(&employee.address)
        .bind(&employee.city)
        .bind(&employee.region)
        .bind(&employee.postal_code)
        .bind(&employee.country)
        .bind(&employee.home_phone)
        .bind(&employee.extension)
        .bind(&employee.notes)
        .bind(employee.reports_to)
        .bind(&employee.photo_path)
        .bind(employee.employee_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find(&self, id: i32) -> NorthwindResult<Employee> {
        guards::positive_id(id)?;
        debug!("Finding employee: {}", id);

        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE employee_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Employee::from)
            .ok_or(NorthwindError::not_found("Employee", id))
    }

    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<Employee>> {
        debug!(
            "Selecting employees, offset: {}, limit: {}",
            page.offset(),
            page.limit()
        );

        let rows = sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY employee_id LIMIT ? OFFSET ?"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn fetch_photo(&self, id: i32) -> NorthwindResult<Option<Vec<u8>>> {
        guards::positive_id(id)?;

        let photo: Option<Option<Vec<u8>>> =
            sqlx::query_scalar("SELECT photo FROM employees WHERE employee_id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        photo.ok_or(NorthwindError::not_found("Employee", id))
    }

    async fn store_photo(&self, id: i32, photo: Option<&[u8]>) -> NorthwindResult<bool> {
        guards::positive_id(id)?;
        debug!("Storing photo for employee: {}", id);

        let result = sqlx::query("UPDATE employees SET photo = ? WHERE employee_id = ?")
            .bind(photo)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for SqliteEmployeeDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteEmployeeDao").finish_non_exhaustive()
    }
}
