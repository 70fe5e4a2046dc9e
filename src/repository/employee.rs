use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::{EmployeeStore, RepoError};
use crate::models::employee::Employee;

/// Postgres-backed employee store. Records live as schemaless JSONB
/// documents in the `employees` table; all lookups go through the
/// `employee_id` field of the document, not the table's primary key.
pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn insert(&self, emp: &Employee) -> Result<Uuid, RepoError> {
        let id: Uuid = sqlx::query_scalar("INSERT INTO employees (doc) VALUES ($1) RETURNING id")
            .bind(Json(emp))
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn find_by_id(&self, employee_id: &str) -> Result<Employee, RepoError> {
        let doc: Option<Json<Employee>> =
            sqlx::query_scalar("SELECT doc FROM employees WHERE doc->>'employee_id' = $1")
                .bind(employee_id)
                .fetch_optional(&self.pool)
                .await?;
        doc.map(|Json(emp)| emp).ok_or_else(|| {
            RepoError::NotFound(format!("no employee found with id {employee_id}"))
        })
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepoError> {
        let docs: Vec<Json<Employee>> = sqlx::query_scalar("SELECT doc FROM employees")
            .fetch_all(&self.pool)
            .await?;
        Ok(docs.into_iter().map(|Json(emp)| emp).collect())
    }

    async fn update_by_id(&self, employee_id: &str, emp: &Employee) -> Result<u64, RepoError> {
        // `||` merges only the fields present in the patch document, so an
        // absent employee_id in the payload leaves the stored one intact.
        let result =
            sqlx::query("UPDATE employees SET doc = doc || $2 WHERE doc->>'employee_id' = $1")
                .bind(employee_id)
                .bind(Json(emp))
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, employee_id: &str) -> Result<u64, RepoError> {
        let result = sqlx::query("DELETE FROM employees WHERE doc->>'employee_id' = $1")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let result = sqlx::query("DELETE FROM employees")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
