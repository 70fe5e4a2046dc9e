pub mod employee;

pub use employee::PgEmployeeStore;

use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::models::employee::Employee;

/// Data-access failures. `NotFound` is a zero-match lookup; everything else
/// is a store I/O failure.
#[derive(Debug)]
pub enum RepoError {
    NotFound(String),
    Store(String),
}

impl fmt::Display for RepoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoError::NotFound(msg) => write!(f, "{}", msg),
            RepoError::Store(msg) => write!(f, "store error: {}", msg),
        }
    }
}

impl std::error::Error for RepoError {}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Store(err.to_string())
    }
}

/// CRUD over the employee collection, keyed by the `employee_id` field
/// rather than the store's native primary key.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Inserts a document and returns the store-assigned primary identifier.
    async fn insert(&self, emp: &Employee) -> Result<Uuid, RepoError>;

    /// Finds the single document whose `employee_id` matches.
    async fn find_by_id(&self, employee_id: &str) -> Result<Employee, RepoError>;

    /// Returns every document in store-native order.
    async fn find_all(&self) -> Result<Vec<Employee>, RepoError>;

    /// Field-set update of the matching document. Returns the modified count;
    /// an unmatched id yields 0, not an error.
    async fn update_by_id(&self, employee_id: &str, emp: &Employee) -> Result<u64, RepoError>;

    /// Deletes the matching document, returning the deleted count (0 or 1).
    async fn delete_by_id(&self, employee_id: &str) -> Result<u64, RepoError>;

    /// Deletes every document, returning the deleted count.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}
