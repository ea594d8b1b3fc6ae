//! Templar Store
//!
//! This crate provides the storage trait and implementations for
//! audit-workflow templates. Diagrams are persisted as JSON blobs in a
//! database (SQLite).
//!
//! The [`Store`] trait defines operations for:
//! - Creating, updating, and deleting templates
//! - Fetching a template and listing by category
//! - Counting templates per category
//!
//! [`CategoryCountCache`] sits in front of the count query for the browse
//! page, which asks for counts far more often than they change.

mod cache;
mod sqlite;
mod types;

pub use cache::CategoryCountCache;
pub use sqlite::SqliteStore;
pub use types::{CategoryCount, Template, UNCATEGORIZED};

pub use sqlx::types::Json;

use async_trait::async_trait;

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The requested template was not found.
  #[error("template not found: {0}")]
  NotFound(String),

  /// A database error occurred.
  #[error("database error: {0}")]
  Database(#[from] sqlx::Error),
}

/// Storage trait for audit-workflow templates.
#[async_trait]
pub trait Store: Send + Sync {
  /// Create a new template.
  async fn create_template(&self, template: &Template) -> Result<(), Error>;

  /// Get a template by ID.
  async fn get_template(&self, template_id: &str) -> Result<Template, Error>;

  /// Update an existing template.
  async fn update_template(&self, template: &Template) -> Result<(), Error>;

  /// Delete a template by ID.
  async fn delete_template(&self, template_id: &str) -> Result<(), Error>;

  /// List templates, newest first, optionally filtered by category.
  async fn list_templates(&self, category: Option<&str>) -> Result<Vec<Template>, Error>;

  /// Count templates per category.
  async fn count_by_category(&self) -> Result<Vec<CategoryCount>, Error>;
}
