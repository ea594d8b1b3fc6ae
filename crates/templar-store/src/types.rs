use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Category reported for templates stored without one.
pub const UNCATEGORIZED: &str = "uncategorized";

/// An audit-workflow template as stored in the database.
///
/// `diagram` holds the canonical `{nodes, edges}` JSON blob produced by
/// ingestion; it is not re-validated on the way out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Template {
  pub template_id: String,
  pub name: String,
  pub description: Option<String>,
  pub category: Option<String>,
  pub author_id: String,
  pub diagram: Json<serde_json::Value>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Template count for one category, as produced by the grouped count query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CategoryCount {
  pub category: String,
  pub count: i64,
}
