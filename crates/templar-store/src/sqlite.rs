use sqlx::SqlitePool;

use crate::types::UNCATEGORIZED;
use crate::{CategoryCount, Error, Store, Template};

/// SQLite-based store implementation.
pub struct SqliteStore {
  pool: SqlitePool,
}

impl SqliteStore {
  /// Create a new SQLite store with the given connection pool.
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Run database migrations.
  pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(&self.pool).await
  }
}

#[async_trait::async_trait]
impl Store for SqliteStore {
  async fn create_template(&self, template: &Template) -> Result<(), Error> {
    sqlx::query(
      r#"
            INSERT INTO templates (template_id, name, description, category, author_id, diagram, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
    )
    .bind(&template.template_id)
    .bind(&template.name)
    .bind(&template.description)
    .bind(&template.category)
    .bind(&template.author_id)
    .bind(&template.diagram)
    .bind(template.created_at)
    .bind(template.updated_at)
    .execute(&self.pool)
    .await?;

    Ok(())
  }

  async fn get_template(&self, template_id: &str) -> Result<Template, Error> {
    sqlx::query_as(
      r#"
            SELECT template_id, name, description, category, author_id, diagram, created_at, updated_at
            FROM templates
            WHERE template_id = ?
            "#,
    )
    .bind(template_id)
    .fetch_optional(&self.pool)
    .await?
    .ok_or_else(|| Error::NotFound(template_id.to_string()))
  }

  async fn update_template(&self, template: &Template) -> Result<(), Error> {
    let result = sqlx::query(
      r#"
            UPDATE templates
            SET name = ?, description = ?, category = ?, diagram = ?, updated_at = ?
            WHERE template_id = ?
            "#,
    )
    .bind(&template.name)
    .bind(&template.description)
    .bind(&template.category)
    .bind(&template.diagram)
    .bind(template.updated_at)
    .bind(&template.template_id)
    .execute(&self.pool)
    .await?;

    if result.rows_affected() == 0 {
      return Err(Error::NotFound(template.template_id.clone()));
    }

    Ok(())
  }

  async fn delete_template(&self, template_id: &str) -> Result<(), Error> {
    let result = sqlx::query("DELETE FROM templates WHERE template_id = ?")
      .bind(template_id)
      .execute(&self.pool)
      .await?;

    if result.rows_affected() == 0 {
      return Err(Error::NotFound(template_id.to_string()));
    }

    Ok(())
  }

  async fn list_templates(&self, category: Option<&str>) -> Result<Vec<Template>, Error> {
    let templates = match category {
      Some(category) => {
        sqlx::query_as(
          r#"
                SELECT template_id, name, description, category, author_id, diagram, created_at, updated_at
                FROM templates
                WHERE category = ?
                ORDER BY created_at DESC
                "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?
      }
      None => {
        sqlx::query_as(
          r#"
                SELECT template_id, name, description, category, author_id, diagram, created_at, updated_at
                FROM templates
                ORDER BY created_at DESC
                "#,
        )
        .fetch_all(&self.pool)
        .await?
      }
    };

    Ok(templates)
  }

  async fn count_by_category(&self) -> Result<Vec<CategoryCount>, Error> {
    let counts = sqlx::query_as(
      r#"
            SELECT COALESCE(category, ?) AS category, COUNT(*) AS count
            FROM templates
            GROUP BY COALESCE(category, ?)
            ORDER BY category
            "#,
    )
    .bind(UNCATEGORIZED)
    .bind(UNCATEGORIZED)
    .fetch_all(&self.pool)
    .await?;

    Ok(counts)
  }
}
