use std::time::Duration;

use chrono::Utc;
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use templar_ingest::{parse_workflow, Diagram, ExportEnvelope, IngestError};
use templar_session::{check_access, Access, IdentityProvider, Role};
use templar_store::{CategoryCount, CategoryCountCache, Json, Store, Template};
use templar_workflow::Workflow;

use crate::error::HubError;

/// Freshness window for the category-count cache.
const COUNT_CACHE_TTL: Duration = Duration::from_secs(60);

/// The template hub: access-gated ingestion, browsing, and export over a
/// template store.
pub struct Hub<S, I> {
  store: S,
  identity: I,
  counts: CategoryCountCache,
}

impl<S: Store, I: IdentityProvider> Hub<S, I> {
  pub fn new(store: S, identity: I) -> Self {
    Self {
      store,
      identity,
      counts: CategoryCountCache::new(COUNT_CACHE_TTL),
    }
  }

  /// Resolve and gate a token, returning the acting subject id.
  async fn authorize(&self, token: &str, role: Role) -> Result<String, HubError> {
    let state = self.identity.lookup(token).await?;
    match check_access(&state, role) {
      Access::Allowed { subject_id } => Ok(subject_id),
      Access::Denied(reason) => Err(HubError::AccessDenied(reason)),
      Access::Pending => Err(HubError::SessionPending),
    }
  }

  /// Import workflow JSON as a new template.
  ///
  /// The input goes through ingestion and graph validation before anything
  /// is written; a template name defaults to "Untitled workflow" when the
  /// input carried none.
  #[instrument(name = "hub_import", skip(self, token, text), fields(category = ?category))]
  pub async fn import_template(
    &self,
    token: &str,
    text: &str,
    category: Option<String>,
  ) -> Result<Template, HubError> {
    let subject_id = self.authorize(token, Role::Member).await?;

    let parsed = parse_workflow(text)?;
    let diagram = parsed.diagram();
    let workflow = Workflow::from_parsed(parsed)?;
    let entry_points = workflow.graph().entry_points().len();

    let now = Utc::now();
    let template = Template {
      template_id: Uuid::new_v4().to_string(),
      name: workflow
        .name
        .unwrap_or_else(|| "Untitled workflow".to_string()),
      description: workflow.description,
      category,
      author_id: subject_id,
      diagram: Json(Value::from(diagram)),
      created_at: now,
      updated_at: now,
    };

    self.store.create_template(&template).await?;
    self.counts.invalidate();
    info!(
      template_id = %template.template_id,
      name = %template.name,
      entry_points,
      "imported template"
    );

    Ok(template)
  }

  /// Get a template by ID. Public read.
  pub async fn get_template(&self, template_id: &str) -> Result<Template, HubError> {
    Ok(self.store.get_template(template_id).await?)
  }

  /// List templates, optionally filtered by category. Public read.
  pub async fn browse(&self, category: Option<&str>) -> Result<Vec<Template>, HubError> {
    Ok(self.store.list_templates(category).await?)
  }

  /// Wrap a stored template in a download envelope. Public read.
  pub async fn export_template(&self, template_id: &str) -> Result<ExportEnvelope, HubError> {
    let template = self.store.get_template(template_id).await?;

    // Stored diagrams are canonical by construction; a decode failure here
    // means the row was tampered with.
    let diagram: Diagram =
      serde_json::from_value(template.diagram.0).map_err(IngestError::from)?;

    Ok(ExportEnvelope::single(
      template.name,
      template.description,
      diagram,
    ))
  }

  /// Replace a template's diagram. Only the author or an admin may modify.
  #[instrument(name = "hub_update", skip(self, token, text))]
  pub async fn update_template(
    &self,
    token: &str,
    template_id: &str,
    text: &str,
  ) -> Result<Template, HubError> {
    let subject_id = self.authorize(token, Role::Member).await?;
    let mut template = self.store.get_template(template_id).await?;

    if template.author_id != subject_id {
      self.authorize(token, Role::Admin).await?;
    }

    let parsed = parse_workflow(text)?;
    let diagram = parsed.diagram();
    let workflow = Workflow::from_parsed(parsed)?;

    if let Some(name) = workflow.name {
      template.name = name;
    }
    if let Some(description) = workflow.description {
      template.description = Some(description);
    }
    template.diagram = Json(Value::from(diagram));
    template.updated_at = Utc::now();

    self.store.update_template(&template).await?;
    self.counts.invalidate();
    info!(template_id = %template.template_id, "updated template");

    Ok(template)
  }

  /// Delete a template. Only the author or an admin may delete.
  #[instrument(name = "hub_delete", skip(self, token))]
  pub async fn delete_template(&self, token: &str, template_id: &str) -> Result<(), HubError> {
    let subject_id = self.authorize(token, Role::Member).await?;
    let template = self.store.get_template(template_id).await?;

    if template.author_id != subject_id {
      self.authorize(token, Role::Admin).await?;
    }

    self.store.delete_template(template_id).await?;
    self.counts.invalidate();
    info!(template_id, "deleted template");

    Ok(())
  }

  /// Per-category template counts, served through the TTL cache.
  pub async fn category_counts(&self) -> Result<Vec<CategoryCount>, HubError> {
    Ok(self.counts.get_or_refresh(&self.store).await?)
  }
}
