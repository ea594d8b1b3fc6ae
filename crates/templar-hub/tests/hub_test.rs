//! Integration tests for the hub over an in-memory store and a fixed
//! identity table.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;

use templar_hub::{Hub, HubError};
use templar_ingest::parse_workflow;
use templar_session::{
  DenyReason, FixedIdentityProvider, IdentityProvider, SessionState, Subject,
};
use templar_store::SqliteStore;

const MEMBER_TOKEN: &str = "tok-member";
const OTHER_TOKEN: &str = "tok-other";
const ADMIN_TOKEN: &str = "tok-admin";

const DIAGRAM: &str = r#"{"nodes":[{"id":"start"},{"id":"review"}],"edges":[{"source":"start","target":"review"}]}"#;

async fn test_store() -> SqliteStore {
  let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("failed to open in-memory database");

  let store = SqliteStore::new(pool);
  store.migrate().await.expect("migrations failed");
  store
}

fn identity() -> FixedIdentityProvider {
  let mut subjects = HashMap::new();
  subjects.insert(
    MEMBER_TOKEN.to_string(),
    Subject {
      subject_id: "user-1".to_string(),
      is_admin: false,
    },
  );
  subjects.insert(
    OTHER_TOKEN.to_string(),
    Subject {
      subject_id: "user-2".to_string(),
      is_admin: false,
    },
  );
  subjects.insert(
    ADMIN_TOKEN.to_string(),
    Subject {
      subject_id: "root".to_string(),
      is_admin: true,
    },
  );
  FixedIdentityProvider::new(subjects)
}

async fn test_hub() -> Hub<SqliteStore, FixedIdentityProvider> {
  Hub::new(test_store().await, identity())
}

#[tokio::test]
async fn test_import_with_unknown_token_is_denied_and_writes_nothing() {
  let hub = test_hub().await;

  let err = hub.import_template("nope", DIAGRAM, None).await.unwrap_err();
  assert!(matches!(
    err,
    HubError::AccessDenied(DenyReason::Unauthenticated)
  ));

  assert!(hub.browse(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_import_persists_template() {
  let hub = test_hub().await;

  let template = hub
    .import_template(MEMBER_TOKEN, DIAGRAM, Some("compliance".to_string()))
    .await
    .unwrap();

  assert_eq!(template.name, "Untitled workflow");
  assert_eq!(template.author_id, "user-1");
  assert_eq!(template.category.as_deref(), Some("compliance"));

  let fetched = hub.get_template(&template.template_id).await.unwrap();
  assert_eq!(fetched.diagram.0["nodes"][0]["id"], "start");
}

#[tokio::test]
async fn test_import_envelope_carries_name_and_description() {
  let hub = test_hub().await;
  let text = r#"{"version":1,"data":{"workflows":[{"diagramJson":{"nodes":[{"id":"n1"}],"edges":[]},"name":"Vendor audit","description":"Annual"}]}}"#;

  let template = hub.import_template(MEMBER_TOKEN, text, None).await.unwrap();

  assert_eq!(template.name, "Vendor audit");
  assert_eq!(template.description.as_deref(), Some("Annual"));
}

#[tokio::test]
async fn test_import_rejects_malformed_input() {
  let hub = test_hub().await;
  let err = hub
    .import_template(MEMBER_TOKEN, "not json", None)
    .await
    .unwrap_err();
  assert!(matches!(err, HubError::Malformed(_)));
}

#[tokio::test]
async fn test_import_rejects_invalid_graph() {
  let hub = test_hub().await;
  let text = r#"{"nodes":[{"id":"a"}],"edges":[{"source":"a","target":"ghost"}]}"#;
  let err = hub
    .import_template(MEMBER_TOKEN, text, None)
    .await
    .unwrap_err();
  assert!(matches!(err, HubError::InvalidWorkflow(_)));
}

#[tokio::test]
async fn test_export_round_trips_through_the_ingestor() {
  let hub = test_hub().await;
  let template = hub
    .import_template(MEMBER_TOKEN, DIAGRAM, None)
    .await
    .unwrap();

  let envelope = hub.export_template(&template.template_id).await.unwrap();
  let text = serde_json::to_string(&envelope).unwrap();

  let parsed = parse_workflow(&text).unwrap();
  assert_eq!(parsed.raw_nodes.len(), 2);
  assert_eq!(parsed.raw_edges.len(), 1);
  assert_eq!(parsed.name.as_deref(), Some("Untitled workflow"));
}

#[tokio::test]
async fn test_update_by_non_author_is_forbidden() {
  let hub = test_hub().await;
  let template = hub
    .import_template(MEMBER_TOKEN, DIAGRAM, None)
    .await
    .unwrap();

  let err = hub
    .update_template(OTHER_TOKEN, &template.template_id, DIAGRAM)
    .await
    .unwrap_err();
  assert!(matches!(err, HubError::AccessDenied(DenyReason::Forbidden)));
}

#[tokio::test]
async fn test_admin_may_update_any_template() {
  let hub = test_hub().await;
  let template = hub
    .import_template(MEMBER_TOKEN, DIAGRAM, None)
    .await
    .unwrap();

  let text = r#"{"version":1,"data":{"workflows":[{"diagramJson":{"nodes":[{"id":"only"}],"edges":[]},"name":"Rewritten"}]}}"#;
  let updated = hub
    .update_template(ADMIN_TOKEN, &template.template_id, text)
    .await
    .unwrap();

  assert_eq!(updated.name, "Rewritten");
  assert_eq!(updated.author_id, "user-1");
  assert_eq!(updated.diagram.0["nodes"][0]["id"], "only");
}

#[tokio::test]
async fn test_author_may_delete_own_template() {
  let hub = test_hub().await;
  let template = hub
    .import_template(MEMBER_TOKEN, DIAGRAM, None)
    .await
    .unwrap();

  hub
    .delete_template(MEMBER_TOKEN, &template.template_id)
    .await
    .unwrap();
  assert!(hub.browse(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_counts_refresh_after_writes() {
  let hub = test_hub().await;

  hub
    .import_template(MEMBER_TOKEN, DIAGRAM, Some("compliance".to_string()))
    .await
    .unwrap();
  let counts = hub.category_counts().await.unwrap();
  assert_eq!(counts.len(), 1);
  assert_eq!(counts[0].count, 1);

  hub
    .import_template(MEMBER_TOKEN, DIAGRAM, Some("compliance".to_string()))
    .await
    .unwrap();
  let counts = hub.category_counts().await.unwrap();
  assert_eq!(counts[0].count, 2);
}

/// Identity provider stub that never finishes resolving.
struct PendingIdentityProvider;

#[async_trait]
impl IdentityProvider for PendingIdentityProvider {
  async fn lookup(&self, _token: &str) -> Result<SessionState, templar_session::Error> {
    Ok(SessionState::Pending)
  }
}

#[tokio::test]
async fn test_pending_session_is_not_a_denial() {
  let hub = Hub::new(test_store().await, PendingIdentityProvider);

  let err = hub
    .import_template("whatever", DIAGRAM, None)
    .await
    .unwrap_err();
  assert!(matches!(err, HubError::SessionPending));
}
