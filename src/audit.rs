use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use uuid::Uuid;

use crate::{entity::audit_logs::ActiveModel, error::AppResult, state::AppState};

pub async fn log_audit(
    state: &AppState,
    action: &str,
    resource: &str,
    metadata: Option<Value>,
) -> AppResult<()> {
    ActiveModel {
        id: Set(Uuid::new_v4()),
        action: Set(action.to_string()),
        resource: Set(resource.to_string()),
        metadata: Set(metadata),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    Ok(())
}

/// Audit a mutation; failures are logged and never reach the caller.
pub async fn record(state: &AppState, action: &str, resource: &str, metadata: Value) {
    if let Err(err) = log_audit(state, action, resource, Some(metadata)).await {
        tracing::warn!(error = %err, action, "audit log failed");
    }
}
