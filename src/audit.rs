use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::{models::AuditEntry, store::StoreData};

/// Records an action in the in-memory audit trail, capped at `AUDIT_CAPACITY` entries.
pub fn log_audit(
    data: &mut StoreData,
    user_id: Option<Uuid>,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) {
    tracing::info!(
        user_id = ?user_id,
        action,
        resource = resource.unwrap_or("-"),
        "audit"
    );
    data.audit.push(AuditEntry {
        id: Uuid::new_v4(),
        user_id,
        action: action.to_string(),
        resource: resource.map(str::to_string),
        metadata,
        created_at: Utc::now(),
    });
    if data.audit.len() > AUDIT_CAPACITY {
        let overflow = data.audit.len() - AUDIT_CAPACITY;
        data.audit.drain(..overflow);
    }
}

pub const AUDIT_CAPACITY: usize = 1000;
