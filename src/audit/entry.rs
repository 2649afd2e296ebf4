//! Audit entry data structures
//!
//! Defines the structure of audit log entries including operation types,
//! entity types, and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::{Effect, Entity};

use super::diff::generate_diff;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Budget,
    Transaction,
    Goal,
    Recurring,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Budget => write!(f, "Budget"),
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::Goal => write!(f, "Goal"),
            EntityType::Recurring => write!(f, "Recurring"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Name of the dispatched action
    pub action: String,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Display ID of the affected entity
    pub entity_id: String,

    /// Human-readable description of the entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Entity before the operation (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    /// Entity after the operation (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Build an entry describing an applied action
    pub fn from_effect(action: &str, effect: &Effect) -> Self {
        let entity = effect.entity();
        let (operation, before, after) = match effect {
            Effect::Created(e) => (Operation::Create, None, Some(entity_json(e))),
            Effect::Updated { before, after } => (
                Operation::Update,
                Some(entity_json(before)),
                Some(entity_json(after)),
            ),
            Effect::Deleted(e) => (Operation::Delete, Some(entity_json(e)), None),
        };

        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            action: action.to_string(),
            operation,
            entity_type: entity_type(entity),
            entity_id: entity.id_string(),
            entity_name: Some(entity.label().to_string()),
            before,
            after,
            diff_summary,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

fn entity_type(entity: &Entity) -> EntityType {
    match entity {
        Entity::Budget(_) => EntityType::Budget,
        Entity::Transaction { .. } => EntityType::Transaction,
        Entity::Goal(_) => EntityType::Goal,
        Entity::Recurring(_) => EntityType::Recurring,
    }
}

fn entity_json(entity: &Entity) -> Value {
    let value = match entity {
        Entity::Budget(b) => serde_json::to_value(b),
        Entity::Transaction {
            budget_id,
            transaction,
        } => serde_json::to_value(transaction).map(|mut v| {
            if let Value::Object(map) = &mut v {
                map.insert("budget_id".into(), Value::String(budget_id.as_uuid().to_string()));
            }
            v
        }),
        Entity::Goal(g) => serde_json::to_value(g),
        Entity::Recurring(r) => serde_json::to_value(r),
    };
    value.unwrap_or(Value::Null)
}
