//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. IDs are random v4 UUIDs, so entities created
//! in quick succession never collide.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Shortest display-id prefix accepted by `matches`
const MIN_SHORT_ID_LEN: usize = 4;

/// How a piece of user input relates to an ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdMatch {
    None,
    /// A short form that the full UUID starts with
    Prefix,
    /// The full UUID
    Exact,
}

/// Result of resolving user input to a single record
#[derive(Debug, PartialEq)]
pub enum Lookup<'a, T> {
    Found(&'a T),
    Missing,
    /// Number of records the input matched equally well
    Ambiguous(usize),
}

impl<'a, T> Lookup<'a, T> {
    pub fn found(self) -> Option<&'a T> {
        match self {
            Lookup::Found(item) => Some(item),
            _ => None,
        }
    }
}

/// Resolve user input against a set of records
///
/// `key` reports how the input matches a record's id and whether it equals
/// the record's name. A full UUID wins over an exact name, which wins over a
/// short id prefix. Several matches at the winning level are ambiguous.
pub fn resolve<'a, T>(
    items: impl IntoIterator<Item = &'a T>,
    key: impl Fn(&T) -> (IdMatch, bool),
) -> Lookup<'a, T> {
    let mut exact = Vec::new();
    let mut named = Vec::new();
    let mut prefixed = Vec::new();

    for item in items {
        let (id_match, name_match) = key(item);
        match id_match {
            IdMatch::Exact => exact.push(item),
            IdMatch::Prefix => prefixed.push(item),
            IdMatch::None => {}
        }
        if name_match {
            named.push(item);
        }
    }

    for tier in [exact, named, prefixed] {
        match tier.as_slice() {
            [] => continue,
            [item] => return Lookup::Found(*item),
            many => return Lookup::Ambiguous(many.len()),
        }
    }
    Lookup::Missing
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Check whether user input refers to this ID
            ///
            /// Accepts the full UUID, or the shortened display form with or
            /// without its prefix (e.g. `bud-1a2b3c4d` or `1a2b`).
            pub fn matches(&self, input: &str) -> bool {
                self.match_input(input) != IdMatch::None
            }

            /// How closely user input matches this ID
            pub fn match_input(&self, input: &str) -> IdMatch {
                let input = input.trim();
                if let Ok(uuid) = Uuid::parse_str(input) {
                    return if uuid == self.0 { IdMatch::Exact } else { IdMatch::None };
                }
                let short = input.strip_prefix($display_prefix).unwrap_or(input);
                if short.len() >= MIN_SHORT_ID_LEN
                    && self.0.to_string().starts_with(&short.to_ascii_lowercase())
                {
                    IdMatch::Prefix
                } else {
                    IdMatch::None
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(BudgetId, "bud-");
define_id!(TransactionId, "txn-");
define_id!(GoalId, "goal-");
define_id!(RecurringId, "rec-");
