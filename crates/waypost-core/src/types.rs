//! Core domain types for the client registry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Number of slots in the vertex directory, and the side length of the
/// adjacency matrix.
pub const CAPACITY: usize = 10;

/// Longest accepted name or neighborhood, in characters.
pub const MAX_FIELD_LEN: usize = 9;

// ── Client ────────────────────────────────────────────────────────

/// A registered client, identified by name and neighborhood together.
///
/// Equality is exact and case-sensitive on both fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "ClientFields")]
pub struct Client {
    name: String,
    neighborhood: String,
}

impl Client {
    /// Build a client after checking both fields against `MAX_FIELD_LEN`.
    ///
    /// Callers are expected to hand over already-trimmed text; no trimming
    /// happens here.
    pub fn new(name: impl Into<String>, neighborhood: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let neighborhood = neighborhood.into();
        validate_field("name", &name)?;
        validate_field("neighborhood", &neighborhood)?;
        Ok(Self { name, neighborhood })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    /// Whether this client carries exactly the given identity.
    pub fn matches(&self, name: &str, neighborhood: &str) -> bool {
        self.name == name && self.neighborhood == neighborhood
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.neighborhood)
    }
}

/// Unvalidated wire form of a client, checked on deserialization.
#[derive(Deserialize)]
struct ClientFields {
    name: String,
    neighborhood: String,
}

impl TryFrom<ClientFields> for Client {
    type Error = CoreError;

    fn try_from(fields: ClientFields) -> Result<Self> {
        Client::new(fields.name, fields.neighborhood)
    }
}

fn validate_field(field: &'static str, value: &str) -> Result<()> {
    let len = value.chars().count();
    if len == 0 {
        return Err(CoreError::EmptyField { field });
    }
    if len > MAX_FIELD_LEN {
        return Err(CoreError::FieldTooLong {
            field,
            len,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(())
}
