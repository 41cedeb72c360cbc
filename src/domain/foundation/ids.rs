//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Identifier of a browser session on the landing page.
///
/// Sessions are never persisted. The id only scopes the single in-flight
/// audit a visitor is allowed to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random SessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("session_id", e.to_string()))
    }
}

/// Correlates one outbound model call with its log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Creates a new random TraceId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_round_trips_through_string() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn session_id_parse_trims_whitespace() {
        let uuid = Uuid::new_v4();
        let parsed: SessionId = format!("  {}  ", uuid).parse().unwrap();
        assert_eq!(parsed.to_string(), uuid.to_string());
    }

    #[test]
    fn session_id_rejects_garbage() {
        let err = "not-a-session".parse::<SessionId>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert_eq!(err.field(), "session_id");
    }

    #[test]
    fn trace_ids_are_unique() {
        assert_ne!(TraceId::new(), TraceId::new());
    }
}
