use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct State {
    pub abbrev: String,
    pub name: String,
}

/// Body of POST /states
#[derive(Debug, Clone, Deserialize)]
pub struct StateInput {
    pub abbrev: String,
    pub name: String,
}

/// Body of PUT /states/:abbrev
///
/// The key comes from the path; an `abbrev` in the body is accepted but never applied.
#[derive(Debug, Clone, Deserialize)]
pub struct StateUpdate {
    #[serde(default)]
    pub abbrev: Option<String>,
    pub name: String,
}
