//! Raw release record input type.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One publishable change set as received from the release-publication
/// event. Treated as an immutable snapshot for the whole invocation.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct RawRelease {
    /// Release title, often a headline like "Major Release v2.0"
    #[serde(default)]
    pub title: String,
    /// Free-form markdown-like release body
    #[serde(default)]
    pub body: String,
    /// Version-control tag the release was published under
    #[serde(default)]
    pub tag: String,
    /// Link to the full release record
    #[serde(default)]
    pub url: String,
}
