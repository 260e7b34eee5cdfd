//! Request and response bodies.
//!
//! Area, slot and variant tokens arrive as strings and are parsed in the
//! handlers so a bad token becomes a 400 with a readable message instead of a
//! generic deserialization failure.

use serde::{Deserialize, Serialize};

use slc_core::models::Class;

#[derive(Debug, Clone, Deserialize)]
pub struct InitRequest {
    #[serde(default)]
    pub class1: Class,
    #[serde(default)]
    pub class2: Class,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub properties: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub variant: String,
    #[serde(default)]
    pub properties: Vec<String>,
}

/// Body of `prop/add` and `prop/remove`.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyRequest {
    pub area: String,
    pub property: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovePropertyRequest {
    pub from: String,
    pub to: String,
    pub property: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenamePropertyRequest {
    pub area: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenameClassRequest {
    pub class: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}
