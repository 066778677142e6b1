//! Domain DTOs for the bootcamp API.
//!
//! # Design
//! Field names match the remote schema exactly and nothing is defaulted on
//! decode: a body missing `id`, `name`, `email` or `engineers` is rejected.
//! An explicit `"engineers": null` is read as an empty team.
//! Identifiers are opaque strings assigned by the server. A freshly planned
//! entity carries an empty `id`, which the server ignores on create.
//!
//! The types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// An entity family served under its own collection path.
///
/// Implemented by [`Engineer`] and [`Dev`]; the generic request builder and
/// [`crate::api::Resources`] are written once against this trait.
pub trait Resource: Serialize + DeserializeOwned + Debug {
    /// Collection path segment, e.g. `engineers` in `/engineers/id/{id}`.
    const COLLECTION: &'static str;

    /// Singular name used in log events and error messages.
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// A person known to the bootcamp API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Engineer {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Engineer {
    /// An engineer not yet known to the server.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Resource for Engineer {
    const COLLECTION: &'static str = "engineers";
    const KIND: &'static str = "engineer";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A team of engineers. The server embeds full [`Engineer`] objects, in an
/// order it alone decides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dev {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub engineers: Vec<Engineer>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Engineer>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Engineer>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Dev {
    /// A dev with no engineers, not yet known to the server.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            engineers: Vec::new(),
        }
    }
}

impl Resource for Dev {
    const COLLECTION: &'static str = "dev";
    const KIND: &'static str = "dev";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Request body for attaching an existing engineer to a dev.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineerPayload {
    #[serde(rename = "id")]
    pub engineer_id: String,
}
