//! Resource lifecycle handlers: create, read, update, delete and import for
//! engineers and devs, plus the list-only data sources.
//!
//! # Design
//! These map a planned or stored model onto one or more API calls and build
//! the resulting state. The plugin host owns plans, diffs and persistence;
//! nothing here is cached between calls.
//!
//! Dev creation is several requests in sequence (create, then fetch and
//! attach each engineer). A failure part way through is returned as is and
//! whatever already happened on the server stays there.

use chrono::Utc;

use crate::api::{Api, Crud};
use crate::codec::trim_quotes;
use crate::error::{ApiError, ResourceError};
use crate::http::Transport;
use crate::types::{Dev, Engineer};

/// Stored state of an engineer resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineerModel {
    pub id: String,
    pub name: String,
    pub email: String,
    pub last_updated: Option<String>,
}

impl EngineerModel {
    /// A plan for a new engineer. The id is computed by the server.
    pub fn planned(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            email: email.into(),
            last_updated: None,
        }
    }

    fn to_entity(&self) -> Engineer {
        Engineer {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    fn refresh(&mut self, engineer: Engineer) {
        self.id = engineer.id;
        self.name = engineer.name;
        self.email = engineer.email;
    }
}

/// Stored state of a dev resource. In a plan only the engineer ids are
/// meaningful; names and emails are filled in from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevModel {
    pub id: String,
    pub name: String,
    pub engineers: Vec<Engineer>,
    pub last_updated: Option<String>,
}

impl DevModel {
    pub fn planned<I, S>(name: impl Into<String>, engineer_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: String::new(),
            name: name.into(),
            engineers: engineer_ids
                .into_iter()
                .map(|id| Engineer {
                    id: id.into(),
                    name: String::new(),
                    email: String::new(),
                })
                .collect(),
            last_updated: None,
        }
    }

    fn refresh(&mut self, dev: Dev) {
        self.id = dev.id;
        self.name = dev.name;
        self.engineers = dev.engineers;
    }
}

/// RFC 850 style, e.g. `Monday, 02-Jan-06 15:04:05 UTC`.
fn timestamp() -> String {
    Utc::now().format("%A, %d-%b-%y %H:%M:%S UTC").to_string()
}

fn context(message: String) -> impl FnOnce(ApiError) -> ResourceError {
    move |source| ResourceError::new(message, source)
}

pub struct EngineerResource<'a, T> {
    api: &'a Api<T>,
}

impl<'a, T: Transport> EngineerResource<'a, T> {
    pub fn new(api: &'a Api<T>) -> Self {
        Self { api }
    }

    pub fn create(&self, plan: &EngineerModel) -> Result<EngineerModel, ResourceError> {
        let created = self
            .api
            .engineers()
            .create(&plan.to_entity())
            .map_err(context("could not create engineer".to_string()))?;

        let mut state = plan.clone();
        state.refresh(created);
        state.last_updated = Some(timestamp());
        tracing::info!(id = %state.id, "engineer created");
        Ok(state)
    }

    pub fn read(&self, state: &EngineerModel) -> Result<EngineerModel, ResourceError> {
        let engineer = self
            .api
            .engineers()
            .get(&state.id)
            .map_err(context(format!("could not read engineer id {}", state.id)))?;

        let mut state = state.clone();
        state.refresh(engineer);
        Ok(state)
    }

    pub fn update(&self, plan: &EngineerModel) -> Result<EngineerModel, ResourceError> {
        let updated = self
            .api
            .engineers()
            .update(&plan.to_entity())
            .map_err(context(format!("could not update engineer id {}", plan.id)))?;

        let mut state = plan.clone();
        state.refresh(updated);
        state.last_updated = Some(timestamp());
        Ok(state)
    }

    pub fn delete(&self, state: &EngineerModel) -> Result<(), ResourceError> {
        self.api
            .engineers()
            .delete(&state.id)
            .map_err(context(format!("could not delete engineer id {}", state.id)))?;
        tracing::info!(id = %state.id, "engineer deleted");
        Ok(())
    }

    /// Adopt an existing engineer by id.
    pub fn import(&self, id: &str) -> Result<EngineerModel, ResourceError> {
        let mut state = EngineerModel::planned("", "");
        state.id = id.to_string();
        self.read(&state)
    }
}

pub struct DevResource<'a, T> {
    api: &'a Api<T>,
}

impl<'a, T: Transport> DevResource<'a, T> {
    pub fn new(api: &'a Api<T>) -> Self {
        Self { api }
    }

    /// Create the dev, then attach the planned engineers one at a time in plan
    /// order.
    pub fn create(&self, plan: &DevModel) -> Result<DevModel, ResourceError> {
        let dev = self
            .api
            .devs()
            .create(&Dev::new(plan.name.clone()))
            .map_err(context("could not create dev".to_string()))?;

        let mut engineers = Vec::with_capacity(plan.engineers.len());
        for planned in &plan.engineers {
            let id = trim_quotes(&planned.id);
            let engineer = self
                .api
                .engineers()
                .get(id)
                .map_err(context(format!("could not read engineer id {id}")))?;
            self.api
                .attach_engineer(&dev.id, &engineer.id)
                .map_err(context(format!(
                    "could not add engineer id {} to dev {}",
                    engineer.id, dev.id
                )))?;
            engineers.push(engineer);
        }

        tracing::info!(id = %dev.id, engineers = engineers.len(), "dev created");
        Ok(DevModel {
            id: dev.id,
            name: dev.name,
            engineers,
            last_updated: Some(timestamp()),
        })
    }

    pub fn read(&self, state: &DevModel) -> Result<DevModel, ResourceError> {
        let dev = self
            .api
            .devs()
            .get(&state.id)
            .map_err(context(format!("could not read dev id {}", state.id)))?;

        let mut state = state.clone();
        state.refresh(dev);
        Ok(state)
    }

    /// Replace the dev's name and engineer list in one PUT.
    pub fn update(&self, plan: &DevModel) -> Result<DevModel, ResourceError> {
        let mut dev = Dev::new(plan.name.clone());
        dev.id = plan.id.clone();
        for planned in &plan.engineers {
            let id = trim_quotes(&planned.id);
            let engineer = self
                .api
                .engineers()
                .get(id)
                .map_err(context(format!("could not read engineer id {id}")))?;
            dev.engineers.push(engineer);
        }

        let updated = self
            .api
            .devs()
            .update(&dev)
            .map_err(context(format!("could not update dev id {}", plan.id)))?;

        let mut state = plan.clone();
        state.refresh(updated);
        state.last_updated = Some(timestamp());
        Ok(state)
    }

    pub fn delete(&self, state: &DevModel) -> Result<(), ResourceError> {
        self.api
            .devs()
            .delete(&state.id)
            .map_err(context(format!("could not delete dev id {}", state.id)))?;
        tracing::info!(id = %state.id, "dev deleted");
        Ok(())
    }

    /// Adopt an existing dev by id.
    pub fn import(&self, id: &str) -> Result<DevModel, ResourceError> {
        let mut state = DevModel::planned("", Vec::<String>::new());
        state.id = id.to_string();
        self.read(&state)
    }
}

/// Every engineer known to the API.
pub fn read_engineers<T: Transport>(api: &Api<T>) -> Result<Vec<Engineer>, ResourceError> {
    api.engineers()
        .list()
        .map_err(context("unable to read engineers".to_string()))
}

/// Every dev known to the API, engineers embedded.
pub fn read_devs<T: Transport>(api: &Api<T>) -> Result<Vec<Dev>, ResourceError> {
    api.devs()
        .list()
        .map_err(context("unable to read devs".to_string()))
}
