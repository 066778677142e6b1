//! Executing client: request builder, transport and parser composed.
//!
//! # Design
//! `Api` is the one explicit client value handed to every consumer. It is
//! built once from a base host and a [`Transport`], and holds no state that
//! changes between calls. [`Crud`] is the capability contract every resource
//! family satisfies; [`Api::engineers`] and [`Api::devs`] hand out
//! [`Resources`] views that implement it.

use std::marker::PhantomData;

use crate::client::BootcampClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::transport::UreqTransport;
use crate::types::{Dev, Engineer, Resource};

/// The fixed operation set of a resource family.
pub trait Crud {
    type Entity;

    fn get(&self, id: &str) -> Result<Self::Entity, ApiError>;
    fn list(&self) -> Result<Vec<Self::Entity>, ApiError>;
    fn create(&self, entity: &Self::Entity) -> Result<Self::Entity, ApiError>;
    fn update(&self, entity: &Self::Entity) -> Result<Self::Entity, ApiError>;
    fn delete(&self, id: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct Api<T = UreqTransport> {
    client: BootcampClient,
    transport: T,
}

impl Api<UreqTransport> {
    /// Client for `host` with the default 10 second deadline.
    pub fn new(host: &str) -> Self {
        Self::with_transport(host, UreqTransport::new())
    }
}

impl<T: Transport> Api<T> {
    pub fn with_transport(host: &str, transport: T) -> Self {
        Self {
            client: BootcampClient::new(host),
            transport,
        }
    }

    pub fn client(&self) -> &BootcampClient {
        &self.client
    }

    pub fn engineers(&self) -> Resources<'_, Engineer, T> {
        Resources::new(self)
    }

    pub fn devs(&self) -> Resources<'_, Dev, T> {
        Resources::new(self)
    }

    /// Attach an existing engineer to an existing dev.
    ///
    /// Neither id is trimmed: the path is built from the values as given.
    pub fn attach_engineer(&self, dev_id: &str, engineer_id: &str) -> Result<(), ApiError> {
        tracing::debug!(dev_id, engineer_id, "attaching engineer to dev");
        let request = self.client.build_attach_engineer(dev_id, engineer_id)?;
        let response = self.send(request)?;
        self.client
            .parse_attach_engineer(response)
            .inspect_err(|e| tracing::debug!(dev_id, engineer_id, error = %e, "attach failed"))
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method.as_str();
        let url = request.url.clone();
        match self.transport.execute(request) {
            Ok(response) => {
                tracing::debug!(method, url = %url, status = response.status, "request completed");
                Ok(response)
            }
            Err(e) => {
                tracing::debug!(method, url = %url, error = %e, "request failed");
                Err(e)
            }
        }
    }
}

/// One resource family seen through an [`Api`].
#[derive(Debug)]
pub struct Resources<'a, R, T> {
    api: &'a Api<T>,
    _resource: PhantomData<R>,
}

impl<'a, R, T> Resources<'a, R, T> {
    fn new(api: &'a Api<T>) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource, T: Transport> Resources<'_, R, T> {
    fn observe<V>(
        &self,
        operation: &str,
        id: &str,
        result: Result<V, ApiError>,
    ) -> Result<V, ApiError> {
        if let Err(e) = &result {
            tracing::debug!(resource = R::KIND, operation, id, error = %e, "operation failed");
        }
        result
    }
}

impl<R: Resource, T: Transport> Crud for Resources<'_, R, T> {
    type Entity = R;

    fn get(&self, id: &str) -> Result<R, ApiError> {
        tracing::debug!(resource = R::KIND, id, "get");
        let client = &self.api.client;
        let result = self
            .api
            .send(client.build_get::<R>(id))
            .and_then(|response| client.parse_get::<R>(response));
        self.observe("get", id, result)
    }

    fn list(&self) -> Result<Vec<R>, ApiError> {
        tracing::debug!(resource = R::KIND, "list");
        let client = &self.api.client;
        let result = self
            .api
            .send(client.build_list::<R>())
            .and_then(|response| client.parse_list::<R>(response));
        self.observe("list", "", result)
    }

    fn create(&self, entity: &R) -> Result<R, ApiError> {
        tracing::debug!(resource = R::KIND, "create");
        let client = &self.api.client;
        let result = client
            .build_create(entity)
            .and_then(|request| self.api.send(request))
            .and_then(|response| client.parse_create::<R>(response));
        let created = self.observe("create", "", result)?;
        tracing::debug!(resource = R::KIND, id = created.id(), "created");
        Ok(created)
    }

    fn update(&self, entity: &R) -> Result<R, ApiError> {
        tracing::debug!(resource = R::KIND, id = entity.id(), "update");
        let client = &self.api.client;
        let result = client
            .build_update(entity)
            .and_then(|request| self.api.send(request))
            .and_then(|response| client.parse_update::<R>(response));
        self.observe("update", entity.id(), result)
    }

    fn delete(&self, id: &str) -> Result<(), ApiError> {
        tracing::debug!(resource = R::KIND, id, "delete");
        let client = &self.api.client;
        let result = self
            .api
            .send(client.build_delete::<R>(id))
            .and_then(|response| client.parse_delete(response));
        self.observe("delete", id, result)
    }
}
