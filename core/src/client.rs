//! Stateless HTTP request builder and response parser for the bootcamp API.
//!
//! # Design
//! `BootcampClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Both are generic over [`Resource`], so engineers and devs
//! share one implementation and differ only in their collection path.

use crate::codec::{decode, encode, trim_quotes};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Dev, EngineerPayload, Resource};

/// Synchronous, stateless request builder for the bootcamp API.
#[derive(Debug, Clone)]
pub struct BootcampClient {
    base_url: String,
}

impl BootcampClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list<R: Resource>(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/{}", self.base_url, R::COLLECTION),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get<R: Resource>(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/{}/id/{id}", self.base_url, R::COLLECTION),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create<R: Resource>(&self, entity: &R) -> Result<HttpRequest, ApiError> {
        Ok(json_request(
            HttpMethod::Post,
            format!("{}/{}", self.base_url, R::COLLECTION),
            encode(entity)?,
        ))
    }

    pub fn build_update<R: Resource>(&self, entity: &R) -> Result<HttpRequest, ApiError> {
        Ok(json_request(
            HttpMethod::Put,
            format!("{}/{}/{}", self.base_url, R::COLLECTION, trim_quotes(entity.id())),
            encode(entity)?,
        ))
    }

    pub fn build_delete<R: Resource>(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/{}/{}", self.base_url, R::COLLECTION, trim_quotes(id)),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_attach_engineer(
        &self,
        dev_id: &str,
        engineer_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        let payload = EngineerPayload {
            engineer_id: engineer_id.to_string(),
        };
        Ok(json_request(
            HttpMethod::Post,
            format!("{}/{}/{dev_id}", self.base_url, Dev::COLLECTION),
            encode(&payload)?,
        ))
    }

    pub fn parse_list<R: Resource>(&self, response: HttpResponse) -> Result<Vec<R>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_get<R: Resource>(&self, response: HttpResponse) -> Result<R, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_create<R: Resource>(&self, response: HttpResponse) -> Result<R, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_update<R: Resource>(&self, response: HttpResponse) -> Result<R, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// The delete response body is ignored.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    /// The body must be a JSON object. Its fields are not checked: missing
    /// or extra fields still count as success.
    pub fn parse_attach_engineer(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)?;
        match decode::<serde_json::Value>(&response.body)? {
            serde_json::Value::Object(dev) => {
                let dev_id = dev.get("id").and_then(serde_json::Value::as_str).unwrap_or("");
                tracing::debug!(dev_id, "engineer attached");
                Ok(())
            }
            other => Err(ApiError::Decode(format!(
                "attach response is not a JSON object: {other}"
            ))),
        }
    }
}

fn json_request(method: HttpMethod, url: String, body: String) -> HttpRequest {
    HttpRequest {
        method,
        url,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    }
}

/// Anything but 200 or 201 becomes `HttpStatus` with the body kept verbatim.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 | 201 => Ok(()),
        status => Err(ApiError::HttpStatus {
            status,
            body: response.body.clone(),
        }),
    }
}
