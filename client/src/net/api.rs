//! REST collaborator for the rental backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Pages depend on the `RentalApi` trait rather than on `HttpApi`, which keeps
//! the workflows in `state` testable with a scripted fake.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use async_trait::async_trait;

use super::credentials::CredentialProvider;
use super::error::ApiError;
use super::types::{PropertyCollection, PropertyPayload, PropertyRecord, Tenant, Testimonial};
use crate::config::ApiConfig;

/// Operations the admin performs against the backend.
#[async_trait(?Send)]
pub trait RentalApi: Send + Sync {
    /// `GET /property/properties`. A non-array body is `Ok(Malformed)`.
    async fn list_properties(&self) -> Result<PropertyCollection, ApiError>;
    async fn get_property(&self, property_id: &str) -> Result<PropertyRecord, ApiError>;
    /// Returns the created record as echoed by the server.
    async fn create_property(&self, payload: &PropertyPayload) -> Result<PropertyRecord, ApiError>;
    /// Full replace; returns the record unwrapped from `{ property }`.
    async fn update_property(&self, property_id: &str, payload: &PropertyPayload) -> Result<PropertyRecord, ApiError>;
    async fn delete_property(&self, property_id: &str) -> Result<(), ApiError>;
    async fn list_tenants(&self) -> Result<Vec<Tenant>, ApiError>;
    async fn list_pending_testimonials(&self) -> Result<Vec<Testimonial>, ApiError>;
    async fn approve_testimonial(&self, testimonial_id: &str) -> Result<(), ApiError>;
}

/// Shared handle provided through Leptos context.
pub type SharedApi = Arc<dyn RentalApi>;

pub(crate) fn properties_endpoint() -> &'static str {
    "/property/properties"
}

pub(crate) fn property_endpoint(property_id: &str) -> String {
    format!("/property/properties/{property_id}")
}

pub(crate) fn tenants_endpoint() -> &'static str {
    "/tenant/tenants"
}

pub(crate) fn pending_testimonials_endpoint() -> &'static str {
    "/api/testimony/pending"
}

pub(crate) fn approve_testimonial_endpoint(testimonial_id: &str) -> String {
    format!("/api/testimonials/{testimonial_id}/approve")
}

/// `gloo-net` backed implementation.
#[derive(Clone)]
pub struct HttpApi {
    config: ApiConfig,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpApi {
    pub fn new(config: ApiConfig, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self { config, credentials }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::ApiError;

    pub(super) fn with_auth(builder: RequestBuilder, authorization: Option<String>) -> RequestBuilder {
        match authorization {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    pub(super) fn build(builder: RequestBuilder) -> Result<Request, ApiError> {
        builder.build().map_err(|e| ApiError::Connectivity(e.to_string()))
    }

    pub(super) fn build_json<T: serde::Serialize>(builder: RequestBuilder, body: &T) -> Result<Request, ApiError> {
        builder.json(body).map_err(|e| ApiError::Connectivity(e.to_string()))
    }

    /// Send and split transport failures from non-success statuses.
    pub(super) async fn send(request: Request) -> Result<Response, ApiError> {
        let url = request.url();
        let resp = request.send().await.map_err(|e| {
            log::warn!("request to {url} failed without response: {e}");
            ApiError::Connectivity(e.to_string())
        })?;
        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            log::warn!("request to {url} rejected with status {status}");
            return Err(ApiError::from_response(status, &text));
        }
        Ok(resp)
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl RentalApi for HttpApi {
    async fn list_properties(&self) -> Result<PropertyCollection, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let resp = transport::send(transport::build(Request::get(&self.url(properties_endpoint())))?).await?;
            let value = resp.json::<serde_json::Value>().await.unwrap_or(serde_json::Value::Null);
            Ok(PropertyCollection::from_value(value))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.url(properties_endpoint());
            Err(ApiError::Unavailable)
        }
    }

    async fn get_property(&self, property_id: &str) -> Result<PropertyRecord, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let url = self.url(&property_endpoint(property_id));
            let resp = transport::send(transport::build(Request::get(&url))?).await?;
            transport::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = property_endpoint(property_id);
            Err(ApiError::Unavailable)
        }
    }

    async fn create_property(&self, payload: &PropertyPayload) -> Result<PropertyRecord, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let request = transport::build_json(Request::post(&self.url(properties_endpoint())), payload)?;
            let resp = transport::send(request).await?;
            transport::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(ApiError::Unavailable)
        }
    }

    async fn update_property(&self, property_id: &str, payload: &PropertyPayload) -> Result<PropertyRecord, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let url = self.url(&property_endpoint(property_id));
            let resp = transport::send(transport::build_json(Request::put(&url), payload)?).await?;
            let envelope: super::types::UpdateResponse = transport::decode(resp).await?;
            Ok(envelope.property)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (property_id, payload);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_property(&self, property_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let url = self.url(&property_endpoint(property_id));
            transport::send(transport::build(Request::delete(&url))?).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = property_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn list_tenants(&self) -> Result<Vec<Tenant>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let resp = transport::send(transport::build(Request::get(&self.url(tenants_endpoint())))?).await?;
            transport::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.url(tenants_endpoint());
            Err(ApiError::Unavailable)
        }
    }

    async fn list_pending_testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let auth = super::credentials::authorization_header(self.credentials.as_ref());
            let builder = transport::with_auth(Request::get(&self.url(pending_testimonials_endpoint())), auth);
            let resp = transport::send(transport::build(builder)?).await?;
            transport::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(pending_testimonials_endpoint()), &self.credentials);
            Err(ApiError::Unavailable)
        }
    }

    async fn approve_testimonial(&self, testimonial_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let auth = super::credentials::authorization_header(self.credentials.as_ref());
            let url = self.url(&approve_testimonial_endpoint(testimonial_id));
            let builder = transport::with_auth(Request::put(&url), auth);
            transport::send(transport::build(builder)?).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = approve_testimonial_endpoint(testimonial_id);
            Err(ApiError::Unavailable)
        }
    }
}
