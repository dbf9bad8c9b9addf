//! Client side of the booking backend.
//!
//! Both endpoints are owned by an external service; this module only knows
//! their paths, the request body for a booking and the shape of a review list.
use crate::error::ApiError;
use crate::models::booking::BookingFormData;
use crate::models::review::Review;
use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::{Request, Response};
use leptos::logging::log;
use leptos::use_context;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// Where the backend lives. An empty base keeps requests same-origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn bookings_url(&self) -> String {
        format!("{}/api/bookings", self.base_url)
    }

    pub fn reviews_url(&self, property_id: &str) -> String {
        format!(
            "{}/api/properties/{}/reviews",
            self.base_url,
            urlencoding::encode(property_id)
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig::new(option_env!("STAYBOOK_API_BASE").unwrap_or(""))
    }
}

/// Client generated key attached to each booking attempt, so the backend can
/// collapse a retried submission into the original one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    pub fn new() -> Self {
        IdempotencyKey(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for IdempotencyKey {
    fn default() -> Self {
        IdempotencyKey::new()
    }
}

impl fmt::Display for IdempotencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Operations the components need from the backend.
/// Futures are local: everything runs on the browser's single thread.
pub trait Backend {
    fn submit_booking<'a>(
        &'a self,
        booking: &'a BookingFormData,
        key: &'a IdempotencyKey,
    ) -> LocalBoxFuture<'a, Result<(), ApiError>>;

    fn fetch_reviews<'a>(
        &'a self,
        property_id: &'a str,
    ) -> LocalBoxFuture<'a, Result<Vec<Review>, ApiError>>;
}

/// `Backend` over HTTP using the browser fetch API.
#[derive(Debug, Clone, Default)]
pub struct HttpBackend {
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

fn ensure_success(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Server {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

impl Backend for HttpBackend {
    fn submit_booking<'a>(
        &'a self,
        booking: &'a BookingFormData,
        key: &'a IdempotencyKey,
    ) -> LocalBoxFuture<'a, Result<(), ApiError>> {
        async move {
            let url = self.config.bookings_url();
            log!("[API] POST {} (key {})", url, key);
            let response = Request::post(&url)
                .header(IDEMPOTENCY_HEADER, key.as_str())
                .json(booking)?
                .send()
                .await?;
            ensure_success(&response)
        }
        .boxed_local()
    }

    fn fetch_reviews<'a>(
        &'a self,
        property_id: &'a str,
    ) -> LocalBoxFuture<'a, Result<Vec<Review>, ApiError>> {
        async move {
            let url = self.config.reviews_url(property_id);
            log!("[API] GET {}", url);
            let response = Request::get(&url).send().await?;
            ensure_success(&response)?;
            let body = response.text().await?;
            let reviews: Vec<Review> = serde_json::from_str(&body)?;
            log!("[API] Received {} reviews for property {}", reviews.len(), property_id);
            Ok(reviews)
        }
        .boxed_local()
    }
}

/// Shared backend handed to components through Leptos context.
#[derive(Clone)]
pub struct BackendHandle(Rc<dyn Backend>);

impl BackendHandle {
    pub fn new(backend: impl Backend + 'static) -> Self {
        BackendHandle(Rc::new(backend))
    }
}

impl Deref for BackendHandle {
    type Target = dyn Backend;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// The backend provided by an ancestor, or plain HTTP with the default config.
pub fn use_backend() -> BackendHandle {
    use_context::<BackendHandle>().unwrap_or_else(|| {
        log!("[API] No backend in context, using HTTP defaults");
        BackendHandle::new(HttpBackend::default())
    })
}
