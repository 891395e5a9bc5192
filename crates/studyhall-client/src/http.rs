//! The HTTP boundary of the client.
//!
//! [`ApiClient`] owns the reqwest client, the base URL, and the injected
//! [`Session`]. All methods are generic over [`Resource`]; the REST shape is
//! fixed:
//!
//! - `GET    /{collection}?page&page_size&<filters>` → page envelope
//! - `POST   /{collection}` → created resource
//! - `PATCH  /{collection}/{id}` → updated resource
//! - `DELETE /{collection}/{id}` → 204
//! - `POST   /{collection}/reorder` → 204 (atomic position moves)
//! - `POST   /generate` → generated questions
//!
//! There are no automatic retries and no backoff: a failure is classified
//! into an [`ApiError`] and returned to the caller.

use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;
use validator::Validate;

use studyhall_config::ApiConfig;
use studyhall_core::pagination::{Page, PageEnvelope, PageRequest};
use studyhall_core::ApiError;
use studyhall_models::generation::{GenerateQuestionsRequest, GenerationResponse};
use studyhall_models::resource::{Ordered, Resource};
use studyhall_models::session::Session;

/// One `{id, position}` assignment inside an atomic reorder request.
#[derive(Debug, Clone, Serialize)]
pub struct PositionMove<I> {
    pub id: I,
    pub position: i32,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Session) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::network)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(classify_reqwest)?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::status(status.as_u16(), error_message(&body, status)))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(ApiError::decode)
    }

    /// Fetches one page of a resource collection.
    #[instrument(skip(self, filters), fields(collection = R::COLLECTION))]
    pub async fn list<R: Resource>(
        &self,
        page: &PageRequest,
        filters: &R::Filter,
    ) -> Result<Page<R>, ApiError> {
        let request = self
            .http
            .get(self.url(R::COLLECTION))
            .query(&[("page", page.page()), ("page_size", page.page_size())])
            .query(filters);

        let response = self.send(self.authorize(request)).await?;
        let envelope: PageEnvelope<R> = Self::decode(response).await?;

        Ok(Page::from_envelope(envelope, page.page(), page.page_size()))
    }

    #[instrument(skip(self), fields(collection = R::COLLECTION, id = %id))]
    pub async fn get<R: Resource>(&self, id: R::Id) -> Result<R, ApiError> {
        let request = self.http.get(self.url(&format!("{}/{}", R::COLLECTION, id)));
        let response = self.send(self.authorize(request)).await?;
        Self::decode(response).await
    }

    /// Creates a resource. The payload is validated locally first; a
    /// validation failure never produces a request.
    #[instrument(skip(self, payload), fields(collection = R::COLLECTION))]
    pub async fn create<R: Resource>(&self, payload: &R::Create) -> Result<R, ApiError> {
        payload.validate()?;

        let request = self.http.post(self.url(R::COLLECTION)).json(payload);
        let response = self.send(self.authorize(request)).await?;
        Self::decode(response).await
    }

    #[instrument(skip(self, payload), fields(collection = R::COLLECTION, id = %id))]
    pub async fn update<R: Resource>(&self, id: R::Id, payload: &R::Update) -> Result<R, ApiError> {
        payload.validate()?;

        let request = self
            .http
            .patch(self.url(&format!("{}/{}", R::COLLECTION, id)))
            .json(payload);
        let response = self.send(self.authorize(request)).await?;
        Self::decode(response).await
    }

    #[instrument(skip(self), fields(collection = R::COLLECTION, id = %id))]
    pub async fn delete<R: Resource>(&self, id: R::Id) -> Result<(), ApiError> {
        let request = self
            .http
            .delete(self.url(&format!("{}/{}", R::COLLECTION, id)));
        self.send(self.authorize(request)).await?;
        Ok(())
    }

    /// Applies both position moves in one request; the server commits both
    /// or neither, so no partially swapped ordering can be observed.
    #[instrument(skip(self, moves), fields(collection = R::COLLECTION))]
    pub async fn reorder<R: Ordered>(&self, moves: [PositionMove<R::Id>; 2]) -> Result<(), ApiError> {
        let body = serde_json::json!({ "moves": moves });
        let request = self
            .http
            .post(self.url(&format!("{}/reorder", R::COLLECTION)))
            .json(&body);
        self.send(self.authorize(request)).await?;
        Ok(())
    }

    /// The single long-running generation call. Callers wrap this in a
    /// [`GenerationTask`](crate::generation::GenerationTask) for progress
    /// display; nothing here is retried or polled.
    #[instrument(skip(self, request_body), fields(count = request_body.question_count))]
    pub async fn generate(
        &self,
        request_body: &GenerateQuestionsRequest,
    ) -> Result<GenerationResponse, ApiError> {
        request_body.validate()?;

        let request = self.http.post(self.url("generate")).json(request_body);
        let response = self.send(self.authorize(request)).await?;
        Self::decode(response).await
    }
}

fn classify_reqwest(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        ApiError::decode(err)
    } else {
        ApiError::network(err)
    }
}

/// Extracts a human-readable message from an error body shaped like
/// `{"error": "..."}`, falling back to the raw body or the status line.
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| {
            format!(
                "request failed with status {}",
                status.canonical_reason().unwrap_or("unknown")
            )
        })
}
