//! European catalog adapter.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use crate::{
    domain::catalog::{Origin, Product},
    providers::{Provider, ProviderConfig, ProviderPayloadError},
};

/// A record as the European supplier ships it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEuropeanRecord {
    pub id: String,
    pub name: String,
    pub has_discount: bool,
    pub gallery: Vec<String>,
    pub description: String,
    pub price: Decimal,
    pub discount_value: Decimal,
    pub details: RawEuropeanDetails,
}

/// Nested detail block of a European record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEuropeanDetails {
    pub adjective: String,
    pub material: String,
}

impl RawEuropeanRecord {
    /// Normalise into the canonical product shape.
    ///
    /// The gallery passes through as-is. The supplier has no category field,
    /// so the canonical category stays empty; the asymmetry with the
    /// Brazilian catalog is intentional.
    #[must_use]
    pub fn normalize(self) -> Product {
        let details = BTreeMap::from([
            ("Adjective".to_string(), self.details.adjective),
            ("Material".to_string(), self.details.material),
        ]);

        Product {
            id: self.id,
            origin: Origin::Europe,
            name: self.name,
            description: self.description,
            price: self.price,
            discount: self.has_discount,
            discount_price: self.discount_value,
            gallery: self.gallery,
            category: None,
            details,
        }
    }
}

/// Decode a search response body (a JSON array of records).
///
/// # Errors
///
/// Returns a [`ProviderPayloadError`] when the body does not match the
/// European schema.
pub fn decode_search_payload(body: &str) -> Result<Vec<RawEuropeanRecord>, ProviderPayloadError> {
    serde_json::from_str(body).map_err(|source| ProviderPayloadError {
        origin: Origin::Europe,
        source,
    })
}

/// Decode a fetch-one response body (a single JSON record).
///
/// # Errors
///
/// Returns a [`ProviderPayloadError`] when the body does not match the
/// European schema.
pub fn decode_record_payload(body: &str) -> Result<RawEuropeanRecord, ProviderPayloadError> {
    serde_json::from_str(body).map_err(|source| ProviderPayloadError {
        origin: Origin::Europe,
        source,
    })
}

/// HTTP adapter for the European catalog.
#[derive(Debug, Clone)]
pub struct EuropeanProvider {
    base_url: String,
    http: Client,
}

impl EuropeanProvider {
    /// Create a new adapter from the given configuration.
    #[must_use]
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            http: Client::new(),
        }
    }

    async fn read_success_body(response: reqwest::Response, operation: &str) -> Option<String> {
        if !response.status().is_success() {
            warn!(
                "european provider {operation} returned status {}",
                response.status()
            );

            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(error) => {
                warn!("failed to read european provider {operation} body: {error}");

                None
            }
        }
    }
}

#[async_trait]
impl Provider for EuropeanProvider {
    async fn search(&self, term: &str, page: u32, limit: u32) -> Vec<Product> {
        let url = format!("{}/european_provider", self.base_url);

        let response = match self
            .http
            .get(&url)
            .query(&[("search", term)])
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                warn!("european provider search request failed: {error}");

                return Vec::new();
            }
        };

        let Some(body) = Self::read_success_body(response, "search").await else {
            return Vec::new();
        };

        match decode_search_payload(&body) {
            Ok(records) => records
                .into_iter()
                .map(RawEuropeanRecord::normalize)
                .collect(),
            Err(error) => {
                warn!("discarding european provider search payload: {error}");

                Vec::new()
            }
        }
    }

    async fn fetch_one(&self, id: &str) -> Option<Product> {
        let url = format!("{}/european_provider/{id}", self.base_url);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(error) => {
                warn!("european provider fetch request failed: {error}");

                return None;
            }
        };

        let body = Self::read_success_body(response, "fetch").await?;

        match decode_record_payload(&body) {
            Ok(record) => Some(record.normalize()),
            Err(error) => {
                warn!("discarding european provider record payload: {error}");

                None
            }
        }
    }
}
