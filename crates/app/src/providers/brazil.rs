//! Brazilian catalog adapter.

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

/// A record as the Brazilian supplier ships it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBrazilianRecord {
    pub id: String,
    pub nome: String,
    pub descricao: String,
    pub categoria: String,
    pub imagem: String,
    pub preco: Decimal,
    pub material: String,
    pub departamento: String,
}

impl RawBrazilianRecord {
    /// Normalise into the canonical product shape.
    ///
    /// The supplier carries a single image, so the gallery repeats it four
    /// times, and it has no discount concept.
    #[must_use]
    pub fn normalize(self) -> Product {
        let details = BTreeMap::from([
            ("Material".to_string(), self.material),
            ("Departamento".to_string(), self.departamento),
        ]);

        Product {
            id: self.id,
            origin: Origin::Brazil,
            name: self.nome,
            description: self.descricao,
            price: self.preco,
            discount: false,
            discount_price: Decimal::ZERO,
            gallery: vec![self.imagem; 4],
            category: Some(self.categoria),
            details,
        }
    }
}

/// Decode a search response body (a JSON array of records).
///
/// # Errors
///
/// Returns a [`ProviderPayloadError`] when the body does not match the
/// Brazilian schema.
pub fn decode_search_payload(body: &str) -> Result<Vec<RawBrazilianRecord>, ProviderPayloadError> {
    serde_json::from_str(body).map_err(|source| ProviderPayloadError {
        origin: Origin::Brazil,
        source,
    })
}

/// Decode a fetch-one response body (a single JSON record).
///
/// # Errors
///
/// Returns a [`ProviderPayloadError`] when the body does not match the
/// Brazilian schema.
pub fn decode_record_payload(body: &str) -> Result<RawBrazilianRecord, ProviderPayloadError> {
    serde_json::from_str(body).map_err(|source| ProviderPayloadError {
        origin: Origin::Brazil,
        source,
    })
}

/// HTTP adapter for the Brazilian catalog.
#[derive(Debug, Clone)]
pub struct BrazilianProvider {
    base_url: String,
    http: Client,
}

impl BrazilianProvider {
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
                "brazilian provider {operation} returned status {}",
                response.status()
            );

            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(error) => {
                warn!("failed to read brazilian provider {operation} body: {error}");

                None
            }
        }
    }
}

#[async_trait]
impl Provider for BrazilianProvider {
    async fn search(&self, term: &str, page: u32, limit: u32) -> Vec<Product> {
        let url = format!("{}/brazilian_provider", self.base_url);

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
                warn!("brazilian provider search request failed: {error}");

                return Vec::new();
            }
        };

        let Some(body) = Self::read_success_body(response, "search").await else {
            return Vec::new();
        };

        match decode_search_payload(&body) {
            Ok(records) => records
                .into_iter()
                .map(RawBrazilianRecord::normalize)
                .collect(),
            Err(error) => {
                warn!("discarding brazilian provider search payload: {error}");

                Vec::new()
            }
        }
    }

    async fn fetch_one(&self, id: &str) -> Option<Product> {
        let url = format!("{}/brazilian_provider/{id}", self.base_url);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(error) => {
                warn!("brazilian provider fetch request failed: {error}");

                return None;
            }
        };

        let body = Self::read_success_body(response, "fetch").await?;

        match decode_record_payload(&body) {
            Ok(record) => Some(record.normalize()),
            Err(error) => {
                warn!("discarding brazilian provider record payload: {error}");

                None
            }
        }
    }
}
