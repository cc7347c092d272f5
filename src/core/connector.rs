use crate::domain::model::{NormalizedDocument, RawInvoice, SaveOptions};
use crate::domain::ports::{ConfigProvider, Connector, Persistence};
use crate::utils::error::{KonnectorError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Bank identifiers used downstream to link saved bills to bank operations.
/// Matching is not case sensitive.
const BANK_IDENTIFIERS: &[&str] = &["magic"];

#[derive(Debug, Deserialize)]
struct TokenExchange {
    token: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct InvoiceListing {
    invoices: Vec<RawInvoice>,
}

pub struct ScalingoConnector<P: Persistence, C: ConfigProvider> {
    persistence: P,
    config: C,
    client: Client,
}

impl<P: Persistence, C: ConfigProvider> ScalingoConnector<P, C> {
    pub fn new(persistence: P, config: C) -> Result<Self> {
        // one jar shared by the two calls of a run
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            persistence,
            config,
            client,
        })
    }
}

#[async_trait]
impl<P: Persistence, C: ConfigProvider> Connector for ScalingoConnector<P, C> {
    async fn authenticate(&self, token: &str) -> Result<String> {
        tracing::debug!("Token exchange against: {}", self.config.auth_endpoint());
        let response = self
            .client
            .post(self.config.auth_endpoint())
            .basic_auth("", Some(token))
            .send()
            .await
            .map_err(|e| KonnectorError::authentication(e.to_string()))?;

        let status = response.status();
        tracing::debug!("Token exchange status: {}", status);
        if !status.is_success() {
            return Err(KonnectorError::authentication(format!(
                "token exchange returned HTTP {}",
                status
            )));
        }

        let exchange: TokenExchange = response
            .json()
            .await
            .map_err(|e| KonnectorError::authentication(e.to_string()))?;

        match exchange.token {
            Some(bearer) if !bearer.is_empty() => Ok(bearer),
            _ => Err(KonnectorError::authentication(
                "response carried no token field",
            )),
        }
    }

    async fn fetch_invoices(&self, bearer_token: &str) -> Result<Vec<RawInvoice>> {
        tracing::debug!("Listing invoices at: {}", self.config.invoices_endpoint());
        let response = self
            .client
            .get(self.config.invoices_endpoint())
            .bearer_auth(bearer_token)
            .send()
            .await
            .map_err(|e| KonnectorError::fetch(e.to_string()))?;

        let status = response.status();
        tracing::debug!("Invoice listing status: {}", status);
        if !status.is_success() {
            return Err(KonnectorError::fetch(format!(
                "invoice listing returned HTTP {}",
                status
            )));
        }

        let listing: InvoiceListing = response
            .json()
            .await
            .map_err(|e| KonnectorError::fetch(e.to_string()))?;

        Ok(listing.invoices)
    }

    async fn save(&self, documents: Vec<NormalizedDocument>) -> Result<usize> {
        let options = SaveOptions {
            identifiers: BANK_IDENTIFIERS.iter().map(|s| s.to_string()).collect(),
        };
        self.persistence
            .save_bills(&documents, self.config.folder_path(), &options)
            .await?;
        Ok(documents.len())
    }
}
