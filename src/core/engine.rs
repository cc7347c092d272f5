use crate::core::normalize::normalize;
use crate::domain::ports::Connector;
use crate::utils::error::Result;

pub struct KonnectorEngine<K: Connector> {
    connector: K,
}

impl<K: Connector> KonnectorEngine<K> {
    pub fn new(connector: K) -> Self {
        Self { connector }
    }

    /// Runs one konnector invocation end to end: authenticate, fetch,
    /// normalize, save. Strictly sequential, no retries; the first failing
    /// step aborts the run before anything reaches persistence. Returns the
    /// number of documents saved.
    pub async fn run(&self, token: &str) -> Result<usize> {
        tracing::info!("Authenticating ...");
        let bearer_token = self.connector.authenticate(token).await?;
        tracing::info!("Successfully logged in");

        tracing::info!("Fetching the list of invoices");
        let invoices = self.connector.fetch_invoices(&bearer_token).await?;
        tracing::info!("Fetched {} invoices", invoices.len());

        tracing::info!("Parsing list of invoices");
        let documents = normalize(invoices);

        tracing::info!("Saving {} documents", documents.len());
        let saved = self.connector.save(documents).await?;

        Ok(saved)
    }
}
