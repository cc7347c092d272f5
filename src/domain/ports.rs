use crate::domain::model::{NormalizedDocument, RawInvoice, SaveOptions};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The external "save normalized documents" collaborator supplied by the
/// host platform.
pub trait Persistence: Send + Sync {
    fn save_bills(
        &self,
        documents: &[NormalizedDocument],
        folder_path: &str,
        options: &SaveOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn auth_endpoint(&self) -> &str;
    fn invoices_endpoint(&self) -> &str;
    fn folder_path(&self) -> &str;
}

#[async_trait]
pub trait Connector: Send + Sync {
    /// Exchanges the account's opaque token for a bearer token.
    async fn authenticate(&self, token: &str) -> Result<String>;
    /// Fetches the raw invoice list with the bearer token.
    async fn fetch_invoices(&self, bearer_token: &str) -> Result<Vec<RawInvoice>>;
    /// Hands normalized documents to the persistence collaborator.
    async fn save(&self, documents: Vec<NormalizedDocument>) -> Result<usize>;
}
