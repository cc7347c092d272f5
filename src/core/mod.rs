pub mod connector;
pub mod engine;
pub mod normalize;

pub use crate::domain::model::{DocumentMetadata, NormalizedDocument, RawInvoice, SaveOptions};
pub use crate::domain::ports::{ConfigProvider, Connector, Persistence};
pub use crate::utils::error::Result;
