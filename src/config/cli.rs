use crate::domain::model::{NormalizedDocument, SaveOptions};
use crate::domain::ports::Persistence;
use crate::utils::error::Result;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Standalone-mode stand-in for the platform's bill-persistence routine:
/// writes the normalized documents and save options as `bills.json` under
/// the destination folder.
#[derive(Debug, Clone, Default)]
pub struct FolderPersistence;

impl FolderPersistence {
    pub fn new() -> Self {
        Self
    }
}

impl Persistence for FolderPersistence {
    async fn save_bills(
        &self,
        documents: &[NormalizedDocument],
        folder_path: &str,
        options: &SaveOptions,
    ) -> Result<()> {
        let folder = Path::new(folder_path);
        fs::create_dir_all(folder)?;

        let payload = json!({
            "documents": documents,
            "options": options,
        });
        fs::write(
            folder.join("bills.json"),
            serde_json::to_vec_pretty(&payload)?,
        )?;

        Ok(())
    }
}
