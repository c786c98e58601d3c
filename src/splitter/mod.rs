pub mod character;
pub mod merge;
pub mod recursive;
pub mod split;


pub use character::CharacterTextSplitter;
pub use merge::merge_splits;
pub use recursive::RecursiveCharacterTextSplitter;

use crate::core::exceptions::{ChunkflowError, Result};
use crate::document::{Document, Metadata};

/// Common surface of every splitter: chunk raw text, or whole documents with
/// per-source metadata copied onto each produced chunk.
pub trait TextSplitter {
    /// Splits `text` into ordered chunks. All failure modes are rejected at
    /// construction, so splitting itself cannot fail.
    fn split_text(&self, text: &str) -> Vec<String>;

    /// Splits every text and pairs each chunk with its own deep copy of the
    /// corresponding metadata record.
    fn create_documents(
        &self,
        texts: Vec<String>,
        metadatas: Option<Vec<Metadata>>,
    ) -> Result<Vec<Document>> {
        if let Some(metadatas) = &metadatas {
            if metadatas.len() != texts.len() {
                return Err(ChunkflowError::configuration(format!(
                    "metadatas length ({}) does not match texts length ({})",
                    metadatas.len(),
                    texts.len()
                )));
            }
        }
        let mut documents = Vec::new();
        for (i, text) in texts.iter().enumerate() {
            for chunk in self.split_text(text) {
                let metadata = metadatas
                    .as_ref()
                    .map(|m| m[i].clone())
                    .unwrap_or_default();
                documents.push(Document {
                    page_content: chunk,
                    metadata,
                });
            }
        }
        Ok(documents)
    }

    /// Re-splits existing documents, carrying each record's metadata onto all
    /// chunks derived from it.
    fn split_documents(&self, documents: Vec<Document>) -> Result<Vec<Document>> {
        let (texts, metadatas): (Vec<_>, Vec<_>) = documents
            .into_iter()
            .map(|document| (document.page_content, document.metadata))
            .unzip();
        self.create_documents(texts, Some(metadatas))
    }
}
