//! Document storage seam
//!
//! The pipeline talks to storage only through [`DocumentRepository`]. The
//! bundled [`InMemoryRepository`] keeps everything in a mutex-guarded vector.

use super::document::{DocumentId, PseudocodeDocument};
use super::PipelineError;
use std::sync::{Mutex, MutexGuard};

/// Storage for pseudocode documents
pub trait DocumentRepository {
    /// All documents, most recently updated first
    fn list(&self) -> Result<Vec<PseudocodeDocument>, PipelineError>;

    fn get(&self, id: DocumentId) -> Result<Option<PseudocodeDocument>, PipelineError>;

    fn create(&self, document: PseudocodeDocument) -> Result<PseudocodeDocument, PipelineError>;

    /// Replace the mutable fields of a stored document; `None` if the id is unknown
    fn update(&self, document: PseudocodeDocument) -> Result<Option<PseudocodeDocument>, PipelineError>;

    /// Remove a document, returning whether one was removed
    fn delete(&self, id: DocumentId) -> Result<bool, PipelineError>;
}

/// Process-local repository
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    documents: Mutex<Vec<PseudocodeDocument>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<PseudocodeDocument>>, PipelineError> {
        self.documents
            .lock()
            .map_err(|_| PipelineError::StoreUnavailable("document store lock poisoned".to_string()))
    }
}

impl DocumentRepository for InMemoryRepository {
    fn list(&self) -> Result<Vec<PseudocodeDocument>, PipelineError> {
        let mut documents = self.lock()?.clone();
        documents.sort_by(|a, b| b.updated_at_ms.cmp(&a.updated_at_ms));
        Ok(documents)
    }

    fn get(&self, id: DocumentId) -> Result<Option<PseudocodeDocument>, PipelineError> {
        Ok(self.lock()?.iter().find(|d| d.id == id).cloned())
    }

    fn create(&self, document: PseudocodeDocument) -> Result<PseudocodeDocument, PipelineError> {
        self.lock()?.push(document.clone());
        Ok(document)
    }

    fn update(&self, document: PseudocodeDocument) -> Result<Option<PseudocodeDocument>, PipelineError> {
        let mut documents = self.lock()?;
        let Some(existing) = documents.iter_mut().find(|d| d.id == document.id) else {
            return Ok(None);
        };

        existing.title = document.title;
        existing.content = document.content;
        existing.language = document.language;
        existing.updated_at_ms = document.updated_at_ms;
        Ok(Some(existing.clone()))
    }

    fn delete(&self, id: DocumentId) -> Result<bool, PipelineError> {
        let mut documents = self.lock()?;
        let before = documents.len();
        documents.retain(|d| d.id != id);
        Ok(documents.len() != before)
    }
}
