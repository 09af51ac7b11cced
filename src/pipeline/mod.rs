//! # Document pipeline
//!
//! Orchestrates the three processors around a document store.
//!
//! ## Flow
//!
//! - **Create / update**: content is validated, then formatted, and only the
//!   formatted text is stored. Blank content is stored as an empty string
//!   without running either step.
//! - **Standalone**: [`DocumentService::validate_content`],
//!   [`DocumentService::format_content`] and [`DocumentService::execute_content`]
//!   pass straight through and never touch storage.
//!
//! The validation result computed during create/update is not returned to the
//! caller or stored; it is only logged at debug level.

pub mod document;
pub mod repository;

pub use document::{
    CreateDocumentRequest, DocumentId, PseudocodeDocument, UpdateDocumentRequest,
    DEFAULT_LANGUAGE, DEFAULT_TITLE,
};
pub use repository::{DocumentRepository, InMemoryRepository};

use crate::formatter;
use crate::interpreter::{self, ExecuteResponse};
use crate::validator::{self, ValidationResult};
use document::{normalize_title, now_ms};
use thiserror::Error;

/// Errors for document operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("document {0} not found")]
    NotFound(DocumentId),

    #[error("document store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Document operations over a repository
#[derive(Debug, Default)]
pub struct DocumentService<R> {
    repository: R,
}

impl<R: DocumentRepository> DocumentService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// All documents, most recently updated first
    pub fn list_documents(&self) -> Result<Vec<PseudocodeDocument>, PipelineError> {
        self.repository.list()
    }

    pub fn get_document(&self, id: DocumentId) -> Result<Option<PseudocodeDocument>, PipelineError> {
        self.repository.get(id)
    }

    /// Like [`get_document`](Self::get_document), but a missing id is an error
    pub fn require_document(&self, id: DocumentId) -> Result<PseudocodeDocument, PipelineError> {
        self.repository.get(id)?.ok_or(PipelineError::NotFound(id))
    }

    pub fn create_document(
        &self,
        request: CreateDocumentRequest,
    ) -> Result<PseudocodeDocument, PipelineError> {
        let content = process_content(&request.content);
        let language = request
            .language
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let document = PseudocodeDocument::new(normalize_title(&request.title), content, language);

        tracing::debug!(id = %document.id, title = %document.title, "creating document");
        self.repository.create(document)
    }

    /// Apply an update; `None` if no document has this id
    ///
    /// Content is re-processed only when it differs from what is stored, so a
    /// rename leaves the stored text alone.
    pub fn update_document(
        &self,
        id: DocumentId,
        request: UpdateDocumentRequest,
    ) -> Result<Option<PseudocodeDocument>, PipelineError> {
        let Some(mut existing) = self.repository.get(id)? else {
            tracing::debug!(%id, "update of unknown document");
            return Ok(None);
        };

        existing.title = normalize_title(&request.title);
        if request.content != existing.content {
            existing.content = process_content(&request.content);
        }
        if let Some(language) = request.language {
            existing.language = language;
        }
        existing.updated_at_ms = now_ms();

        tracing::debug!(%id, "updating document");
        self.repository.update(existing)
    }

    pub fn delete_document(&self, id: DocumentId) -> Result<bool, PipelineError> {
        let removed = self.repository.delete(id)?;
        tracing::debug!(%id, removed, "deleting document");
        Ok(removed)
    }

    pub fn validate_content(&self, content: &str) -> ValidationResult {
        validator::validate(content)
    }

    pub fn format_content(&self, content: &str) -> String {
        formatter::format(content)
    }

    pub fn execute_content(&self, content: &str) -> ExecuteResponse {
        interpreter::execute(content)
    }
}

/// Validate then format content for storage
fn process_content(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let validation = validator::validate(content);
    tracing::debug!(
        is_valid = validation.is_valid,
        errors = validation.errors.len(),
        warnings = validation.warnings.len(),
        "validated content before formatting"
    );

    formatter::format(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> DocumentService<InMemoryRepository> {
        DocumentService::new(InMemoryRepository::new())
    }

    #[test]
    fn test_process_content() {
        assert_eq!(process_content("  \n"), "");
        assert_eq!(process_content("if x then\noutput x\nendif"), "IF x THEN\n   OUTPUT x\nENDIF");
    }

    #[test]
    fn test_require_document() {
        let svc = service();
        let id = DocumentId::new();
        assert_eq!(svc.require_document(id), Err(PipelineError::NotFound(id)));
    }

    #[test]
    fn test_service_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DocumentService<InMemoryRepository>>();
    }
}
