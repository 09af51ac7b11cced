use cambridge_pseudo::pipeline::{
    CreateDocumentRequest, DocumentId, DocumentRepository, DocumentService, InMemoryRepository,
    PipelineError, PseudocodeDocument, UpdateDocumentRequest,
};
use std::sync::Arc;

fn service() -> DocumentService<InMemoryRepository> {
    DocumentService::new(InMemoryRepository::new())
}

fn create(svc: &DocumentService<InMemoryRepository>, title: &str, content: &str) -> PseudocodeDocument {
    svc.create_document(CreateDocumentRequest {
        title: title.to_string(),
        content: content.to_string(),
        language: None,
    })
    .unwrap()
}

#[test]
fn test_create_stores_formatted_content() {
    let svc = service();
    let doc = create(&svc, "  Greeting  ", "if x then\noutput \"hi\"\nendif");

    assert_eq!(doc.title, "Greeting");
    assert_eq!(doc.language, "pseudocode");
    assert_eq!(doc.content, "IF x THEN\n   OUTPUT \"hi\"\nENDIF");
    assert_eq!(doc.created_at_ms, doc.updated_at_ms);
    assert_eq!(svc.get_document(doc.id).unwrap(), Some(doc));
}

#[test]
fn test_create_defaults() {
    let svc = service();
    let doc = create(&svc, "   ", "   \n  ");
    assert_eq!(doc.title, "Untitled");
    assert_eq!(doc.content, "");

    let doc = svc
        .create_document(CreateDocumentRequest {
            title: "Other".to_string(),
            content: String::new(),
            language: Some("python".to_string()),
        })
        .unwrap();
    assert_eq!(doc.language, "python");
}

#[test]
fn test_invalid_content_is_still_stored() {
    let svc = service();
    let doc = create(&svc, "Broken", "x ← (1 + 2");
    assert_eq!(doc.content, "x ← (1 + 2");
}

#[test]
fn test_update_replaces_fields() {
    let svc = service();
    let doc = create(&svc, "Draft", "output 1");

    let updated = svc
        .update_document(
            doc.id,
            UpdateDocumentRequest {
                title: "Final".to_string(),
                content: "output 2".to_string(),
                language: None,
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, doc.id);
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.content, "OUTPUT 2");
    assert_eq!(updated.language, "pseudocode");
    assert_eq!(updated.created_at_ms, doc.created_at_ms);
    assert!(updated.updated_at_ms >= doc.updated_at_ms);
}

#[test]
fn test_update_with_stored_content_keeps_it() {
    let svc = service();
    let doc = create(&svc, "Same", "IF X THEN\n   OUTPUT X\nENDIF");

    let updated = svc
        .update_document(
            doc.id,
            UpdateDocumentRequest {
                title: String::new(),
                content: doc.content.clone(),
                language: Some("cambridge".to_string()),
            },
        )
        .unwrap()
        .unwrap();
    assert_eq!(updated.content, doc.content);
    assert_eq!(updated.title, "Untitled");
    assert_eq!(updated.language, "cambridge");
}

#[test]
fn test_update_unknown_document() {
    let svc = service();
    let result = svc.update_document(DocumentId::new(), UpdateDocumentRequest::default());
    assert_eq!(result, Ok(None));
}

#[test]
fn test_delete() {
    let svc = service();
    let doc = create(&svc, "Gone", "OUTPUT 1");
    assert_eq!(svc.delete_document(doc.id), Ok(true));
    assert_eq!(svc.delete_document(doc.id), Ok(false));
    assert_eq!(svc.get_document(doc.id), Ok(None));
    assert_eq!(
        svc.require_document(doc.id),
        Err(PipelineError::NotFound(doc.id))
    );
}

#[test]
fn test_list_most_recent_first() {
    let repo = InMemoryRepository::new();
    for (title, updated_at_ms) in [("a", 100), ("b", 300), ("c", 200)] {
        let mut doc = PseudocodeDocument::new(title, "", "pseudocode");
        doc.updated_at_ms = updated_at_ms;
        repo.create(doc).unwrap();
    }

    let svc = DocumentService::new(repo);
    let titles: Vec<String> = svc
        .list_documents()
        .unwrap()
        .into_iter()
        .map(|d| d.title)
        .collect();
    assert_eq!(titles, vec!["b", "c", "a"]);
}

#[test]
fn test_standalone_operations_do_not_store() {
    let svc = service();
    assert!(!svc.validate_content("x ← (1").is_valid);
    assert_eq!(svc.format_content("output 1"), "OUTPUT 1");
    assert_eq!(svc.execute_content("OUTPUT 1 + 1").output_lines(), vec!["2"]);
    assert!(svc.list_documents().unwrap().is_empty());
}

#[test]
fn test_concurrent_creates() {
    let svc = Arc::new(service());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let svc = Arc::clone(&svc);
            std::thread::spawn(move || create(&svc, &format!("doc {}", i), "output 1"))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let docs = svc.list_documents().unwrap();
    assert_eq!(docs.len(), 8);
    assert!(docs.iter().all(|d| d.content == "OUTPUT 1"));
}

#[test]
fn test_document_json() {
    let svc = service();
    let doc = create(&svc, "Json", "OUTPUT 1");
    let json = serde_json::to_string(&doc).unwrap();
    let back: PseudocodeDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
    assert!(json.contains("\"updatedAtMs\""));
}
