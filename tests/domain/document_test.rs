use clinical_components::domain::{ContentType, Document};

#[test]
fn given_supported_mime_types_when_parsing_then_returns_content_type() {
    assert_eq!(ContentType::from_mime("application/pdf"), Some(ContentType::Pdf));
    assert_eq!(
        ContentType::from_mime(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ),
        Some(ContentType::Docx)
    );
    assert_eq!(
        ContentType::from_mime("text/plain; charset=utf-8"),
        Some(ContentType::Text)
    );
}

#[test]
fn given_unknown_mime_type_when_parsing_then_returns_none() {
    assert_eq!(ContentType::from_mime("application/msword"), None);
    assert_eq!(ContentType::from_mime("application/octet-stream"), None);
}

#[test]
fn given_filenames_when_resolving_then_extension_decides_case_insensitively() {
    assert_eq!(ContentType::from_filename("Protocol_v2.PDF"), Some(ContentType::Pdf));
    assert_eq!(ContentType::from_filename("sap.final.docx"), Some(ContentType::Docx));
    assert_eq!(ContentType::from_filename("notes.txt"), Some(ContentType::Text));
    assert_eq!(ContentType::from_filename("legacy.doc"), None);
    assert_eq!(ContentType::from_filename("README"), None);
}

#[test]
fn given_content_types_when_describing_then_extension_and_name_match_formats_listing() {
    assert_eq!(ContentType::Pdf.extension(), ".pdf");
    assert_eq!(ContentType::Docx.display_name(), "Word Document");
    assert_eq!(ContentType::Text.as_mime(), "text/plain");
}

#[test]
fn given_two_documents_when_created_then_ids_differ() {
    let first = Document::new("a.pdf".to_string(), ContentType::Pdf, 10);
    let second = Document::new("a.pdf".to_string(), ContentType::Pdf, 10);

    assert_ne!(first.id, second.id);
    assert_eq!(first.size_bytes, 10);
}
