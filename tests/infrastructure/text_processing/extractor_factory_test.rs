use clinical_components::application::ports::FileLoader;
use clinical_components::domain::ContentType;
use clinical_components::infrastructure::text_processing::ExtractorFactory;
use clinical_components::presentation::ExtractionSettings;

#[test]
fn given_all_formats_enabled_when_creating_then_every_format_is_supported() {
    let loader = ExtractorFactory::create(&ExtractionSettings {
        pdf_enabled: true,
        docx_enabled: true,
    });

    assert!(loader.supports(ContentType::Pdf));
    assert!(loader.supports(ContentType::Docx));
    assert!(loader.supports(ContentType::Text));
}

#[test]
fn given_pdf_disabled_when_creating_then_pdf_is_not_registered() {
    let loader = ExtractorFactory::create(&ExtractionSettings {
        pdf_enabled: false,
        docx_enabled: true,
    });

    assert!(!loader.supports(ContentType::Pdf));
    assert!(loader.supports(ContentType::Docx));
}

#[test]
fn given_everything_disabled_when_creating_then_plain_text_remains() {
    let loader = ExtractorFactory::create(&ExtractionSettings {
        pdf_enabled: false,
        docx_enabled: false,
    });

    assert!(loader.supports(ContentType::Text));
    assert!(!loader.supports(ContentType::Docx));
}
