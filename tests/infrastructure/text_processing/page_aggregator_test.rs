use clinical_components::domain::Page;
use clinical_components::infrastructure::text_processing::{
    PAGE_MARKER_PREFIX, aggregate_pages, normalize_pages, page_marker,
};

#[test]
fn given_page_number_when_building_marker_then_uses_bracket_format() {
    assert_eq!(page_marker(12), "[PAGE 12]");
    assert!(page_marker(1).starts_with(PAGE_MARKER_PREFIX));
}

#[test]
fn given_three_page_pdf_with_blank_second_page_when_aggregating_then_only_pages_one_and_three() {
    let pages = normalize_pages(["Protocol title page.", "   ", "Schedule of assessments."]);

    let document = aggregate_pages(&pages);

    assert_eq!(
        document,
        "[PAGE 1]\nProtocol title page.\n\n[PAGE 3]\nSchedule of assessments."
    );
    assert_eq!(document.matches(PAGE_MARKER_PREFIX).count(), 2);
}

#[test]
fn given_pages_when_aggregating_then_markers_appear_once_each_in_order() {
    let pages: Vec<Page> = (1..=5)
        .map(|n| Page::new(n, format!("Body of page {n}.")))
        .collect();

    let document = aggregate_pages(&pages);

    let positions: Vec<usize> = (1..=5)
        .map(|n| document.find(&page_marker(n)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(document.matches(PAGE_MARKER_PREFIX).count(), 5);
}

#[test]
fn given_no_pages_when_aggregating_then_empty() {
    assert_eq!(aggregate_pages(&[]), "");
}
