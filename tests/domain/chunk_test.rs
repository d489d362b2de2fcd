use clinical_components::domain::{Chunk, ChunkPlan, DocumentId};

#[test]
fn given_multibyte_chunk_when_measuring_then_counts_characters() {
    let chunk = Chunk::new(0, "Ésaï 10 µg".to_string(), DocumentId::new(), Some(1), 0);

    assert_eq!(chunk.char_len(), 10);
}

#[test]
fn given_default_plan_when_inspected_then_empty_and_not_split() {
    let plan = ChunkPlan::default();

    assert!(plan.is_empty());
    assert_eq!(plan.len(), 0);
    assert!(!plan.split_mid_content);
}
