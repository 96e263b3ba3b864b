use faqmine_core::errors::*;

#[test]
fn too_few_members_carries_counts() {
    let err = SubclusterError::TooFewMembers {
        required: 2,
        actual: 1,
    };
    let msg = err.to_string();
    assert!(msg.contains('2'));
    assert!(msg.contains('1'));
}

#[test]
fn vector_count_mismatch_names_parent() {
    let err = SubclusterError::VectorCountMismatch {
        parent_id: "cluster-9".into(),
        records: 40,
        vectors: 39,
    };
    assert!(err.to_string().contains("cluster-9"));
}

#[test]
fn batch_size_mismatch_carries_values() {
    let err = EmbeddingError::BatchSizeMismatch {
        sent: 16,
        received: 15,
    };
    let msg = err.to_string();
    assert!(msg.contains("16"));
    assert!(msg.contains("15"));
}

// --- From impls ---

#[test]
fn embedding_error_converts_to_faqmine_error() {
    let err: FaqMineError = EmbeddingError::InferenceFailed {
        reason: "model not loaded".into(),
    }
    .into();
    assert!(matches!(err, FaqMineError::EmbeddingError(_)));
    assert!(err.to_string().contains("model not loaded"));
}

#[test]
fn subcluster_error_converts_to_faqmine_error() {
    let err: FaqMineError = SubclusterError::InvalidK { k: 5, points: 3 }.into();
    assert!(matches!(err, FaqMineError::SubclusterError(_)));
}

#[test]
fn config_error_converts_to_faqmine_error() {
    let err: FaqMineError = ConfigError::InvalidValue {
        field: "ranking.num_faqs".into(),
        reason: "nope".into(),
    }
    .into();
    assert!(matches!(err, FaqMineError::ConfigError(_)));
    assert!(err.to_string().contains("ranking.num_faqs"));
}

#[test]
fn io_error_maps_to_persistence_error() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let err: FaqMineError = io.into();
    assert!(matches!(err, FaqMineError::PersistenceError { .. }));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn json_error_maps_to_serialization_error() {
    let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err: FaqMineError = json_err.into();
    assert!(matches!(err, FaqMineError::SerializationError { .. }));
}
