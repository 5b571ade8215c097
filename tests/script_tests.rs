use pretty_assertions::assert_eq;
use tq::script::{get_all, set_all};
use tq::{Assignment, Batch, Document, LeafKind, Path, QueryError, Scalar};

fn path(expr: &str) -> Path {
    Path::parse(expr).unwrap()
}

fn leaf(doc: &Document, expr: &str) -> Scalar {
    doc.get(&path(expr)).unwrap().as_scalar().cloned().unwrap()
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_classify_gets() {
    let batch = Batch::classify(&["a.b", " c "]).unwrap();
    assert_eq!(batch, Batch::Get(vec![path("a.b"), path("c")]));
}

#[test]
fn test_classify_sets() {
    let batch = Batch::classify(&["a.b=1", "c = two"]).unwrap();
    assert_eq!(
        batch,
        Batch::Set(vec![
            Assignment {
                path: path("a.b"),
                raw: "1".into(),
            },
            Assignment {
                path: path("c"),
                raw: " two".into(),
            },
        ])
    );
}

#[test]
fn test_classify_splits_on_first_equals() {
    let Batch::Set(sets) = Batch::classify(&["expr=a=b=c"]).unwrap() else {
        panic!("expected a set batch");
    };
    assert_eq!(sets[0].path, path("expr"));
    assert_eq!(sets[0].raw, "a=b=c");
}

#[test]
fn test_classify_empty_is_empty_set_batch() {
    let scripts: [&str; 0] = [];
    assert_eq!(Batch::classify(&scripts).unwrap(), Batch::Set(vec![]));
}

#[test]
fn test_classify_rejects_mixed_batch() {
    assert_eq!(Batch::classify(&["a.b", "c.d=5"]), Err(QueryError::MixedBatch));
}

#[test]
fn test_mixed_batch_checked_before_paths() {
    // The malformed path is never parsed
    assert_eq!(Batch::classify(&["a..b", "c=5"]), Err(QueryError::MixedBatch));
}

#[test]
fn test_classify_rejects_invalid_path() {
    assert!(matches!(
        Batch::classify(&["a..b=1"]),
        Err(QueryError::InvalidPath { .. })
    ));
}

// ============================================================================
// Execution
// ============================================================================

const DOC: &str = r#"
a = 0
b = false
c = 0
name = "x"
"#;

#[test]
fn test_get_all_in_order() {
    let doc = Document::parse(DOC).unwrap();
    let nodes = get_all(&doc, &[path("name"), path("a")]).unwrap();
    assert_eq!(nodes[0].as_scalar(), Some(&Scalar::String("x".into())));
    assert_eq!(nodes[1].as_scalar(), Some(&Scalar::Integer(0)));
}

#[test]
fn test_get_all_stops_at_missing_path() {
    let doc = Document::parse(DOC).unwrap();
    let err = get_all(&doc, &[path("a"), path("zzz"), path("b")]).unwrap_err();
    assert_eq!(err, QueryError::PathNotFound(path("zzz")));
}

#[test]
fn test_set_all_applies_in_order() {
    let mut doc = Document::parse(DOC).unwrap();
    let Batch::Set(sets) = Batch::classify(&["a=1", "a=2", "b=true"]).unwrap() else {
        panic!("expected a set batch");
    };
    set_all(&mut doc, &sets).unwrap();
    assert_eq!(leaf(&doc, "a"), Scalar::Integer(2));
    assert_eq!(leaf(&doc, "b"), Scalar::Bool(true));
}

#[test]
fn test_set_all_keeps_earlier_sets_on_failure() {
    let mut doc = Document::parse(DOC).unwrap();
    let Batch::Set(sets) = Batch::classify(&["a=1", "b=bad", "c=3"]).unwrap() else {
        panic!("expected a set batch");
    };

    let err = set_all(&mut doc, &sets).unwrap_err();
    assert_eq!(
        err,
        QueryError::Coercion {
            path: path("b"),
            value: "bad".into(),
            expected: LeafKind::Bool,
        }
    );

    assert_eq!(leaf(&doc, "a"), Scalar::Integer(1));
    assert_eq!(leaf(&doc, "b"), Scalar::Bool(false));
    assert_eq!(leaf(&doc, "c"), Scalar::Integer(0));
}
