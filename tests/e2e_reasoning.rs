//! End-to-end tests for code explanations.

use pretty_assertions::assert_eq;
use typeflip::reasoning::clause;
use typeflip::{ALL_CODES, Dimension, Error, description, explain};

#[test]
fn test_explain_intj() {
    let e = explain("INTJ").unwrap();
    assert_eq!(e.description, description("INTJ"));
    assert_eq!(
        e.clauses.to_vec(),
        Dimension::ALL
            .iter()
            .zip("INTJ".chars())
            .map(|(&d, l)| clause(d, l).unwrap())
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_opposite_codes_share_no_clause() {
    let a = explain("ESTJ").unwrap();
    let b = explain("INFP").unwrap();
    for i in 0..4 {
        assert_ne!(a.clauses[i], b.clauses[i]);
    }
}

#[test]
fn test_every_code_explains() {
    for code in ALL_CODES {
        let e = explain(code.as_str()).unwrap();
        assert_eq!(e.code, code);
        assert_eq!(e.clauses.len(), 4);
    }
}

#[test]
fn test_explain_rejects_invalid() {
    for raw in ["ZZZZ", "XXXX", "INT", ""] {
        match explain(raw) {
            Err(Error::InvalidCode(got)) => assert_eq!(got, raw),
            other => panic!("expected InvalidCode for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_explanation_serializes() {
    let json = serde_json::to_value(explain("ENFP").unwrap()).unwrap();
    assert_eq!(json["code"], "ENFP");
    assert_eq!(json["clauses"].as_array().unwrap().len(), 4);
}
