use fcs_writer::{keywords, sort_keywords, KeywordMap, KeywordValue};

#[test]
fn test_keywords_macro_preserves_insertion_order() {
    let map = keywords! {
        "$TOT" => 100,
        "$PAR" => 4,
        "#ACQ" => "2024",
    };
    let keys: Vec<_> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["$TOT", "$PAR", "#ACQ"]);
}

#[test]
fn test_keywords_macro_numbers() {
    let map = keywords! {
        "$P1R" => 1024,
        "$P1G" => 2.0,
        "NEG" => -3,
    };
    assert_eq!(map.get("$P1R"), Some(&KeywordValue::Integer(1024)));
    assert_eq!(map.get("$P1G"), Some(&KeywordValue::Float(2.0)));
    assert_eq!(map.get("NEG"), Some(&KeywordValue::Integer(-3)));
    assert_eq!(map.get("$P1G").map(ToString::to_string), Some("2".to_string()));
}

#[test]
fn test_keywords_macro_expressions() {
    let channels = ["FSC-A", "SSC-A"];
    let map = keywords! {
        format!("$P{}N", 1) => channels[0],
        format!("$P{}N", 2) => channels[1],
        "$PAR" => channels.len(),
    };
    assert_eq!(map.get("$P2N").and_then(KeywordValue::as_str), Some("SSC-A"));
    assert_eq!(map.get("$PAR"), Some(&KeywordValue::Integer(2)));
}

#[test]
fn test_keywords_macro_trailing_comma_and_empty() {
    let empty: KeywordMap = keywords! {};
    assert!(empty.is_empty());

    let single = keywords! { "$MODE" => "L", };
    assert_eq!(single.len(), 1);
}

#[test]
fn test_keywords_macro_with_sort() {
    let sorted = sort_keywords(keywords! {
        "$P2N" => "b",
        "$P1N" => "a",
        "$PAR" => 2,
    });
    let keys: Vec<_> = sorted.keys().map(String::as_str).collect();
    assert_eq!(keys, ["$PAR", "$P1N", "$P2N"]);
}
