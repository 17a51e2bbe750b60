use super::*;

#[test]
fn every_listed_keyword_is_recognized() {
    for kw in KEYWORDS {
        assert!(is_keyword(kw), "{kw} should be a keyword");
    }
}

#[test]
fn keyword_list_is_sorted_and_unique() {
    let mut sorted = KEYWORDS.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted, KEYWORDS.to_vec());
}

#[test]
fn identifiers_are_not_keywords() {
    for ident in ["x", "main", "Int", "INT", "whiles", "std", "cout", "_if", "nullptr", ""] {
        assert!(!is_keyword(ident), "{ident:?} should not be a keyword");
    }
}

#[test]
fn keywords_are_case_sensitive() {
    assert!(is_keyword("class"));
    assert!(!is_keyword("Class"));
}
