use super::*;

#[test]
fn as_str_matches_variant_name() {
    for code in ErrorCode::ALL {
        assert_eq!(format!("{code:?}"), code.as_str());
        assert_eq!(code.to_string(), code.as_str());
    }
}

#[test]
fn every_code_has_a_description() {
    for code in ErrorCode::ALL {
        assert!(!code.description().is_empty(), "{code} has no description");
    }
}

#[test]
fn codes_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for code in ErrorCode::ALL {
        assert!(seen.insert(code.as_str()), "duplicate {code}");
    }
}

#[test]
fn lookup_by_spelling() {
    assert_eq!(ErrorCode::from_code("E4002"), Some(ErrorCode::E4002));
    assert_eq!(ErrorCode::from_code("e0001"), Some(ErrorCode::E0001));
    assert_eq!(ErrorCode::from_code("E7777"), None);
    assert_eq!(ErrorCode::from_code(""), None);
}
