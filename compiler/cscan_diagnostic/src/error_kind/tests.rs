use super::*;

#[test]
fn test_error_kind_display() {
    assert_eq!(ErrorKind::InvalidIdentifierStart.to_string(), "E0001");
    assert_eq!(ErrorKind::UnexpectedPunctuation.as_str(), "E0008");
}

#[test]
fn all_kinds_have_distinct_codes() {
    let mut codes: Vec<_> = ErrorKind::ALL.iter().map(ErrorKind::as_str).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), ErrorKind::ALL.len());
    assert_eq!(codes.len(), 8);
}

#[test]
fn all_is_in_code_order() {
    let codes: Vec<_> = ErrorKind::ALL.iter().map(ErrorKind::as_str).collect();
    let mut sorted = codes.clone();
    sorted.sort_unstable();
    assert_eq!(codes, sorted);
}

#[test]
fn parse_by_code_is_case_insensitive() {
    assert_eq!("E0003".parse(), Ok(ErrorKind::UnterminatedLiteral));
    assert_eq!("e0006".parse(), Ok(ErrorKind::UnterminatedComment));
    assert_eq!(" E0002 ".parse(), Ok(ErrorKind::MalformedNumber));
}

#[test]
fn parse_by_name() {
    assert_eq!(
        "InvalidEscapeSequence".parse(),
        Ok(ErrorKind::InvalidEscapeSequence)
    );
}

#[test]
fn parse_round_trips_every_kind() {
    for &kind in ErrorKind::ALL {
        assert_eq!(kind.as_str().parse::<ErrorKind>(), Ok(kind));
        assert_eq!(kind.name().parse::<ErrorKind>(), Ok(kind));
    }
}

#[test]
fn parse_unknown_code() {
    let err = "E9999".parse::<ErrorKind>().unwrap_err();
    assert_eq!(err, UnknownErrorCode("E9999".to_owned()));
    assert_eq!(err.to_string(), "unknown error code `E9999`");
}

#[test]
fn titles_are_lowercase() {
    for kind in ErrorKind::ALL {
        let title = kind.title();
        assert_eq!(title, title.to_lowercase(), "{kind:?}");
    }
}
