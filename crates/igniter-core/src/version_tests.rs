//! Tests for runtime version parsing and comparison.

use crate::version::{RuntimeVersion, VersionComparator, VersionParseError};

#[test]
fn parses_partial_versions() {
    assert_eq!("2".parse(), Ok(RuntimeVersion::new(2, 0, 0)));
    assert_eq!("2.1".parse(), Ok(RuntimeVersion::new(2, 1, 0)));
    assert_eq!("2.1.3".parse(), Ok(RuntimeVersion::new(2, 1, 3)));
}

#[test]
fn rejects_bad_versions() {
    assert_eq!(
        "".parse::<RuntimeVersion>(),
        Err(VersionParseError::Empty)
    );
    assert!(matches!(
        "1.x".parse::<RuntimeVersion>(),
        Err(VersionParseError::InvalidComponent(_))
    ));
    assert!(matches!(
        "1.2.3.4".parse::<RuntimeVersion>(),
        Err(VersionParseError::TooManyComponents(_))
    ));
}

#[test]
fn equal_or_newer_matches_at_equality() {
    let v = RuntimeVersion::new(17, 0, 0);
    assert!(VersionComparator::EqualOrNewer.matches(v, v));
    assert!(VersionComparator::EqualOrNewer.matches(RuntimeVersion::new(17, 0, 1), v));
    assert!(!VersionComparator::EqualOrNewer.matches(RuntimeVersion::new(16, 9, 9), v));
}

#[test]
fn older_than_does_not_match_at_equality() {
    let v = RuntimeVersion::new(17, 0, 0);
    assert!(!VersionComparator::OlderThan.matches(v, v));
    assert!(VersionComparator::OlderThan.matches(RuntimeVersion::new(16, 0, 0), v));
    assert!(!VersionComparator::OlderThan.matches(RuntimeVersion::new(17, 0, 1), v));
}

#[test]
fn display_round_trip() {
    let v = RuntimeVersion::new(1, 2, 3);
    assert_eq!(v.to_string(), "1.2.3");
    assert_eq!(v.to_string().parse(), Ok(v));
}
