//! Behavioral tests for the three pack queries
//!
//! - `within`   membership of every packed type in an allowed set
//! - `distinct` no parameter type packed twice
//! - `extract`  first value of a type in pack order, else its default

use param_pack::prelude::*;
use param_pack::{params, type_set};

#[derive(Clone, Copy, Debug, PartialEq, ConfigParam)]
enum Pull {
    Disabled,
    Down,
    Up,
}

#[derive(Clone, Copy, Debug, PartialEq, ConfigParam)]
enum Drive {
    S0S1,
    H0H1,
}

#[derive(Clone, Copy, Debug, PartialEq, ConfigParam)]
enum Sense {
    Disabled,
    High,
    Low,
}

const SET: TypeSet<2> = type_set!(Pull, Drive);

// =============================================================================
// Membership
// =============================================================================

#[test]
fn test_empty_pack_is_vacuously_valid() {
    let empty = params![];
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert!(empty.within(&SET));
    assert!(empty.distinct());
}

#[test]
fn test_membership_accepts_listed_types() {
    assert!(params![Pull::Up].within(&SET));
    assert!(params![Pull::Up, Drive::H0H1].within(&SET));
}

#[test]
fn test_membership_rejects_unlisted_type() {
    // Sense is not in SET, alone or mixed with accepted types.
    assert!(!params![Sense::Low].within(&SET));
    assert!(!params![Pull::Up, Sense::Low].within(&SET));
    assert!(!params![Sense::Low, Pull::Up].within(&SET));
}

// =============================================================================
// Duplicate detection
// =============================================================================

#[test]
fn test_duplicates_keyed_by_type_not_value() {
    // Two values of one type are a duplicate even when they are equal.
    assert!(!params![Pull::Up, Pull::Up].distinct());
    assert!(!params![Pull::Up, Pull::Down].distinct());
    assert!(!params![Pull::Up, Drive::H0H1, Pull::Down].distinct());
}

#[test]
fn test_distinct_types_are_not_duplicates() {
    assert!(params![Pull::Up].distinct());
    assert!(params![Pull::Up, Drive::H0H1, Sense::Low].distinct());
}

// =============================================================================
// Extraction
// =============================================================================

#[test]
fn test_extract_falls_back_to_default() {
    // Pull is absent: its default is the first declared variant.
    let pack = params![Drive::H0H1];
    assert_eq!(pack.extract::<Pull>(), Pull::Disabled);
}

#[test]
fn test_extract_returns_packed_value() {
    let pack = params![Pull::Up, Drive::H0H1];
    assert_eq!(pack.extract::<Pull>(), Pull::Up);
    assert_eq!(pack.extract::<Drive>(), Drive::H0H1);
}

#[test]
fn test_extract_first_match_wins() {
    // Duplicates are barred by the consumer gate, but extraction stays
    // deterministic on any pack.
    let pack = params![Pull::Down, Pull::Up];
    assert_eq!(pack.extract::<Pull>(), Pull::Down);
}

#[test]
fn test_extract_or_custom_default() {
    let empty = params![];
    assert_eq!(empty.extract_or(Pull::Up), Pull::Up);

    // A packed value beats the custom default.
    let pack = params![Pull::Down];
    assert_eq!(pack.extract_or(Pull::Up), Pull::Down);
}

// =============================================================================
// Order independence
// =============================================================================

#[test]
fn test_queries_are_order_independent() {
    let a = params![Pull::Up, Drive::H0H1];
    let b = params![Drive::H0H1, Pull::Up];

    assert_eq!(a.within(&SET), b.within(&SET));
    assert_eq!(a.distinct(), b.distinct());
    assert_eq!(a.extract::<Pull>(), b.extract::<Pull>());
    assert_eq!(a.extract::<Drive>(), b.extract::<Drive>());
}

// =============================================================================
// Introspection and the bool scalar
// =============================================================================

#[test]
fn test_contains_reports_presence() {
    let pack = params![Pull::Up];
    assert!(pack.contains::<Pull>());
    assert!(!pack.contains::<Drive>());
}

#[test]
fn test_entry_exposes_tag_and_raw() {
    let entry = Entry::new(tag_of(&Pull::Up), Pull::Up as u32);
    assert!(entry.tag().matches(<Pull as ConfigParam>::TAG));
    assert_eq!(entry.raw(), 2);
    assert_eq!(entry.tag().raw(), <Pull as ConfigParam>::TAG.raw());
}

#[test]
fn test_bool_is_a_scalar_parameter() {
    assert!(!params![].extract::<bool>());
    assert!(params![true].extract::<bool>());
    assert!(!params![false].extract::<bool>());

    const FLAGS: TypeSet<1> = type_set!(bool);
    assert!(params![true].within(&FLAGS));
    assert!(!params![Pull::Up].within(&FLAGS));
}
