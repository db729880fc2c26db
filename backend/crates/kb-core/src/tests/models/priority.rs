use crate::Priority;

use std::str::FromStr;

#[test]
fn test_priority_as_str() {
    assert_eq!(Priority::High.as_str(), "high");
    assert_eq!(Priority::Medium.as_str(), "medium");
    assert_eq!(Priority::Low.as_str(), "low");
}

#[test]
fn test_priority_from_str() {
    assert_eq!(Priority::from_str("high").unwrap(), Priority::High);
    assert_eq!(Priority::from_str("low").unwrap(), Priority::Low);
    assert!(Priority::from_str("urgent").is_err());
    assert!(Priority::from_str("HIGH").is_err());
}

#[test]
fn test_priority_default() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn test_priority_rank_puts_high_first() {
    let mut priorities = vec![Priority::Low, Priority::High, Priority::Medium];
    priorities.sort_by_key(Priority::rank);
    assert_eq!(
        priorities,
        vec![Priority::High, Priority::Medium, Priority::Low]
    );
}

#[test]
fn test_priority_display_matches_wire_value() {
    assert_eq!(Priority::High.to_string(), "high");
    assert_eq!(Priority::Low.to_string(), Priority::Low.as_str());
}
