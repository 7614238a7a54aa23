//! Tests for ScrollIndicators

use super::*;

#[test]
fn test_at_top() {
    let indicators = ScrollIndicators::from_offset(0.0, 20.0);
    assert_eq!(indicators, ScrollIndicators::default());
}

#[test]
fn test_past_hero_threshold() {
    assert!(!ScrollIndicators::from_offset(6.0, 20.0).past_hero);
    assert!(ScrollIndicators::from_offset(6.5, 20.0).past_hero);
}

#[test]
fn test_back_to_top_threshold() {
    let below = ScrollIndicators::from_offset(30.0, 20.0);
    assert!(below.past_hero);
    assert!(!below.show_back_to_top);

    let above = ScrollIndicators::from_offset(31.0, 20.0);
    assert!(above.show_back_to_top);
}
