//! Tests for walk module

use super::*;
use crate::mock::MockSource;
use crate::source::{EmptyKeyedSource, EmptyPositionalSource, KeyedSource, PositionalSource};
use pretty_assertions::assert_eq;

fn five_pages() -> crate::source::KeyedFactory<i64, i64> {
    MockSource::page_array(
        (0..5).map(|i| Some(vec![i * 10, i * 10 + 1])).collect(),
        0,
        Some(2),
    )
}

// ============================================================================
// Keyed Walk Tests
// ============================================================================

#[test]
fn test_walk_forward_from_initial() {
    let factory = five_pages();
    let walk = walk_keyed(&*factory.create(), &WalkConfig::new(Direction::Forward));

    assert_eq!(walk.into_items(), vec![20, 21, 30, 31, 40, 41]);
}

#[test]
fn test_walk_backward_keeps_display_order() {
    let factory = five_pages();
    let walk = walk_keyed(&*factory.create(), &WalkConfig::new(Direction::Backward));

    assert_eq!(walk.loads, 3);
    assert!(!walk.truncated);
    let loads: Vec<LoadKind> = walk.pages.iter().map(|p| p.load).collect();
    assert_eq!(loads, vec![LoadKind::Before, LoadKind::Before, LoadKind::Initial]);
    assert_eq!(walk.pages[0].key, Some(0));
    assert_eq!(
        walk.items().copied().collect::<Vec<_>>(),
        vec![0, 1, 10, 11, 20, 21]
    );
}

#[test]
fn test_walk_both_directions() {
    let factory = five_pages();
    let walk = walk_keyed(&*factory.create(), &WalkConfig::new(Direction::Both));

    assert_eq!(walk.loads, 5);
    assert_eq!(walk.item_count(), 10);
    let keys: Vec<Option<i64>> = walk.pages.iter().map(|p| p.key).collect();
    assert_eq!(keys, vec![Some(0), Some(1), None, Some(3), Some(4)]);
}

#[test]
fn test_walk_stops_cycle_at_page_limit() {
    let factory = MockSource::pages_from(
        'a',
        |k: &char| Some(vec![*k]),
        |_| None,
        |k| Some(if *k == 'a' { 'b' } else { 'a' }),
    );
    let walk = walk_keyed(
        &*factory.create(),
        &WalkConfig::new(Direction::Forward).with_max_pages(5),
    );

    assert!(walk.truncated);
    assert_eq!(walk.loads, 5);
    assert_eq!(walk.into_items(), vec!['a', 'b', 'a', 'b', 'a']);
}

#[test]
fn test_walk_zero_page_limit_still_loads_initial() {
    let factory = five_pages();
    let walk = walk_keyed(
        &*factory.create(),
        &WalkConfig::new(Direction::Forward).with_max_pages(0),
    );
    assert_eq!(walk.loads, 1);
    assert!(walk.truncated);
    assert_eq!(walk.into_items(), vec![20, 21]);
}

#[test]
fn test_walk_empty_keyed_source() {
    let source: &dyn KeyedSource<u32, u32> = &EmptyKeyedSource::new();
    let walk = walk_keyed(source, &WalkConfig::new(Direction::Both));
    assert_eq!(walk.loads, 1);
    assert!(!walk.truncated);
    assert_eq!(walk.item_count(), 0);
}

#[test]
fn test_walk_config_defaults() {
    let config = WalkConfig::default();
    assert_eq!(config.direction, Direction::Forward);
    assert_eq!(config.page_size, 20);
    assert_eq!(config.initial_load_size(), 60);
    assert_eq!(config.max_pages, 100);
    assert!(Direction::Both.forward() && Direction::Both.backward());
    assert!(!Direction::Forward.backward());
}

#[test]
fn test_keyed_walk_serializes() {
    let factory = MockSource::page_array(vec![Some(vec!["x"])], 7, None);
    let walk = walk_keyed(&*factory.create(), &WalkConfig::default());
    let json = serde_json::to_value(&walk).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "pages": [{"load": "initial", "key": null, "items": ["x"]}],
            "loads": 1,
            "truncated": false
        })
    );
}

// ============================================================================
// Positional Walk Tests
// ============================================================================

#[test]
fn test_walk_positional_reads_everything() {
    let factory = MockSource::items_from(0..50);
    let walk = walk_positional(
        &*factory.create(),
        &PositionalWalkConfig::new(0).with_page_size(10),
    );

    assert_eq!(walk.position, 0);
    assert_eq!(walk.total_count, 50);
    assert_eq!(walk.items, (0..50).collect::<Vec<_>>());
    // 30 initial, then two ranges of 10
    assert_eq!(walk.loads, 3);
    assert!(!walk.truncated);
}

#[test]
fn test_walk_positional_from_middle() {
    let factory = MockSource::items_from(0..10);
    let walk = walk_positional(
        &*factory.create(),
        &PositionalWalkConfig::new(7).with_page_size(2),
    );
    assert_eq!(walk.position, 7);
    assert_eq!(walk.items, vec![7, 8, 9]);
    assert_eq!(walk.loads, 1);
}

#[test]
fn test_walk_positional_page_limit() {
    let factory = MockSource::items_from(0..100);
    let walk = walk_positional(
        &*factory.create(),
        &PositionalWalkConfig::new(-5)
            .with_page_size(5)
            .with_max_pages(3),
    );
    assert_eq!(walk.position, 0);
    assert_eq!(walk.items.len(), 25);
    assert!(walk.truncated);
}

#[test]
fn test_walk_positional_empty_source() {
    let source: &dyn PositionalSource<u8> = &EmptyPositionalSource::new();
    let walk = walk_positional(source, &PositionalWalkConfig::default());
    assert_eq!(walk.total_count, 0);
    assert!(walk.items.is_empty());
    assert_eq!(walk.loads, 1);
}
