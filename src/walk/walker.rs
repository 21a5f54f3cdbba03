//! Walk implementations

use super::types::{
    KeyedWalk, LoadKind, PositionalWalk, PositionalWalkConfig, WalkConfig, WalkedPage,
};
use crate::source::{KeyedSource, PositionalSource};
use crate::types::{LoadInitialParams, LoadParams, PositionalInitialParams, RangeParams};
use tracing::debug;

/// Drive a key-paged source from its initial page towards its boundaries
///
/// Forward travel goes first; with `Direction::Both` the backward leg uses
/// whatever remains of the page budget. The initial load always happens, so
/// a walk makes at least one load.
pub fn walk_keyed<K, V>(source: &dyn KeyedSource<K, V>, config: &WalkConfig) -> KeyedWalk<K, V>
where
    K: Clone,
{
    let max_pages = config.max_pages.max(1);
    let initial = source.load_initial(&LoadInitialParams::new(config.initial_load_size()));
    let mut loads = 1;
    let mut truncated = false;
    debug!(
        kind = %source.kind(),
        items = initial.items.len(),
        "initial page loaded"
    );

    let mut after = Vec::new();
    if config.direction.forward() {
        let mut next = initial.next_key;
        while let Some(key) = next {
            if loads >= max_pages {
                truncated = true;
                break;
            }
            let page = source.load_after(&LoadParams::new(key.clone(), config.page_size));
            loads += 1;
            debug!(load = loads, items = page.items.len(), "page loaded after");
            next = page.adjacent_key;
            after.push(WalkedPage {
                load: LoadKind::After,
                key: Some(key),
                items: page.items,
            });
        }
    }

    let mut before = Vec::new();
    if config.direction.backward() {
        let mut prev = initial.prev_key;
        while let Some(key) = prev {
            if loads >= max_pages {
                truncated = true;
                break;
            }
            let page = source.load_before(&LoadParams::new(key.clone(), config.page_size));
            loads += 1;
            debug!(load = loads, items = page.items.len(), "page loaded before");
            prev = page.adjacent_key;
            before.push(WalkedPage {
                load: LoadKind::Before,
                key: Some(key),
                items: page.items,
            });
        }
    }

    let mut pages = Vec::with_capacity(before.len() + 1 + after.len());
    pages.extend(before.into_iter().rev());
    pages.push(WalkedPage {
        load: LoadKind::Initial,
        key: None,
        items: initial.items,
    });
    pages.extend(after);

    if truncated {
        debug!(max_pages, "walk stopped at page limit");
    }

    KeyedWalk {
        pages,
        loads,
        truncated,
    }
}

/// Drive a position-paged source from a start position to the end
///
/// Range loads continue from the end of what has been received until the
/// reported total is reached, a range comes back empty, or the page budget
/// runs out.
pub fn walk_positional<V>(
    source: &dyn PositionalSource<V>,
    config: &PositionalWalkConfig,
) -> PositionalWalk<V> {
    let max_pages = config.max_pages.max(1);
    let page_size = config.page_size.max(1);
    let mut params = PositionalInitialParams::new(config.start, config.initial_load_size());
    params.page_size = page_size;

    let initial = source.load_initial(&params);
    let position = initial.position;
    let total_count = initial.total_count;
    let mut items = initial.items;
    let mut loads = 1;
    let mut truncated = false;
    debug!(
        kind = %source.kind(),
        position,
        total_count,
        items = items.len(),
        "initial window loaded"
    );

    loop {
        let next = position + items.len();
        if next >= total_count {
            break;
        }
        if loads >= max_pages {
            truncated = true;
            debug!(max_pages, "walk stopped at page limit");
            break;
        }
        let start = i64::try_from(next).unwrap_or(i64::MAX);
        let range = source.load_range(&RangeParams::new(start, page_size));
        loads += 1;
        debug!(load = loads, start = next, items = range.len(), "range loaded");
        if range.is_empty() {
            break;
        }
        items.extend(range);
    }

    PositionalWalk {
        position,
        total_count,
        items,
        loads,
        truncated,
    }
}
