//! Benchmarks for tree validation, key resolution and navigation
//!
//! Run with: cargo bench --bench tree

use leader_key::config::{find_item, validate};
use leader_key::keys::{resolve, KeyEvent, Modifiers};
use leader_key::{Action, ActionType, Group, KeyItem, NavigationController};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const KEYS: &[&str] = &[
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x", "y", "z",
];

/// Tree with `width` children per group, `depth` levels of groups
fn build_tree(width: usize, depth: usize) -> Group {
    fn children(width: usize, depth: usize) -> Vec<KeyItem> {
        KEYS.iter()
            .take(width)
            .map(|key| {
                if depth > 0 {
                    Group::new(*key, children(width, depth - 1)).into()
                } else {
                    Action::new(*key, ActionType::Command, "true").into()
                }
            })
            .collect()
    }
    Group::root(children(width, depth))
}

// ============================================================================
// Validation benchmarks
// ============================================================================

#[divan::bench(args = [2, 3, 4])]
fn validate_tree(bencher: divan::Bencher, depth: usize) {
    let root = build_tree(8, depth);
    bencher.bench(|| divan::black_box(validate(&root)));
}

#[divan::bench]
fn validate_with_duplicates(bencher: divan::Bencher) {
    let root = Group::root(
        (0..200)
            .map(|i| Action::new(KEYS[i % 4], ActionType::Url, "https://example.com").into())
            .collect(),
    );
    bencher.bench(|| divan::black_box(validate(&root)));
}

#[divan::bench]
fn find_deep_item(bencher: divan::Bencher) {
    let root = build_tree(8, 4);
    bencher.bench(|| divan::black_box(find_item(&root, &[7, 7, 7, 7, 7])));
}

// ============================================================================
// Key resolution benchmarks
// ============================================================================

#[divan::bench]
fn resolve_layout_character() {
    let event = KeyEvent::new(0x00, "q");
    divan::black_box(resolve(&event, false));
}

#[divan::bench]
fn resolve_standard_layout() {
    let event = KeyEvent::new(0x0F, "R").with_modifiers(Modifiers::SHIFT);
    divan::black_box(resolve(&event, true));
}

#[divan::bench]
fn resolve_special_key() {
    let event = KeyEvent::new(0x7B, "");
    divan::black_box(resolve(&event, false));
}

// ============================================================================
// Navigation benchmarks
// ============================================================================

#[divan::bench(args = [8, 26])]
fn walk_to_leaf(bencher: divan::Bencher, width: usize) {
    let root = build_tree(width, 3);
    let last = KEYS[width - 1];
    bencher.bench_local(|| {
        let mut nav = NavigationController::new();
        nav.activate();
        for _ in 0..4 {
            divan::black_box(nav.on_key(&root, last));
        }
    });
}
