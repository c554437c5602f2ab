//! Property-based invariant tests for the carousel engine.
//!
//! 1. Category-relative coordinates are a pure function of the global index.
//! 2. Category-relative lookups invert back to the same global index.
//! 3. Jump targets are clamped into the deck.
//! 4. Edge damping scales linearly, is monotonic and never commits.
//! 5. A horizontal axis lock survives vertical-dominant samples.
//! 6. Arbitrary input sequences keep the idle/offset invariant.
//! 7. A release inside the threshold cancels whatever the drag went through.

use std::time::{Duration, Instant};

use deck_carousel::{
    carousel::{GestureEvent, GestureInterpreter, IndexMapper, NavKey, Outcome, Phase},
    Card, Category, CategoryId, Deck, Navigator, NavigatorConfig,
};
use proptest::prelude::*;

const CATEGORIES: usize = 4;

// ── Helpers ─────────────────────────────────────────────────────────────

fn deck_strategy() -> impl Strategy<Value = Deck> {
    prop::collection::vec(0..CATEGORIES, 1..40).prop_map(|assignment| {
        let categories = (0..CATEGORIES)
            .map(|c| Category::new(format!("C{c}")))
            .collect();
        let cards = assignment
            .iter()
            .enumerate()
            .map(|(i, c)| Card::new(format!("card-{i}"), format!("C{c}"), format!("Card {i}")))
            .collect();
        Deck::new("prop", categories, cards).expect("generated deck is valid")
    })
}

fn navigator(deck: &Deck) -> Navigator {
    let mut nav = Navigator::new(deck, NavigatorConfig::default()).expect("valid navigator");
    nav.set_viewport_width(300.0);
    nav
}

#[derive(Debug, Clone)]
enum Op {
    Key(NavKey),
    Jump(i64),
    Category(usize),
    Start(f32, f32),
    Move(f32, f32),
    End(f32, f32),
    Wait(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop_oneof![
            Just(NavKey::ArrowLeft),
            Just(NavKey::ArrowRight),
            Just(NavKey::Space),
            Just(NavKey::Home),
            Just(NavKey::End),
        ]
        .prop_map(Op::Key),
        (-100i64..100).prop_map(Op::Jump),
        (0..CATEGORIES).prop_map(Op::Category),
        (0f32..600.0, 0f32..400.0).prop_map(|(x, y)| Op::Start(x, y)),
        (0f32..600.0, 0f32..400.0).prop_map(|(x, y)| Op::Move(x, y)),
        (0f32..600.0, 0f32..400.0).prop_map(|(x, y)| Op::End(x, y)),
        (0u64..500).prop_map(Op::Wait),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Category-relative coordinates derive from the global index
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn relative_index_is_derived(deck in deck_strategy()) {
        let mapper = IndexMapper::new(&deck);
        for global in 0..deck.len() {
            let position = mapper.category_relative_index(global);
            let same_category = |i: &usize| deck.category_of(*i) == Some(position.category);
            let before = (0..global).filter(same_category).count();
            let size = (0..deck.len()).filter(same_category).count();
            prop_assert_eq!(position.relative_index, before);
            prop_assert_eq!(position.category_size, size);
            prop_assert!(position.relative_index < position.category_size);
        }
    }
}

proptest! {
    #[test]
    fn snapshot_agrees_with_mapper(deck in deck_strategy(), target in 0i64..40) {
        let mut nav = navigator(&deck);
        nav.jump_to(target, Instant::now());
        let snapshot = nav.snapshot();
        let position = nav.mapper().category_relative_index(snapshot.global_index);
        prop_assert_eq!(snapshot.category, position.category);
        prop_assert_eq!(snapshot.category_relative_index, position.relative_index);
        prop_assert_eq!(snapshot.category_size, position.category_size);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Inverse mapping round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn inverse_mapping_round_trips(deck in deck_strategy()) {
        let mapper = IndexMapper::new(&deck);
        for global in 0..deck.len() {
            let position = mapper.category_relative_index(global);
            let relative = i64::try_from(position.relative_index).expect("small index");
            prop_assert_eq!(
                mapper.global_for_category_relative(position.category, relative),
                Some(global)
            );
        }
    }
}

proptest! {
    #[test]
    fn inverse_mapping_clamps(deck in deck_strategy(), category in 0..CATEGORIES, relative in any::<i64>()) {
        let mapper = IndexMapper::new(&deck);
        let id = CategoryId(category);
        match mapper.global_for_category_relative(id, relative) {
            Some(global) => prop_assert_eq!(mapper.category_of(global), id),
            None => prop_assert_eq!(mapper.category_size(id), 0),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Clamping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn jump_is_clamped(deck in deck_strategy(), target in any::<i64>()) {
        let mut nav = navigator(&deck);
        nav.jump_to(target, Instant::now());
        let expected = usize::try_from(target.max(0)).map_or(deck.len() - 1, |t| t.min(deck.len() - 1));
        prop_assert_eq!(nav.global_index(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Edge damping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn edge_damping_is_monotonic(a in 0.1f32..2000.0, b in 0.1f32..2000.0) {
        let deck = Deck::new(
            "prop",
            vec![Category::new("X")],
            (0..5).map(|i| Card::new(format!("c{i}"), "X", "Card")).collect(),
        )
        .expect("valid deck");
        let nav = navigator(&deck);
        let damping = nav.config().edge_damping;

        prop_assert!((nav.damp(a) - a * damping).abs() <= f32::EPSILON * a.max(1.0));
        if a < b {
            prop_assert!(nav.damp(a) < nav.damp(b));
        }
    }
}

proptest! {
    #[test]
    fn rightward_drag_at_first_card_never_commits(dx in 9f32..3000.0) {
        let deck = Deck::new(
            "prop",
            vec![Category::new("X")],
            (0..3).map(|i| Card::new(format!("c{i}"), "X", "Card")).collect(),
        )
        .expect("valid deck");
        let mut nav = navigator(&deck);
        let now = Instant::now();
        nav.gesture_start(0.0, 0.0, now);
        nav.gesture_move(dx, 0.0, now);
        prop_assert!(nav.live_offset() > 0.0 && nav.live_offset() < dx);
        let outcome = nav.gesture_end(dx, 0.0, now);
        prop_assert!(!matches!(outcome, Outcome::Committed { .. }), "expected no commit, got {:?}", outcome);
        prop_assert_eq!(nav.global_index(), 0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Axis lock stability
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn horizontal_lock_is_stable(
        lock_dx in 9f32..100.0,
        samples in prop::collection::vec((-500f32..500.0, -5000f32..5000.0), 1..20),
    ) {
        let mut interpreter = GestureInterpreter::new(8.0);
        interpreter.begin(0.0, 0.0);
        let locked = interpreter.update(lock_dx, 0.0);
        prop_assert_eq!(locked, GestureEvent::Drag { raw_offset: lock_dx });
        for (x, y) in samples {
            let event = interpreter.update(x, y);
            prop_assert_eq!(event, GestureEvent::Drag { raw_offset: x });
            prop_assert!(interpreter.suppresses_default_scroll());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Arbitrary input sequences
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn input_sequences_keep_invariants(
        deck in deck_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut nav = navigator(&deck);
        let mut now = Instant::now();
        for op in ops {
            let outcome = match op {
                Op::Key(key) => nav.key(key, now),
                Op::Jump(target) => nav.jump_to(target, now),
                Op::Category(c) => nav.jump_to_category(CategoryId(c), now),
                Op::Start(x, y) => nav.gesture_start(x, y, now),
                Op::Move(x, y) => nav.gesture_move(x, y, now),
                Op::End(x, y) => nav.gesture_end(x, y, now),
                Op::Wait(ms) => {
                    now += Duration::from_millis(ms);
                    nav.tick(now)
                }
            };

            prop_assert!(nav.global_index() < deck.len());
            if let Outcome::Committed { from, to } = outcome {
                prop_assert_ne!(from, to);
                prop_assert_eq!(nav.phase(), Phase::Settling);
            }
            if nav.phase() != Phase::Dragging {
                prop_assert!(nav.live_offset().abs() < f32::EPSILON);
            }
            prop_assert_eq!(nav.settle_deadline().is_some(), nav.phase() == Phase::Settling);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Cancel is independent of the offset history
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn release_inside_threshold_cancels(
        lock_dx in prop_oneof![-100f32..-9.0, 9f32..100.0],
        history in prop::collection::vec((-1000f32..1000.0, -500f32..500.0), 0..20),
        final_dx in -59.5f32..59.5,
    ) {
        let deck = Deck::new(
            "prop",
            vec![Category::new("X")],
            (0..5).map(|i| Card::new(format!("c{i}"), "X", "Card")).collect(),
        )
        .expect("valid deck");
        let mut nav = navigator(&deck);
        let now = Instant::now();
        nav.jump_to(2, now);
        let now = now + Duration::from_secs(1);
        nav.tick(now);

        let (x0, y0) = (300.0, 200.0);
        prop_assert_eq!(nav.gesture_start(x0, y0, now), Outcome::Tracking);
        prop_assert_eq!(nav.gesture_move(x0 + lock_dx, y0, now), Outcome::Tracking);
        for (dx, dy) in history {
            prop_assert_eq!(nav.gesture_move(x0 + dx, y0 + dy, now), Outcome::Tracking);
        }
        nav.gesture_move(x0 + final_dx, y0, now);
        let outcome = nav.gesture_end(x0 + final_dx, y0, now);

        prop_assert_eq!(outcome, Outcome::Cancelled);
        prop_assert_eq!(nav.global_index(), 2);
        prop_assert!(nav.live_offset().abs() < f32::EPSILON);
        prop_assert_eq!(nav.phase(), Phase::Settling);
    }
}
