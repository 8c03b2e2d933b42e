//! Property tests for bounded values.
//!
//! Checks that hold for any range and any sequence of mutations:
//! - Every mutation leaves `value` and `original` inside `[min, max]`
//! - Canonical JSON round-trips losslessly
//! - Reset is idempotent
//! - Fill and floor land on the bounds

use proptest::prelude::*;
use rpg_core::math::is_clamped;
use rpg_core::{BoundedValue, Clock, Counter, WireFormat, wire};

#[derive(Clone, Debug)]
enum Op {
    Increment,
    Decrement,
    Add(i64),
    Remove(i64),
    SetStep(i64),
    SetValue(i64),
    SetOriginal(i64),
    SetMin(i64),
    SetMax(i64),
    Fill,
    Floor,
    Empty,
    Reset,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Increment),
        Just(Op::Decrement),
        (-500i64..500).prop_map(Op::Add),
        (-500i64..500).prop_map(Op::Remove),
        (-20i64..20).prop_map(Op::SetStep),
        any::<i64>().prop_map(Op::SetValue),
        any::<i64>().prop_map(Op::SetOriginal),
        (-200i64..200).prop_map(Op::SetMin),
        (-200i64..200).prop_map(Op::SetMax),
        Just(Op::Fill),
        Just(Op::Floor),
        Just(Op::Empty),
        Just(Op::Reset),
    ]
}

fn bounded_strategy() -> impl Strategy<Value = BoundedValue> {
    (-100i64..100, 1i64..200, any::<i64>(), -10i64..10).prop_map(|(min, span, start, step)| {
        BoundedValue::bounded(min, min + span)
            .expect("span is positive")
            .with_value(start)
            .with_step(step)
    })
}

fn apply(v: &mut BoundedValue, op: &Op) {
    match *op {
        Op::Increment => v.increment(),
        Op::Decrement => v.decrement(),
        Op::Add(n) => v.add(n),
        Op::Remove(n) => v.remove(n),
        Op::SetStep(n) => v.set_step(n),
        Op::SetValue(n) => v.set_value(n),
        Op::SetOriginal(n) => v.set_original(n),
        Op::SetMin(n) => v.set_min(n),
        Op::SetMax(n) => v.set_max(n),
        Op::Fill => v.fill(),
        Op::Floor => v.floor(),
        Op::Empty => v.empty(),
        Op::Reset => v.reset(),
    }
}

fn assert_in_range(v: &BoundedValue) {
    match v.max() {
        Some(max) => {
            assert!(max > v.min(), "range collapsed: {v:?}");
            assert!(is_clamped(v.value(), v.min(), max), "value escaped: {v:?}");
            assert!(is_clamped(v.original(), v.min(), max), "original escaped: {v:?}");
        }
        None => {
            assert!(v.value() >= v.min(), "value below floor: {v:?}");
            assert!(v.original() >= v.min(), "original below floor: {v:?}");
        }
    }
}

proptest! {
    #[test]
    fn mutations_keep_values_in_range(
        mut v in bounded_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        for op in &ops {
            apply(&mut v, op);
            assert_in_range(&v);
        }
    }

    #[test]
    fn unbounded_mutations_respect_floor(
        min in -100i64..100,
        start in any::<i64>(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut v = BoundedValue::unbounded(min).with_value(start);
        for op in ops.iter().filter(|op| !matches!(op, Op::SetMax(_))) {
            apply(&mut v, op);
            assert_in_range(&v);
            prop_assert!(v.max().is_none());
        }
    }

    #[test]
    fn canonical_json_round_trips(
        mut v in bounded_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..10),
    ) {
        for op in &ops {
            apply(&mut v, op);
        }
        let text = v.to_json().unwrap();
        prop_assert_eq!(BoundedValue::from_json(&text).unwrap(), v);
        prop_assert_eq!(wire::decode(&text).unwrap(), (v, WireFormat::Canonical));
    }

    #[test]
    fn reset_is_idempotent(mut v in bounded_strategy(), delta in -500i64..500) {
        v.add(delta);
        v.reset();
        let once = v;
        v.reset();
        prop_assert_eq!(v, once);
    }

    #[test]
    fn fill_and_floor_land_on_bounds(mut v in bounded_strategy()) {
        v.fill();
        prop_assert!(v.is_full());
        v.floor();
        prop_assert!(v.is_at_min());
    }

    #[test]
    fn clock_ticks_stay_on_the_dial(
        steps in 1i64..20,
        moves in prop::collection::vec(-30i64..30, 0..30),
    ) {
        let mut clock = Clock::new(steps).unwrap();
        for m in moves {
            clock.add(m);
            prop_assert!(is_clamped(clock.value(), 0, steps));
        }
        let back = Clock::from_json(&clock.to_json().unwrap()).unwrap();
        prop_assert_eq!(back, clock);
    }

    #[test]
    fn counters_never_go_negative(
        start in any::<i64>(),
        moves in prop::collection::vec(-1_000i64..1_000, 0..30),
    ) {
        let mut counter = Counter::with_value(start);
        for m in moves {
            counter.remove(m);
            prop_assert!(counter.value() >= 0);
        }
    }
}

#[test]
fn signed_and_unsigned_clamping_examples() {
    let mut v = BoundedValue::bounded(-4, 4).unwrap();
    v.add(10);
    assert_eq!(v.value(), 4);
    v.remove(20);
    assert_eq!(v.value(), -4);

    let mut u = BoundedValue::unsigned(4).unwrap().with_value(3);
    u.add(3);
    assert_eq!(u.value(), 4);
    u.remove(10);
    assert_eq!(u.value(), 0);
}
