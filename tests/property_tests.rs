//! Property-based tests for the history container.
//!
//! These tests use proptest to verify invariants hold across
//! many randomly generated operation sequences.

use proptest::prelude::*;
use retrace::HistoryState;

/// One externally observable operation on the container.
#[derive(Clone, Debug)]
enum Op {
    Set(i32),
    Undo,
    Redo,
}

prop_compose! {
    fn arbitrary_op()(variant in 0..4u8, value in any::<i32>()) -> Op {
        match variant {
            0 | 1 => Op::Set(value),
            2 => Op::Undo,
            _ => Op::Redo,
        }
    }
}

fn op_sequences() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(arbitrary_op(), 0..40)
}

proptest! {
    #[test]
    fn index_stays_in_bounds(initial in any::<i32>(), ops in op_sequences()) {
        let mut hs = HistoryState::new(initial);

        for op in ops {
            match op {
                Op::Set(v) => hs.set_state(v),
                Op::Undo => { hs.undo(); }
                Op::Redo => { hs.redo(); }
            }
            prop_assert!(hs.index() < hs.len());
            prop_assert!(hs.len() >= 1);
        }
    }

    #[test]
    fn state_is_the_indexed_entry(initial in any::<i32>(), ops in op_sequences()) {
        let mut hs = HistoryState::new(initial);

        for op in ops {
            match op {
                Op::Set(v) => hs.set_state(v),
                Op::Undo => { hs.undo(); }
                Op::Redo => { hs.redo(); }
            }
            prop_assert_eq!(*hs.state(), hs.history()[hs.index()]);
        }
    }

    #[test]
    fn capability_matches_position(initial in any::<i32>(), ops in op_sequences()) {
        let mut hs = HistoryState::new(initial);

        for op in ops {
            match op {
                Op::Set(v) => hs.set_state(v),
                Op::Undo => {
                    let could = hs.can_undo();
                    prop_assert_eq!(hs.undo().is_some(), could);
                }
                Op::Redo => {
                    let could = hs.can_redo();
                    prop_assert_eq!(hs.redo().is_some(), could);
                }
            }
            prop_assert_eq!(hs.can_undo(), hs.index() > 0);
            prop_assert_eq!(hs.can_redo(), hs.index() + 1 < hs.len());
        }
    }

    #[test]
    fn writes_truncate_then_append(initial in any::<i32>(), ops in op_sequences()) {
        let mut hs = HistoryState::new(initial);

        for op in ops {
            match op {
                Op::Set(v) => {
                    let retained = hs.history()[..=hs.index()].to_vec();
                    hs.set_state(v);

                    let mut expected = retained;
                    expected.push(v);
                    prop_assert_eq!(hs.history(), expected.as_slice());
                    prop_assert_eq!(hs.index(), hs.len() - 1);
                    prop_assert!(!hs.can_redo());
                }
                Op::Undo => { hs.undo(); }
                Op::Redo => { hs.redo(); }
            }
        }
    }

    #[test]
    fn undo_then_redo_is_identity(initial in any::<i32>(), writes in prop::collection::vec(any::<i32>(), 1..10)) {
        let mut hs = HistoryState::new(initial);
        for v in writes {
            hs.set_state(v);
        }

        let before = hs.clone();
        hs.undo();
        hs.redo();
        prop_assert_eq!(hs, before);
    }

    #[test]
    fn full_rewind_reaches_the_initial_value(initial in any::<i32>(), writes in prop::collection::vec(any::<i32>(), 0..10)) {
        let mut hs = HistoryState::new(initial);
        for v in &writes {
            hs.set_state(*v);
        }

        let mut steps = 0;
        while hs.undo().is_some() {
            steps += 1;
        }

        prop_assert_eq!(steps, writes.len());
        prop_assert_eq!(*hs.state(), initial);
        prop_assert_eq!(hs.index(), 0);
    }

    #[test]
    fn pure_transitions_agree_with_imperative_ones(initial in any::<i32>(), ops in op_sequences()) {
        let mut imperative = HistoryState::new(initial);
        let mut pure = HistoryState::new(initial);

        for op in ops {
            match op {
                Op::Set(v) => {
                    let next = pure.record(v);
                    imperative.set_state(v);
                    pure = next;
                }
                Op::Undo => {
                    let next = pure.undone();
                    prop_assert_eq!(imperative.undo().is_some(), next.is_some());
                    if let Some(next) = next {
                        pure = next;
                    }
                }
                Op::Redo => {
                    let next = pure.redone();
                    prop_assert_eq!(imperative.redo().is_some(), next.is_some());
                    if let Some(next) = next {
                        pure = next;
                    }
                }
            }
            prop_assert_eq!(&pure, &imperative);
        }
    }

    #[test]
    fn record_leaves_its_input_untouched(initial in any::<i32>(), value in any::<i32>()) {
        let base = HistoryState::new(initial);
        let snapshot = base.clone();

        let _ = base.record(value);
        prop_assert_eq!(base, snapshot);
    }
}
