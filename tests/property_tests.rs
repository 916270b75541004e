//! Property-based tests for the state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated operation sequences.

use proptest::prelude::*;
use waypoint::{fsm_config, Configuration, MachineError, StateId, StateMachine};

const STATES: [&str; 4] = ["normal", "busy", "hungry", "sleeping"];
const EVENTS: [&str; 6] = ["study", "get_tired", "get_hungry", "eat", "get_up", "fly"];

fn routine() -> Configuration {
    fsm_config! {
        initial: normal,
        normal { study => busy },
        busy { get_tired => sleeping, get_hungry => hungry },
        hungry { eat => normal },
        sleeping { get_hungry => hungry, get_up => normal },
    }
    .unwrap()
}

#[derive(Clone, Debug)]
enum Op {
    Change(String),
    Trigger(String),
    Reset,
    Undo,
    Redo,
    Clear,
}

fn arbitrary_name() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(STATES.to_vec()).prop_map(str::to_string),
        "[a-z]{1,8}",
    ]
}

prop_compose! {
    fn arbitrary_event()(event in prop::sample::select(EVENTS.to_vec())) -> String {
        event.to_string()
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_name().prop_map(Op::Change),
        arbitrary_event().prop_map(Op::Trigger),
        Just(Op::Reset),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::Clear),
    ]
}

fn apply(machine: &mut StateMachine, op: &Op) {
    match op {
        Op::Change(state) => {
            let _ = machine.change_state(state);
        }
        Op::Trigger(event) => {
            let _ = machine.trigger(event);
        }
        Op::Reset => {
            let _ = machine.reset();
        }
        Op::Undo => {
            machine.undo();
        }
        Op::Redo => {
            machine.redo();
        }
        Op::Clear => machine.clear_history(),
    }
}

fn machine_after(ops: &[Op]) -> StateMachine {
    let mut machine = StateMachine::new(routine()).unwrap();
    for op in ops {
        apply(&mut machine, op);
    }
    machine
}

proptest! {
    #[test]
    fn history_always_starts_with_sentinel(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let machine = machine_after(&ops);
        prop_assert_eq!(machine.history().forward()[0].as_str(), "normal");
    }

    #[test]
    fn undeclared_state_is_rejected_without_change(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        name in "[a-z]{1,8}",
    ) {
        prop_assume!(!STATES.contains(&name.as_str()));
        let mut machine = machine_after(&ops);
        let before = machine.state().clone();
        let history = machine.history().clone();

        let result = machine.change_state(&name);

        prop_assert_eq!(result, Err(MachineError::InvalidState { state: StateId::from(name) }));
        prop_assert_eq!(machine.state(), &before);
        prop_assert_eq!(machine.history(), &history);
    }

    #[test]
    fn unhandled_event_is_rejected_without_change(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        event in arbitrary_event(),
    ) {
        let mut machine = machine_after(&ops);
        let handled = machine
            .configuration()
            .state(machine.state().as_str())
            .map(|definition| definition.handles(&event))
            .unwrap_or(false);
        prop_assume!(!handled);
        let before = machine.state().clone();

        let result = machine.trigger(&event);

        let is_invalid_event = matches!(result, Err(MachineError::InvalidEvent { .. }));
        prop_assert!(is_invalid_event);
        prop_assert_eq!(machine.state(), &before);
    }

    #[test]
    fn change_state_then_undo_restores_previous(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        target in prop::sample::select(STATES.to_vec()),
    ) {
        let mut machine = machine_after(&ops);
        let before = machine.state().clone();

        machine.change_state(target).unwrap();
        prop_assert_eq!(machine.state(), target);
        prop_assert!(!machine.redo());

        prop_assert!(machine.undo());
        // Right after a clear the seed entry is the sentinel, not `before`.
        if machine.history().forward().len() > 1 {
            prop_assert_eq!(machine.state(), &before);
        } else {
            prop_assert_eq!(machine.state().as_str(), "normal");
        }
    }

    #[test]
    fn undo_then_redo_is_identity(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = machine_after(&ops);
        let before = machine.state().clone();
        let history = machine.history().clone();

        if machine.undo() {
            prop_assert!(machine.redo());
            prop_assert_eq!(machine.state(), &before);
            prop_assert_eq!(machine.history(), &history);
        } else {
            prop_assert_eq!(machine.state(), &before);
        }
    }

    #[test]
    fn clear_history_disables_undo_and_redo(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = machine_after(&ops);
        let before = machine.state().clone();

        machine.clear_history();

        prop_assert!(!machine.undo());
        prop_assert!(!machine.redo());
        prop_assert_eq!(machine.state(), &before);
    }

    #[test]
    fn states_filter_matches_declared_transitions(event in arbitrary_event()) {
        let machine = StateMachine::new(routine()).unwrap();
        let expected: Vec<StateId> = machine
            .configuration()
            .states()
            .iter()
            .filter(|(_, definition)| definition.handles(&event))
            .map(|(state, _)| state.clone())
            .collect();

        prop_assert_eq!(machine.states(Some(event.as_str())), expected);
    }
}
