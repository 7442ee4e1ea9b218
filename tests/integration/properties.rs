//! Property tests for the guarded-call invariants using proptest

use proptest::prelude::*;

use panicgate::{try_execute, try_execute_capture, Fault};

/// Strategy for panic messages
fn message_strategy() -> impl Strategy<Value = String> {
    "[ -~]{1,40}"
}

/// Strategy for metadata keys and values
fn metadata_pair_strategy() -> impl Strategy<Value = (String, String)> {
    ("[a-z_]{1,12}", "[ -~]{0,20}")
}

proptest! {
    #[test]
    fn prop_returning_procedures_succeed(value in any::<i64>()) {
        let mut slot = None;
        prop_assert!(try_execute(|| { let _ = value; }), "try_execute should succeed");
        prop_assert!(try_execute_capture(|| { let _ = value; }, &mut slot), "try_execute_capture should succeed");
        prop_assert!(slot.is_none());
    }

    #[test]
    fn prop_raising_procedures_fail_with_the_message(message in message_strategy()) {
        let mut slot = None;
        let raising = message.clone();

        prop_assert!(!try_execute_capture(move || panic!("{}", raising), &mut slot), "raising procedure should fail");

        let error = slot.unwrap();
        prop_assert_eq!(error.reason(), message.as_str());
        prop_assert!(!error.reason().is_empty());
    }

    #[test]
    fn prop_deterministic_raises_are_idempotent(message in message_strategy()) {
        let capture = |msg: String| {
            let mut slot = None;
            try_execute_capture(move || panic!("{}", msg), &mut slot);
            slot.unwrap()
        };

        prop_assert_eq!(capture(message.clone()), capture(message));
    }

    #[test]
    fn prop_fault_metadata_round_trips((key, value) in metadata_pair_strategy()) {
        let mut slot = None;
        let (k, v) = (key.clone(), value.clone());

        let ok = try_execute_capture(
            move || Fault::new("Prop").with(k, v).raise(),
            &mut slot,
        );

        prop_assert!(!ok);
        let captured = slot.unwrap();
        prop_assert_eq!(captured.metadata().get(&key), Some(&value));
    }
}
