use speed_threshold_core::{
    CalcError, Mode, SpeedInputs, SpeedRules, ValidationError, compute_speed_breakdown,
    compute_speed_threshold, parse_advance_value, total_action_value, total_advance_value,
};

const ZEROES: [&str; 6] = ["0"; 6];

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn action_value_is_linear_in_turns_for_every_mode() {
    for (mode, intercept) in [(Mode::StandardHall, 150), (Mode::AnomalyArbitration, 300)] {
        let mut previous = None;
        for turns in 1..=50_i64 {
            let value = total_action_value(mode, turns).unwrap();
            assert_eq!(value, intercept + 100 * (turns - 1));
            if let Some(prev) = previous {
                assert_eq!(value - prev, 100);
            }
            previous = Some(value);
        }
    }
}

#[test]
fn advance_normalization_table() {
    let cases = [("", 0.0), ("0", 0.0), ("24", 0.24), ("0.24", 0.24), ("-50", -0.5)];
    for (raw, expected) in cases {
        let value = parse_advance_value(raw).unwrap();
        assert!(close(value, expected), "{raw:?} -> {value}");
    }
    assert!(matches!(
        parse_advance_value("abc"),
        Err(CalcError::Parse { ref raw, .. }) if raw == "abc"
    ));
}

#[test]
fn advance_total_for_two_triggers_and_bonus() {
    let total = total_advance_value(2, true, &[0.0; 6]).unwrap();
    assert!(close(total, 9_000.0));
}

#[test]
fn end_to_end_thresholds_per_mode() {
    let standard = compute_speed_breakdown(2, Mode::StandardHall, 1, 0, false, &ZEROES).unwrap();
    assert_eq!(standard.action_value, 150);
    assert!(close(standard.advance_total, 0.0));
    assert_eq!(standard.threshold, 134);

    let anomaly =
        compute_speed_breakdown(2, Mode::AnomalyArbitration, 1, 0, false, &ZEROES).unwrap();
    assert_eq!(anomaly.action_value, 300);
    assert_eq!(anomaly.threshold, 67);
}

#[test]
fn boundary_inputs_fail_validation() {
    assert!(matches!(
        compute_speed_threshold(0, Mode::StandardHall, 1, 0, false, &ZEROES),
        Err(CalcError::Validation(ValidationError::TargetActionCount(0)))
    ));
    assert!(matches!(
        compute_speed_threshold(2, Mode::StandardHall, 1, 0, false, &["0"; 5]),
        Err(CalcError::Validation(ValidationError::CustomSlotCount { actual: 5, .. }))
    ));
    assert!(matches!(
        compute_speed_threshold(2, Mode::StandardHall, 0, 0, false, &ZEROES),
        Err(CalcError::Validation(ValidationError::TurnCount(0)))
    ));
    assert!(matches!(
        compute_speed_threshold(2, Mode::StandardHall, 1, -3, false, &ZEROES),
        Err(CalcError::Validation(ValidationError::NegativeTriggerCount(-3)))
    ));
}

#[test]
fn identical_inputs_give_identical_results() {
    let custom = ["12", "0.05", "", "-3", "0", "7.5"];
    let first = compute_speed_breakdown(3, Mode::AnomalyArbitration, 4, 2, true, &custom);
    let second = compute_speed_breakdown(3, Mode::AnomalyArbitration, 4, 2, true, &custom);
    assert_eq!(first, second);
}

#[test]
fn threshold_never_under_provisions() {
    let rules = SpeedRules::default();
    for target in 1..=5_i64 {
        for turns in 1..=5_i64 {
            for triggers in 0..=3_i64 {
                let inputs = SpeedInputs {
                    target_action_count: target,
                    mode: Mode::StandardHall,
                    turn_count: turns,
                    recurring_trigger_count: triggers,
                    one_time_bonus_present: false,
                    custom_advance_values: ZEROES.iter().map(ToString::to_string).collect(),
                };
                let b = rules.compute_breakdown(&inputs).unwrap();
                let speed = b.threshold as f64;
                let needed = 10_000.0 * target as f64 - b.advance_total;
                assert!(speed * b.action_value as f64 >= needed - 1e-6);
                assert!((speed - 1.0) * (b.action_value as f64) < needed);
            }
        }
    }
}
