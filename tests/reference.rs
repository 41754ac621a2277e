use approx::assert_abs_diff_eq;
use thermocouple::{
    convert_temperature_to_voltage, convert_temperature_to_voltage_raw,
    convert_voltage_to_temperature, convert_voltage_to_temperature_raw, Correction, Direction,
    ThermocoupleType, CONVERSION_FAILED,
};

const DIRECTIONS: [Direction; 2] = [
    Direction::VoltageToTemperature,
    Direction::TemperatureToVoltage,
];

fn convert(tc: ThermocoupleType, direction: Direction, value: f64) -> f64 {
    match direction {
        Direction::VoltageToTemperature => convert_voltage_to_temperature(tc, value),
        Direction::TemperatureToVoltage => convert_temperature_to_voltage(tc, value),
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Domain coverage
// ═══════════════════════════════════════════════════════════════════

#[test]
fn every_segment_bound_converts() {
    for tc in ThermocoupleType::ALL {
        for direction in DIRECTIONS {
            for segment in tc.conversion(direction).table().segments() {
                for bound in [segment.min, segment.max] {
                    let result = convert(tc, direction, bound);
                    assert_ne!(result, CONVERSION_FAILED, "type {tc} {direction} at {bound}");
                    assert!(result.is_finite(), "type {tc} {direction} at {bound}");
                }
            }
        }
    }
}

#[test]
fn shared_bounds_use_lower_segment() {
    for tc in ThermocoupleType::ALL {
        for direction in DIRECTIONS {
            let conversion = tc.conversion(direction);
            for pair in conversion.table().segments().windows(2) {
                let bound = pair[0].max;
                let mut expected = pair[0].evaluate(bound);
                if let Some(correction) = conversion.correction() {
                    expected = correction.apply(bound, expected);
                }
                assert_eq!(convert(tc, direction, bound), expected, "type {tc} {direction}");
            }
        }
    }
}

#[test]
fn outside_domain_is_rejected() {
    for tc in ThermocoupleType::ALL {
        for direction in DIRECTIONS {
            let table = tc.conversion(direction).table();
            let below = table.min() - 1e-6;
            let above = table.max() + 1e-6;

            assert_eq!(convert(tc, direction, below), CONVERSION_FAILED, "type {tc} {direction}");
            assert_eq!(convert(tc, direction, above), CONVERSION_FAILED, "type {tc} {direction}");
            assert_eq!(
                convert(tc, direction, f64::INFINITY),
                CONVERSION_FAILED,
                "type {tc} {direction}"
            );
            assert_eq!(
                convert(tc, direction, f64::NEG_INFINITY),
                CONVERSION_FAILED,
                "type {tc} {direction}"
            );
        }
    }
}

#[test]
fn invalid_type_is_rejected() {
    for code in 8..=u8::MAX {
        for value in [-300.0, -5.0, 0.0, 5.0, 100.0, 1000.0] {
            assert_eq!(convert_voltage_to_temperature_raw(code, value), CONVERSION_FAILED);
            assert_eq!(convert_temperature_to_voltage_raw(code, value), CONVERSION_FAILED);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Reference values
// ═══════════════════════════════════════════════════════════════════

/// `(type, °C, mV)` from the NIST ITS-90 thermocouple tables.
const REFERENCE_POINTS: [(ThermocoupleType, f64, f64); 16] = [
    (ThermocoupleType::R, 1000.0, 10.506),
    (ThermocoupleType::R, 1500.0, 17.451),
    (ThermocoupleType::S, 1000.0, 9.587),
    (ThermocoupleType::S, 1500.0, 15.582),
    (ThermocoupleType::B, 1000.0, 4.834),
    (ThermocoupleType::B, 1500.0, 10.099),
    (ThermocoupleType::J, -100.0, -4.633),
    (ThermocoupleType::J, 100.0, 5.269),
    (ThermocoupleType::T, -100.0, -3.379),
    (ThermocoupleType::T, 100.0, 4.279),
    (ThermocoupleType::E, -100.0, -5.237),
    (ThermocoupleType::E, 100.0, 6.319),
    (ThermocoupleType::K, -100.0, -3.554),
    (ThermocoupleType::K, 100.0, 4.096),
    (ThermocoupleType::N, -100.0, -2.407),
    (ThermocoupleType::N, 100.0, 2.774),
];

#[test]
fn reference_voltages() {
    for (tc, celsius, millivolts) in REFERENCE_POINTS {
        let actual = convert_temperature_to_voltage(tc, celsius);
        assert!(
            (actual - millivolts).abs() <= 0.0006,
            "type {tc} at {celsius} °C: {actual} mV, expected {millivolts} mV"
        );
    }
}

#[test]
fn zero_at_the_reference_junction() {
    for tc in ThermocoupleType::ALL {
        if tc == ThermocoupleType::B {
            continue;
        }
        assert_abs_diff_eq!(convert_temperature_to_voltage(tc, 0.0), 0.0, epsilon = 1e-12);
    }
    for tc in [
        ThermocoupleType::J,
        ThermocoupleType::T,
        ThermocoupleType::E,
        ThermocoupleType::K,
        ThermocoupleType::N,
    ] {
        assert_abs_diff_eq!(convert_voltage_to_temperature(tc, 0.0), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn temperature_round_trip() {
    for (tc, celsius, _) in REFERENCE_POINTS {
        let millivolts = convert_temperature_to_voltage(tc, celsius);
        let back = convert_voltage_to_temperature(tc, millivolts);
        assert!(
            (back - celsius).abs() < 0.06,
            "type {tc} at {celsius} °C came back as {back} °C"
        );
    }
}

#[test]
fn voltage_round_trip() {
    for (tc, millivolts) in [
        (ThermocoupleType::K, 0.0),
        (ThermocoupleType::K, 17.85),
        (ThermocoupleType::K, 41.0),
        (ThermocoupleType::J, 30.0),
        (ThermocoupleType::R, 5.0),
        (ThermocoupleType::B, 8.0),
    ] {
        let celsius = convert_voltage_to_temperature(tc, millivolts);
        let back = convert_temperature_to_voltage(tc, celsius);
        assert_abs_diff_eq!(back, millivolts, epsilon = 0.005);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Type K exponential correction
// ═══════════════════════════════════════════════════════════════════

fn type_k() -> (&'static thermocouple::Conversion, Correction) {
    let conversion = ThermocoupleType::K.conversion(Direction::TemperatureToVoltage);
    let correction = *conversion.correction().unwrap();
    (conversion, correction)
}

fn plain_polynomial(celsius: f64) -> f64 {
    type_k().0.table().locate(celsius).unwrap().evaluate(celsius)
}

#[test]
fn correction_not_applied_at_or_below_zero() {
    for celsius in [0.0, -0.001, -50.0, -156.0, -270.5] {
        assert_eq!(
            convert_temperature_to_voltage(ThermocoupleType::K, celsius),
            plain_polynomial(celsius),
            "at {celsius} °C"
        );
    }
}

#[test]
fn correction_applied_above_zero() {
    let (_, correction) = type_k();
    for celsius in [0.001, 1.0, 100.0, 126.9686, 500.0, 1372.5] {
        let actual = convert_temperature_to_voltage(ThermocoupleType::K, celsius);
        let polynomial = plain_polynomial(celsius);
        let d = celsius - 126.9686;
        let expected_term = 0.1185976 * (-0.0001183432 * d * d).exp();

        assert!(correction.term(celsius) > 0.0, "at {celsius} °C");
        assert_abs_diff_eq!(actual - polynomial, expected_term, epsilon = 1e-12);
        assert_eq!(actual, polynomial + correction.term(celsius));
    }
}

#[test]
fn type_k_scenarios() {
    let celsius = convert_voltage_to_temperature(ThermocoupleType::K, 17.85);
    assert!(celsius.is_finite() && celsius != CONVERSION_FAILED);
    assert_abs_diff_eq!(celsius, 434.315, epsilon = 0.001);

    let millivolts = convert_temperature_to_voltage(ThermocoupleType::K, -156.0);
    assert!(millivolts.is_finite() && millivolts != CONVERSION_FAILED);
    assert_eq!(millivolts, plain_polynomial(-156.0));

    assert_eq!(
        convert_voltage_to_temperature(ThermocoupleType::K, 1000.0),
        CONVERSION_FAILED
    );
    assert_eq!(convert_temperature_to_voltage_raw(42, 100.0), CONVERSION_FAILED);
}
