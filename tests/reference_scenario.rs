//! Regression fixtures for the reference pair, plus constant-file loading.

use std::io::Write;

use mixdiff::domain::ModelConstants;
use mixdiff::io::{ConstantsSource, load_constants, read_constants_json, write_constants_json};
use mixdiff::models::{DiffusionModel, evaluate};

fn assert_rel(actual: f64, expected: f64, tol: f64) {
    let rel = ((actual - expected) / expected).abs();
    assert!(rel < tol, "actual={actual} expected={expected} rel={rel}");
}

#[test]
fn reference_scenario_xa_half_room_temperature() {
    let r = evaluate(&ModelConstants::reference(), 0.5, 298.15).unwrap();
    assert_rel(r.ln_dab, -11.175511572215445, 1e-9);
    assert_rel(r.dab, 1.4013189394832653e-5, 1e-9);
    assert_rel(r.relative_error, 5.362326276937243, 1e-7);
}

#[test]
fn additional_fixtures() {
    let m = DiffusionModel::default();
    let cases = [
        (0.25, 313.15, -11.211797673837426, 1.3513820251439063e-5, 1.6076710634516027),
        (0.9, 298.15, -10.684604775823152, 2.2894707770819103e-5, 72.14065993097071),
        (0.1, 350.0, -11.00158295204992, 1.667528371274226e-5, 25.378073028137294),
    ];
    for (xa, t, ln_dab, dab, err) in cases {
        let r = m.evaluate(xa, t).unwrap();
        assert_rel(r.ln_dab, ln_dab, 1e-9);
        assert_rel(r.dab, dab, 1e-9);
        assert_rel(r.relative_error, err, 1e-7);
    }
}

#[test]
fn swapping_interaction_parameters_changes_the_answer() {
    let c = ModelConstants::reference();
    let wrong = ModelConstants { a_ab: c.a_ba, a_ba: c.a_ab, ..c };
    let good = evaluate(&c, 0.5, 298.15).unwrap();
    let bad = evaluate(&wrong, 0.5, 298.15).unwrap();
    assert!((good.ln_dab - bad.ln_dab).abs() > 1e-3);
}

#[test]
fn constants_file_round_trip_and_evaluation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pair.json");

    let mut c = ModelConstants::reference();
    c.v_exp = 1.4013189394832653e-5;
    write_constants_json(&path, &c).unwrap();

    let loaded = load_constants(&ConstantsSource::Flag(path.clone())).unwrap();
    assert_eq!(loaded, c);

    // With V_exp set to the computed value the deviation is (near) zero.
    let r = DiffusionModel::new(loaded).evaluate(0.5, 298.15).unwrap();
    assert!(r.relative_error < 1e-6, "relative error {}", r.relative_error);
}

#[test]
fn constants_file_with_bad_values_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"V_exp":1.33e-5,"aBA":194.5302,"aAB":-10.7575,"lambda_A":1.127,
            "lambda_B":0.0,"qA":1.432,"qB":1.4,"D_AB":2.1e-5,"D_BA":2.67e-5}}"#
    )
    .unwrap();

    let err = read_constants_json(file.path()).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("lambda_B must be positive"), "{err}");
}

#[test]
fn constants_file_missing_key_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"V_exp":1.33e-5,"aBA":194.5302}}"#).unwrap();

    let err = read_constants_json(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Invalid constants JSON"), "{err}");
}
