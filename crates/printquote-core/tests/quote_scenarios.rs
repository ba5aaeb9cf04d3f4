//! End-to-end quote scenarios: parameters in, document out.

use printquote_core::validation::validate_parameters;
use printquote_core::{engine, formatter, QuoteDocument, QuoteParameters};

fn params(total_units: f64, units_per_batch: f64) -> QuoteParameters {
    QuoteParameters {
        total_units,
        units_per_batch,
        ..QuoteParameters::default()
    }
}

#[test]
fn default_scenario_end_to_end() {
    let params = QuoteParameters::default();
    assert!(validate_parameters(&params).is_ok());

    let result = engine::compute(&params);
    assert_eq!(result.total_batches, 5.0);
    assert_eq!(result.total_print_time_hours, 15.0);
    assert!((result.price_per_unit - 15.6).abs() < 1e-9);

    let doc = QuoteDocument::new(&params, &result);
    let lines: Vec<&str> = doc.content.lines().collect();

    assert_eq!(lines[0], "3D PRINTING QUOTE");
    assert!(lines.contains(&"Total Units: 20"));
    assert!(lines.contains(&"Total Batches: 5"));
    assert!(lines.contains(&"Total Print Time: 15.0 hours"));
    assert!(lines.contains(&"Materials: $60.00"));
    assert!(lines.contains(&"Operator Time: $125.00"));
    assert!(lines.contains(&"Machine Depreciation: $75.00"));
    assert!(lines.contains(&"Subtotal: $260.00"));
    assert!(lines.contains(&"Markup (20%): $52.00"));
    assert!(lines.contains(&"TOTAL QUOTE: $312.00"));
    assert!(lines.contains(&"Price Per Unit: $15.60"));
}

#[test]
fn batch_rounding_table() {
    let cases = [
        (20.0, 4.0, 5.0),
        (21.0, 4.0, 6.0),
        (16.0, 4.0, 4.0),
        (1.0, 10.0, 1.0),
        (100.0, 1.0, 100.0),
    ];

    for (units, per_batch, expected) in cases {
        let p = params(units, per_batch);
        let result = engine::compute(&p);
        assert_eq!(result.total_batches, expected, "{} / {}", units, per_batch);
        assert!(result.total_batches * per_batch >= units);
    }
}

#[test]
fn every_interim_value_recomputes_from_scratch() {
    // Simulates a user typing "2", then "21" into the total units field
    let mut snapshot = QuoteParameters::default();
    let mut last = None;

    for units in [2.0, 21.0] {
        snapshot.total_units = units;
        last = Some(engine::compute(&snapshot));
    }

    let last = last.expect("two snapshots computed");
    assert_eq!(last, engine::compute(&params(21.0, 4.0)));
    assert_eq!(last.total_batches, 6.0);
}

#[test]
fn invalid_input_rejected_at_boundary_but_engine_degrades() {
    let p = params(20.0, 0.0);
    assert!(validate_parameters(&p).is_err());

    let result = engine::compute(&p);
    assert!(!result.is_finite());

    // Rendering a degenerate quote must not panic
    let text = formatter::render(&p, &result);
    assert!(text.contains("TOTAL QUOTE:"));
}

#[test]
fn huge_but_valid_amounts_never_print_as_infinity() {
    let p = QuoteParameters {
        material_cost_per_kg: 1e17,
        ..QuoteParameters::default()
    };
    assert!(validate_parameters(&p).is_ok());

    let result = engine::compute(&p);
    assert!(result.is_finite());

    let text = formatter::render(&p, &result);
    assert!(!text.contains('∞'));
    let total = text
        .lines()
        .find(|l| l.starts_with("TOTAL QUOTE: "))
        .expect("total line");
    assert!(total.starts_with("TOTAL QUOTE: $240,000,000,000,000,"));
    assert!(total.ends_with(".00"));
}
