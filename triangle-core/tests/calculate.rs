use approx::assert_abs_diff_eq;
use triangle_core::{
    Field, Lang, SolveError, TriangleInputs, calculate, format_display, localize, parse_field,
};

fn read(fields: [&str; 4]) -> TriangleInputs {
    TriangleInputs::new(
        parse_field(fields[0]),
        parse_field(fields[1]),
        parse_field(fields[2]),
        parse_field(fields[3]),
    )
}

#[test]
fn field_text_to_display_text() {
    let out = calculate(&read(["30", "", "", "10"])).expect("solvable");
    let shown: Vec<(Field, String)> = out
        .iter()
        .map(|d| (d.field, format_display(d.value)))
        .collect();
    assert_eq!(
        shown,
        vec![
            (Field::Opposite, "5.00".to_string()),
            (Field::Adjacent, "8.66".to_string()),
        ]
    );
}

#[test]
fn supplied_zero_angle_is_rejected_not_ignored() {
    let err = calculate(&read(["0", "5", "", ""])).unwrap_err();
    assert!(matches!(err, SolveError::InvalidAngleRange { .. }));
    assert_eq!(
        localize(&err, Lang::Es),
        "Error: El ángulo debe estar entre 0° y 90°"
    );
}

#[test]
fn single_value_asks_for_two() {
    let err = calculate(&read(["", "", "", "7"])).unwrap_err();
    assert_eq!(err, SolveError::WrongInputCount { found: 1 });
    assert_eq!(localize(&err, Lang::En), "Please enter exactly 2 known values.");
}

#[test]
fn outputs_serialize_with_field_keys() {
    let out = calculate(&read(["", "3", "4", ""])).expect("solvable");
    let json = serde_json::to_value(out).expect("serializable");
    assert_eq!(json["derived"][0]["field"], "hypotenuse");
    assert_eq!(json["derived"][1]["field"], "angle");
    assert_abs_diff_eq!(
        json["derived"][0]["value"].as_f64().unwrap(),
        5.0,
        epsilon = 1e-12
    );
}

#[test]
fn exact_tie_hypotenuse_rounds_up_for_display() {
    let out = calculate(&read(["", "0.375", "0.5", ""])).expect("solvable");
    assert_eq!(out.get(Field::Hypotenuse), Some(0.625));
    assert_eq!(format_display(0.625), "0.63");
    assert_eq!(format_display(out.get(Field::Hypotenuse).unwrap()), "0.63");
}

#[test]
fn very_large_sides_give_a_finite_leg() {
    let out = calculate(&read(["", "1e200", "", "2e200"])).expect("solvable");
    let adj = out.get(Field::Adjacent).unwrap();
    assert!(adj.is_finite(), "adjacent was {adj}");
    assert_eq!(format_display(out.get(Field::Angle).unwrap()), "30.00");
}
