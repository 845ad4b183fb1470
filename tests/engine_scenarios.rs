use gear_ratios::{
    GearStatus, PreferenceWindow, TeethFormatError, TeethInput, compute_from_raw,
    compute_gear_tables, parse, total_range_pct,
};
use serde_json::json;

const ROAD_11_28: [u32; 11] = [11, 12, 13, 14, 15, 17, 19, 21, 23, 25, 28];
const GRAVEL_11_42: [u32; 11] = [11, 13, 15, 17, 19, 21, 24, 28, 32, 36, 42];

#[test]
fn every_input_shape_normalizes_the_same() {
    let shapes = [
        TeethInput::from(vec![50, 34]),
        TeethInput::List(vec![json!("50"), json!("34")]),
        TeethInput::from("[50,34]"),
        TeethInput::from("50,34"),
        TeethInput::from("50, 34"),
    ];
    for shape in &shapes {
        assert_eq!(parse(shape).unwrap(), vec![50, 34], "{shape:?}");
    }
}

#[test]
fn fractional_teeth_are_invalid() {
    assert!(matches!(
        parse(&TeethInput::from("50.5")),
        Err(TeethFormatError::InvalidToken { .. })
    ));
    assert!(matches!(
        parse(&TeethInput::List(vec![json!(50.5)])),
        Err(TeethFormatError::InvalidToken { .. })
    ));
}

#[test]
fn compact_road_on_11_28() {
    let tables = compute_gear_tables(&[50, 34], &ROAD_11_28, None);
    let big_ring = &tables[0];
    assert_eq!(big_ring.front_tooth, 50);
    assert_eq!(big_ring.gears.first().unwrap().rear_tooth, 28);
    assert_eq!(big_ring.gears.first().unwrap().ratio, 1.786);
    assert_eq!(big_ring.gears.last().unwrap().rear_tooth, 11);
    assert_eq!(big_ring.gears.last().unwrap().ratio, 4.545);
}

#[test]
fn gravel_easiest_gear_is_a_warning() {
    let window = PreferenceWindow {
        min_ratio: 0.8,
        max_ratio: 3.2,
    };
    let tables = compute_gear_tables(&[40], &GRAVEL_11_42, Some(&window));
    let easiest = &tables[0].gears[0];
    assert_eq!(easiest.rear_tooth, 42);
    assert_eq!(easiest.ratio, 0.952);
    assert_eq!(easiest.status, Some(GearStatus::Warning));
}

#[test]
fn overall_range() {
    assert_eq!(total_range_pct(&[50, 34], &[11, 28]), 374);
    assert_eq!(total_range_pct(&[], &[11, 28]), 0);
    assert_eq!(total_range_pct(&[50], &[]), 0);
}

#[test]
fn shuffled_cassette_still_runs_easiest_to_hardest() {
    let shuffled = [19, 11, 28, 14, 23, 12, 17, 25, 13, 21, 15];
    let tables = compute_gear_tables(&[50], &shuffled, None);
    let rears: Vec<u32> = tables[0].gears.iter().map(|g| g.rear_tooth).collect();
    assert_eq!(rears, vec![28, 25, 23, 21, 19, 17, 15, 14, 13, 12, 11]);

    assert!(tables[0].gears[0].change_pct.is_none());
    assert!(tables[0].gears[1..].iter().all(|g| g.change_pct.is_some()));
}

#[test]
fn raw_convenience_entry_point() {
    let window = PreferenceWindow::default();
    let tables = compute_from_raw(
        &TeethInput::from("[53, 39]"),
        &TeethInput::from("11,12,13,14,16,18,20,22,25,28,32"),
        Some(&window),
    )
    .unwrap();
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[1].front_tooth, 39);
    // 39/32
    assert_eq!(tables[1].gears[0].ratio, 1.219);
    assert!(tables.iter().all(|t| t.gears.iter().all(|g| g.status.is_some())));

    assert!(compute_from_raw(&TeethInput::from("53, x"), &TeethInput::from("11"), None).is_err());
}

#[test]
fn empty_rear_gives_empty_tables() {
    let tables = compute_gear_tables(&[50, 34], &[], None);
    assert_eq!(tables.len(), 2);
    assert!(tables.iter().all(|t| t.gears.is_empty() && t.total_range == 0));
    assert!(compute_gear_tables(&[], &ROAD_11_28, None).is_empty());
}
