use serde_json::json;

use super::*;

fn keys() -> ClubFieldKeys {
    ClubFieldKeys::default()
}

fn record(lat: Value, lon: Value, rating: Value) -> Value {
    json!({
        "Название": "Фитнес Плюс",
        "Адрес": "ул. Республики, 1",
        "Часы работы": "08:00-22:00",
        "Рейтинг": rating,
        "Координаты (lat)": lat,
        "Координаты (lon)": lon,
    })
}

// ---------------------------------------------------------------------------
// parse_number
// ---------------------------------------------------------------------------

#[test]
fn parse_number_accepts_json_numbers() {
    assert_eq!(parse_number(&json!(4.5)), Some(4.5));
    assert_eq!(parse_number(&json!(-12)), Some(-12.0));
}

#[test]
fn parse_number_accepts_numeric_strings() {
    assert_eq!(parse_number(&json!("57.15")), Some(57.15));
    assert_eq!(parse_number(&json!("  65.53 ")), Some(65.53));
    assert_eq!(parse_number(&json!("1e2")), Some(100.0));
}

#[test]
fn parse_number_accepts_decimal_comma() {
    assert_eq!(parse_number(&json!("4,5")), Some(4.5));
}

#[test]
fn parse_number_uses_leading_numeric_prefix() {
    assert_eq!(parse_number(&json!("4.5 stars")), Some(4.5));
    assert_eq!(parse_number(&json!("57.1.2")), Some(57.1));
    assert_eq!(parse_number(&json!("-3e")), Some(-3.0));
}

#[test]
fn parse_number_rejects_non_numeric() {
    assert_eq!(parse_number(&json!("")), None);
    assert_eq!(parse_number(&json!("   ")), None);
    assert_eq!(parse_number(&json!("n/a")), None);
    assert_eq!(parse_number(&json!("-")), None);
    assert_eq!(parse_number(&json!(null)), None);
    assert_eq!(parse_number(&json!(true)), None);
    assert_eq!(parse_number(&json!([1.0])), None);
}

#[test]
fn parse_number_rejects_non_finite_strings() {
    assert_eq!(parse_number(&json!("NaN")), None);
    assert_eq!(parse_number(&json!("inf")), None);
    assert_eq!(parse_number(&json!("Infinity")), None);
}

// ---------------------------------------------------------------------------
// RawClub::from_value
// ---------------------------------------------------------------------------

#[test]
fn raw_club_maps_backend_keys_to_canonical_fields() {
    let raw = RawClub::from_value(&record(json!("57.15"), json!(65.54), json!("4.5")), &keys())
        .expect("object record");
    assert_eq!(raw.name.as_deref(), Some("Фитнес Плюс"));
    assert_eq!(raw.address.as_deref(), Some("ул. Республики, 1"));
    assert_eq!(raw.opening_hours.as_deref(), Some("08:00-22:00"));
    assert_eq!(raw.latitude, Some(57.15));
    assert_eq!(raw.longitude, Some(65.54));
    assert_eq!(raw.rating, Some(4.5));
}

#[test]
fn raw_club_honours_custom_keys() {
    let keys = ClubFieldKeys {
        name: "title".into(),
        address: "addr".into(),
        opening_hours: "hours".into(),
        rating: "score".into(),
        latitude: "lat".into(),
        longitude: "lng".into(),
    };
    let value = json!({ "title": "Gym", "score": 3, "lat": 1, "lng": 2 });
    let raw = RawClub::from_value(&value, &keys).unwrap();
    assert_eq!(raw.name.as_deref(), Some("Gym"));
    assert_eq!(raw.rating, Some(3.0));
    assert_eq!(raw.latitude, Some(1.0));
    assert_eq!(raw.longitude, Some(2.0));
    assert!(raw.address.is_none());
}

#[test]
fn raw_club_is_none_for_non_objects() {
    assert!(RawClub::from_value(&json!([1, 2]), &keys()).is_none());
    assert!(RawClub::from_value(&json!("club"), &keys()).is_none());
}

// ---------------------------------------------------------------------------
// normalize_club / normalize_clubs
// ---------------------------------------------------------------------------

#[test]
fn normalize_club_builds_validated_club() {
    let value = record(json!("57.15"), json!("65.54"), json!("4.5"));
    let club = normalize_club(&value, &keys()).unwrap();
    assert_eq!(club.location, Coordinate::new(57.15, 65.54).unwrap());
    assert!((club.rating - 4.5).abs() < f64::EPSILON);
    assert_eq!(club.display_name(), "Фитнес Плюс");
    assert_eq!(club.raw, value);
}

#[test]
fn normalize_club_reports_first_missing_field() {
    let k = keys();
    assert_eq!(
        normalize_club(&record(json!(null), json!(1), json!(1)), &k),
        Err(RecordError::InvalidLatitude)
    );
    assert_eq!(
        normalize_club(&record(json!(1), json!("x"), json!(1)), &k),
        Err(RecordError::InvalidLongitude)
    );
    assert_eq!(
        normalize_club(&record(json!(1), json!(1), json!("")), &k),
        Err(RecordError::InvalidRating)
    );
    assert_eq!(
        normalize_club(&json!(42), &k),
        Err(RecordError::NotAnObject)
    );
}

#[test]
fn normalize_club_rejects_out_of_range_coordinates() {
    let err = normalize_club(&record(json!(91), json!(0), json!(4)), &keys()).unwrap_err();
    assert_eq!(err, RecordError::CoordinateOutOfRange);
}

#[test]
fn normalize_club_does_not_bound_rating() {
    let club = normalize_club(&record(json!(0), json!(0), json!(7.5)), &keys()).unwrap();
    assert!((club.rating - 7.5).abs() < f64::EPSILON);
}

#[test]
fn normalize_clubs_drops_invalid_records() {
    let bad = json!({ "Название": "No coords", "Рейтинг": "5" });
    assert!(normalize_clubs(&[bad], &keys()).is_empty());
}

#[test]
fn normalize_clubs_keeps_input_order() {
    let values = vec![
        record(json!(1), json!(1), json!(1)),
        json!({ "Название": "broken" }),
        record(json!(2), json!(2), json!(2)),
        json!("not a record"),
        record(json!(3), json!(3), json!(3)),
    ];
    let clubs = normalize_clubs(&values, &keys());
    let lats: Vec<f64> = clubs.iter().map(|c| c.location.lat).collect();
    assert_eq!(lats, vec![1.0, 2.0, 3.0]);
}

#[test]
fn missing_name_uses_placeholder() {
    let value = json!({ "Рейтинг": 4, "Координаты (lat)": 1, "Координаты (lon)": 1 });
    let club = normalize_club(&value, &keys()).unwrap();
    assert_eq!(club.display_name(), "(unnamed club)");
    assert!(club.address.is_none());
}
