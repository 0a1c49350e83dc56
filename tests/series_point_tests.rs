use chrono::{TimeZone, Utc};
use livechart::core::SeriesPoint;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn decimal_quote_converts_to_price() {
    let time = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let price = Decimal::from_str("104.25").expect("decimal");

    let point = SeriesPoint::from_decimal(time, price).expect("convertible");
    assert_eq!(point.time, time);
    assert_eq!(point.price, 104.25);
}

#[test]
fn points_serialize_with_rfc3339_time() {
    let time = Utc.timestamp_opt(0, 0).unwrap();
    let json = serde_json::to_string(&SeriesPoint::new(time, 101.0)).expect("serialize");
    assert_eq!(json, r#"{"time":"1970-01-01T00:00:00Z","price":101.0}"#);
}
