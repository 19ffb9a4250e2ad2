use geo::EuclideanDistance;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::ContractError;

/// Average vehicle speed assumed when the caller does not supply one
pub const DEFAULT_AVG_SPEED_KMH: f64 = 50.0;

/// Decimal places kept by [`format_coordinates`]
const COORDINATE_PRECISION: i32 = 6;

/// Planar point; no coordinate reference system is implied
///
/// Accepted JSON shapes: `[x, y, ...]` (extra components ignored),
/// `{"x": .., "y": ..}`, `{"latitude": .., "longitude": ..}` and
/// `{"lat": .., "lng": ..}`. Latitude maps to `y`, longitude to `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        geo::Point::from(*self).euclidean_distance(&geo::Point::from(*other))
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(p: Point) -> Self {
        geo::Point::new(p.x, p.y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = ContractError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        match components {
            [x, y, ..] if x.is_finite() && y.is_finite() => Ok(Point::new(*x, *y)),
            [_, _, ..] => Err(ContractError::invalid("point components must be finite numbers")),
            _ => Err(ContractError::invalid(format!(
                "point needs 2 components, got {}",
                components.len()
            ))),
        }
    }
}

impl TryFrom<Value> for Point {
    type Error = ContractError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Point::try_from(&value)
    }
}

impl TryFrom<&Value> for Point {
    type Error = ContractError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => {
                let components = items
                    .iter()
                    .map(|item| {
                        item.as_f64().ok_or_else(|| {
                            ContractError::invalid("point components must be numeric")
                        })
                    })
                    .collect::<Result<Vec<f64>, _>>()?;
                Point::try_from(components.as_slice())
            }
            Value::Object(map) => {
                let pick = |a: &str, b: &str| map.get(a).or_else(|| map.get(b));
                if let (Some(x), Some(y)) = (map.get("x"), map.get("y")) {
                    return Ok(Point::new(coerce_number(x)?, coerce_number(y)?));
                }
                match (pick("longitude", "lng"), pick("latitude", "lat")) {
                    (Some(lng), Some(lat)) => {
                        Ok(Point::new(coerce_number(lng)?, coerce_number(lat)?))
                    }
                    _ => Err(ContractError::invalid(
                        "point object needs x/y or latitude/longitude",
                    )),
                }
            }
            other => Err(ContractError::invalid(format!("not a point: {}", other))),
        }
    }
}

/// Latitude/longitude pair rounded to six decimal places
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ContractError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ContractError::invalid("coordinates must be finite numbers"));
        }
        Ok(Self {
            latitude: round_to(latitude, COORDINATE_PRECISION),
            longitude: round_to(longitude, COORDINATE_PRECISION),
        })
    }
}

/// Round half away from zero to `places` decimal places
#[inline]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Coerce a JSON number or numeric string into a finite `f64`
///
/// Booleans and `null` are rejected rather than treated as 0/1.
pub fn coerce_number(value: &Value) -> Result<f64, ContractError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(ContractError::invalid(format!("cannot convert {} to a number", value))),
    }
}

/// Euclidean distance between two points given as coordinate slices
///
/// Each slice needs at least two finite components; extra components are
/// ignored.
pub fn distance(p1: &[f64], p2: &[f64]) -> Result<f64, ContractError> {
    let a = Point::try_from(p1)?;
    let b = Point::try_from(p2)?;
    Ok(a.distance_to(&b))
}

/// Travel time in minutes, rounded to two decimals
///
/// Non-positive distances mean no travel and return 0. The speed must be a
/// positive finite number.
pub fn estimate_time(distance_km: f64, avg_speed_kmh: f64) -> Result<f64, ContractError> {
    if !avg_speed_kmh.is_finite() || avg_speed_kmh <= 0.0 {
        return Err(ContractError::invalid(format!(
            "average speed must be positive, got {}",
            avg_speed_kmh
        )));
    }
    if distance_km.is_nan() {
        return Err(ContractError::invalid("distance is not a number"));
    }
    if distance_km <= 0.0 {
        return Ok(0.0);
    }

    let hours = distance_km / avg_speed_kmh;
    Ok(round_to(hours * 60.0, 2))
}

/// Normalize a latitude/longitude pair supplied as numbers or strings
pub fn format_coordinates(lat: &Value, lng: &Value) -> Result<Coordinates, ContractError> {
    Coordinates::new(coerce_number(lat)?, coerce_number(lng)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_distance_pythagorean() {
        assert_eq!(distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap(), 5.0);
    }

    #[test]
    fn test_distance_short_point() {
        let err = distance(&[1.0], &[3.0, 4.0]).unwrap_err();
        assert!(matches!(err, ContractError::InvalidInput(_)));
    }

    #[test]
    fn test_distance_ignores_extra_components() {
        assert_eq!(distance(&[0.0, 0.0, 9.0], &[0.0, 2.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_estimate_time() {
        assert_eq!(estimate_time(0.0, DEFAULT_AVG_SPEED_KMH).unwrap(), 0.0);
        assert_eq!(estimate_time(-10.0, DEFAULT_AVG_SPEED_KMH).unwrap(), 0.0);
        assert_eq!(estimate_time(100.0, 50.0).unwrap(), 120.0);
        assert_eq!(estimate_time(10.0, 30.0).unwrap(), 20.0);
        assert_eq!(estimate_time(1.0, 7.0).unwrap(), 8.57);
    }

    #[test]
    fn test_estimate_time_rejects_bad_speed() {
        assert!(estimate_time(10.0, 0.0).is_err());
        assert!(estimate_time(10.0, -5.0).is_err());
        assert!(estimate_time(10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_format_coordinates_from_strings() {
        let coords = format_coordinates(&json!("40.7128"), &json!("-74.0060")).unwrap();
        assert_eq!(coords, Coordinates { latitude: 40.7128, longitude: -74.006 });
    }

    #[test]
    fn test_format_coordinates_rounds() {
        let coords = format_coordinates(&json!(1.23456789), &json!(-9.8765432)).unwrap();
        assert_eq!(coords.latitude, 1.234568);
        assert_eq!(coords.longitude, -9.876543);
    }

    #[test]
    fn test_format_coordinates_rejects_non_numeric() {
        assert!(format_coordinates(&json!("north"), &json!(1.0)).is_err());
        assert!(format_coordinates(&json!(1.0), &json!(null)).is_err());
        assert!(format_coordinates(&json!(true), &json!(1.0)).is_err());
    }

    #[test]
    fn test_point_shapes() {
        let from_array: Point = serde_json::from_value(json!([1.0, 2.0])).unwrap();
        let from_xy: Point = serde_json::from_value(json!({ "x": 1, "y": 2 })).unwrap();
        let from_latlng: Point =
            serde_json::from_value(json!({ "latitude": 2.0, "longitude": "1.0" })).unwrap();
        assert_eq!(from_array, Point::new(1.0, 2.0));
        assert_eq!(from_xy, from_array);
        assert_eq!(from_latlng, from_array);
        assert!(serde_json::from_value::<Point>(json!([1.0])).is_err());
        assert!(serde_json::from_value::<Point>(json!("1,2")).is_err());
    }

    #[test]
    fn test_point_serializes_as_pair() {
        let value = serde_json::to_value(Point::new(3.0, 4.0)).unwrap();
        assert_eq!(value, json!([3.0, 4.0]));
    }
}
