// JSON codec for the silhouette resource: an array of [x, y] pairs, each
// coordinate roughly within [-1, 1]

use crate::error::LoadError;
use crate::point::{point, Point2D};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct RawPoint(f64, f64);

/// Parses a point-set body. A `null` body counts as an absent list and yields
/// no points; anything else that is not a list of pairs is an error.
pub fn parse_point_set(body: &str) -> Result<Vec<Point2D>, LoadError> {
    let raw: Option<Vec<RawPoint>> = serde_json::from_str(body)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|RawPoint(x, y)| point(x, y))
        .collect())
}

/// Gate applied to a fetched response before its body is parsed.
pub fn points_from_response(status: u16, body: &str) -> Result<Vec<Point2D>, LoadError> {
    if !(200..300).contains(&status) {
        return Err(LoadError::Status(status));
    }
    parse_point_set(body)
}

pub fn to_json(points: &[Point2D]) -> Result<String, LoadError> {
    let raw: Vec<RawPoint> = points.iter().map(|p| RawPoint(p.x, p.y)).collect();
    Ok(serde_json::to_string(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs() {
        let points = parse_point_set("[[0, 0], [0.1, -0.25], [-0.5, 0.5]]").unwrap();
        assert_eq!(points, vec![point(0.0, 0.0), point(0.1, -0.25), point(-0.5, 0.5)]);
    }

    #[test]
    fn empty_and_null_bodies_give_no_points() {
        assert!(parse_point_set("[]").unwrap().is_empty());
        assert!(parse_point_set("null").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_bodies() {
        assert!(matches!(parse_point_set("{\"x\": 1}"), Err(LoadError::Parse(_))));
        assert!(matches!(parse_point_set("[[1, 2, 3]]"), Err(LoadError::Parse(_))));
        assert!(matches!(parse_point_set("<html>"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn non_success_status_is_rejected_before_parsing() {
        assert!(matches!(
            points_from_response(404, "[[0, 0]]"),
            Err(LoadError::Status(404))
        ));
        assert!(matches!(
            points_from_response(500, "not even json"),
            Err(LoadError::Status(500))
        ));
        assert_eq!(points_from_response(200, "[[0.5, 0.5]]").unwrap().len(), 1);
    }

    #[test]
    fn writes_pairs() {
        let json = to_json(&[point(0.25, -0.5)]).unwrap();
        assert_eq!(json, "[[0.25,-0.5]]");
    }
}
