//! Delimited point files.
//!
//! Each row is `id<delim>x<delim>y`. The delimiter is detected from the
//! first line, trying comma, space, tab and semicolon in that order.

use std::fs;
use std::path::Path;

use crate::error::{Result, TspError};
use crate::models::Point;

const DELIMITERS: [char; 4] = [',', ' ', '\t', ';'];

/// Detects the field delimiter from the first line of `text`.
///
/// # Errors
///
/// Returns [`TspError::Parse`] if no known delimiter occurs on the first line.
pub fn detect_delimiter(text: &str) -> Result<char> {
    let first = text.lines().next().unwrap_or_default();
    DELIMITERS
        .iter()
        .copied()
        .find(|&d| first.contains(d))
        .ok_or_else(|| TspError::parse(1, "no common delimiter (',', ' ', tab, ';') found"))
}

/// Parses up to `limit` points from delimited text.
///
/// Blank lines are skipped. Consecutive delimiters are treated as one, so
/// space-aligned columns parse as expected.
///
/// # Examples
///
/// ```
/// use u_tsp::io::parse_points;
///
/// let text = "1,48.85,2.35\n2,51.50,-0.12\n3,40.71,-74.00\n";
/// let points = parse_points(text, 2).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].id(), 2);
/// assert_eq!(points[1].y(), -0.12);
/// ```
pub fn parse_points(text: &str, limit: usize) -> Result<Vec<Point>> {
    let delimiter = detect_delimiter(text)?;
    let mut points = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if points.len() >= limit {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        points.push(parse_row(line, delimiter, idx + 1)?);
    }
    Ok(points)
}

/// Reads and parses up to `limit` points from the file at `path`.
pub fn read_points(path: impl AsRef<Path>, limit: usize) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let points = parse_points(&text, limit)?;
    log::debug!("io: read {} points from {}", points.len(), path.display());
    Ok(points)
}

fn parse_row(line: &str, delimiter: char, line_no: usize) -> Result<Point> {
    let mut fields = line
        .split(delimiter)
        .map(str::trim)
        .filter(|f| !f.is_empty());
    let mut next = |name: &str| {
        fields
            .next()
            .ok_or_else(|| TspError::parse(line_no, format!("missing {name}")))
    };

    let id_s = next("id")?;
    let x_s = next("x coordinate")?;
    let y_s = next("y coordinate")?;

    let id = id_s
        .parse::<usize>()
        .map_err(|e| TspError::parse(line_no, format!("invalid id {id_s:?}: {e}")))?;
    let x = x_s
        .parse::<f64>()
        .map_err(|e| TspError::parse(line_no, format!("invalid x {x_s:?}: {e}")))?;
    let y = y_s
        .parse::<f64>()
        .map_err(|e| TspError::parse(line_no, format!("invalid y {y_s:?}: {e}")))?;
    Ok(Point::new(id, x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_priority() {
        assert_eq!(detect_delimiter("1,2 3").expect("found"), ',');
        assert_eq!(detect_delimiter("1 2 3").expect("found"), ' ');
        assert_eq!(detect_delimiter("1\t2\t3").expect("found"), '\t');
        assert_eq!(detect_delimiter("1;2;3").expect("found"), ';');
    }

    #[test]
    fn test_detect_delimiter_missing() {
        assert!(matches!(
            detect_delimiter("123"),
            Err(TspError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_space_aligned() {
        let text = "1  10.5   20.25\n2  11.0   21.0\n";
        let points = parse_points(text, 10).expect("parse");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Point::new(1, 10.5, 20.25));
    }

    #[test]
    fn test_parse_semicolon_and_blank_lines() {
        let text = "7;1.0;2.0\n\n8;3.0;4.0\n";
        let points = parse_points(text, 10).expect("parse");
        assert_eq!(points, vec![Point::new(7, 1.0, 2.0), Point::new(8, 3.0, 4.0)]);
    }

    #[test]
    fn test_parse_respects_limit() {
        let text = "1,0,0\n2,1,1\n3,2,2\nnot,a,row\n";
        let points = parse_points(text, 3).expect("limit stops before bad row");
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_parse_error_line_number() {
        let text = "1,0,0\n2,abc,1\n";
        match parse_points(text, 10) {
            Err(TspError::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("invalid x"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_missing_field() {
        assert!(matches!(
            parse_points("1,2\n", 10),
            Err(TspError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_read_points_missing_file() {
        let result = read_points("/nonexistent/u-tsp/points.csv", 5);
        assert!(matches!(result, Err(TspError::Io(_))));
    }
}
