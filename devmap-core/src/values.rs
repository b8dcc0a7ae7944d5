//! Custom value-list parsing.

use crate::config::{DeviceConfig, ValueSpec};

/// Separator between a value label and its numeric start point.
const START_POINT_SEP: &str = "||";

/// Parse a configured value list into labels and optional start points.
///
/// Each entry may carry a `label||start` annotation. Start points are
/// all-or-nothing: if every entry splits into exactly two parts and every
/// second part parses as a float, the result is `(labels, Some(points))`;
/// one malformed entry degrades the whole list to plain labels.
pub fn parse_value_list(values: &[String]) -> (Vec<String>, Option<Vec<f64>>) {
    let split: Vec<Vec<&str>> = values
        .iter()
        .map(|v| v.split(START_POINT_SEP).collect())
        .collect();

    if !split.iter().all(|parts| parts.len() == 2) {
        return (values.to_vec(), None);
    }

    let points: Option<Vec<f64>> = split
        .iter()
        .map(|parts| parts[1].trim().parse::<f64>().ok())
        .collect();

    match points {
        Some(points) => {
            let labels = split.iter().map(|parts| parts[0].to_string()).collect();
            (labels, Some(points))
        }
        None => {
            log::debug!("value list has a non-numeric start point, keeping labels as-is");
            (values.to_vec(), None)
        }
    }
}

/// Resolve the value list for a configured token.
///
/// An inline list is parsed directly; a scalar is treated as an alias
/// into the named value-list types. An absent token or a dangling alias
/// yields `None`.
pub fn lookup_values(config: &DeviceConfig, token: &str) -> Option<(Vec<String>, Option<Vec<f64>>)> {
    match config.values_for(token)? {
        ValueSpec::Inline(items) => Some(parse_value_list(items)),
        ValueSpec::Alias(alias) => match config.value_type(alias) {
            Some(items) => Some(parse_value_list(items)),
            None => {
                log::debug!("token '{token}' references unknown value type '{alias}'");
                None
            }
        },
    }
}
