//! Level-string parsing.
//!
//! Survey elements carry their floor as a string: a single integer
//! (`"2"`) or an inclusive range (`"1;3"`) for elements that span floors,
//! such as stairwells and lift shafts.

/// Expand a level string into the set of floor indices it covers.
///
/// - `"2"` → `[2]`
/// - `"1;3"` → `[1, 2, 3]`
/// - anything else (non-numeric tokens, wrong token count, reversed
///   range) → empty, which excludes the element from per-level queries
pub fn parse_levels(level: &str) -> Vec<i32> {
    let tokens: Vec<&str> = level.split(';').map(str::trim).collect();

    match tokens.as_slice() {
        [single] => match single.parse::<i32>() {
            Ok(value) => vec![value],
            Err(_) => Vec::new(),
        },
        [start, end] => match (start.parse::<i32>(), end.parse::<i32>()) {
            (Ok(start), Ok(end)) => (start..=end).collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
