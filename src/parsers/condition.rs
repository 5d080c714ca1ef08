use crate::models::Condition;

/// Resolve free-text grade input to a known grade code.
///
/// Input is upper-cased and stripped of all whitespace before an exact code match,
/// so `" lp "` and `"L P"` resolve to `LP`. Anything unrecognised is `NM`.
pub fn to_condition(raw: &str) -> Condition {
    let code: String = raw
        .to_uppercase()
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect();

    Condition::from_code(&code).unwrap_or_default()
}
