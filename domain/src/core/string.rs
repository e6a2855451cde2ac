//! String utilities for the domain layer.

/// Format a backend number the way it reads in prose: whole values without a
/// fractional part, everything else with up to one decimal.
///
/// The recommendation backend rounds percentages to one decimal, so a value
/// like `87.0` is shown as `87` and `42.5` as `42.5`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

/// Lowercase and trim a user- or backend-supplied name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
