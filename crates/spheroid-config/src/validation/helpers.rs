//! Shared range-validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` or not finite (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !value.is_finite() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` does not parse as a color.
pub(crate) fn validate_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if spheroid_common::Color::parse(value).is_none() {
        errors.push(format!(
            "{name} = {value:?} is not a color (#rrggbb, #rrggbbaa, or rgba(r,g,b,a))"
        ));
    }
}
