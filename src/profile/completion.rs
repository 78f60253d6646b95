// src/profile/completion.rs
//! Profile completion percentage

/// A field counts as filled unless it is missing, empty, or the literal "0"
pub fn is_filled(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty() && v != "0")
}

/// Share of filled fields as a whole percent, rounded half away from zero.
/// The denominator is the number of tracked fields, not the number present.
pub fn completion_percentage(fields: &[Option<&str>]) -> u8 {
    if fields.is_empty() {
        return 0;
    }

    let filled = fields.iter().filter(|f| is_filled(**f)).count();
    let percent = (filled as f64 / fields.len() as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}
