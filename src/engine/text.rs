//! Approximate text metrics for the builtin Helvetica faces.
//!
//! printpdf's builtin fonts carry no advance-width tables, so centering
//! and wrapping use a per-character estimate derived from the standard
//! Helvetica AFM widths (units per 1000 em). Close enough for report
//! captions; not suitable for precise typography.

/// Advance width of one character in 1/1000 em units.
fn char_units(c: char) -> u32 {
    match c {
        'i' | 'j' | 'l' | '!' | '\'' | '|' | '.' | ',' | ':' | ';' => 222,
        'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '-' | ' ' | '/' => 333,
        'm' | 'M' | 'W' => 889,
        'w' => 722,
        'I' => 278,
        c if c.is_ascii_uppercase() => 667,
        c if c.is_ascii_digit() => 556,
        _ => 500,
    }
}

/// Estimated width of `text` in mm at `size` pt.
pub fn text_width_mm(text: &str, size: f32) -> f32 {
    let units: u32 = text.chars().map(char_units).sum();
    // units/1000 em * size pt, converted from pt to mm
    (units as f32 / 1000.0) * size * (25.4 / 72.0)
}

/// Greedy word wrap of `text` into lines no wider than `width` mm at
/// `size` pt. A word wider than the column gets a line of its own
/// rather than being split.
pub fn wrap_text(text: &str, width: f32, size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if text_width_mm(&candidate, size) <= width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
