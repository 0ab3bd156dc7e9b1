//! Number formatting shared by SVG attributes and tooltip text.

/// Round half towards positive infinity (`Math.round` semantics): `2.5 -> 3`, `-2.5 -> -2`.
pub(crate) fn js_round(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Format a number the way a browser prints it: integral values carry no
/// fractional part (`25`, not `25.0`), very large or very small magnitudes use
/// exponent notation with an explicit sign (`1e+21`, `1e-7`).
pub fn js_number(x: f64) -> String {
    if x.is_nan() { return "NaN".to_string() }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    if x == 0.0 { return "0".to_string() } // also catches -0

    let magnitude = x.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{x}");
    }

    let formatted = format!("{x:e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}

/// Path coordinates carry at most three decimal places.
pub(crate) fn fmt_coord(x: f64) -> String {
    js_number(js_round(x * 1000.0) / 1000.0)
}
