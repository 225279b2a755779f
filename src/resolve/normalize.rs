//! Raw value normalization.

use palette::Srgb;

use crate::types::{Literal, RawLiteral, ResolvedKind, RgbaColor, TokenPath};

/// Convert a raw export literal into its canonical form.
///
/// Colour objects become `#rrggbb`, or `rgba(r, g, b, a)` when translucent.
/// Font-weight floats exported as `"700px"` become integers. Everything else
/// passes through.
pub fn normalize(raw: &RawLiteral, path: &TokenPath, kind: ResolvedKind) -> Literal {
    match raw {
        RawLiteral::Color(color) => Literal::Text(color_string(color)),
        RawLiteral::Text(s) if kind == ResolvedKind::Float && is_font_weight(path) => {
            font_weight(s).map_or_else(|| Literal::Text(s.clone()), Literal::Integer)
        }
        RawLiteral::Text(s) => Literal::Text(s.clone()),
        RawLiteral::Number(n) => Literal::Number(*n),
        RawLiteral::Bool(b) => Literal::Bool(*b),
    }
}

/// Format a 0..=1 colour as hex, or as `rgba()` when alpha is below 1.
///
/// Channels are `round(c * 255)`, with halves rounding away from zero.
pub fn color_string(color: &RgbaColor) -> String {
    let rgb: Srgb<u8> = Srgb::new(channel(color.r), channel(color.g), channel(color.b));

    if color.a < 1.0 {
        format!("rgba({}, {}, {}, {})", rgb.red, rgb.green, rgb.blue, color.a)
    } else {
        format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }
}

fn channel(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn is_font_weight(path: &TokenPath) -> bool {
    path.dotted().to_lowercase().contains("fontweight")
}

/// Upstream serializes some font weights with a pixel unit.
fn font_weight(s: &str) -> Option<i64> {
    let number = s.trim().strip_suffix("px")?.trim();
    number
        .parse::<i64>()
        .ok()
        .or_else(|| number.parse::<f64>().ok().map(|f| f.trunc() as i64))
}
