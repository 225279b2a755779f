//! Token kind inference.

use crate::types::{Literal, ResolvedKind, TokenKind, TokenPath};

const DIMENSION_HINTS: [&str; 6] = ["space", "spacing", "size", "width", "height", "radius"];

/// Infer the kind of a token from its path and normalized value.
///
/// Returns `None` when nothing matches; there is no default kind.
pub fn classify(
    path: &TokenPath,
    value: Option<&Literal>,
    kind: Option<ResolvedKind>,
) -> Option<TokenKind> {
    let path = path.dotted().to_lowercase();
    let text = value.and_then(Literal::as_str);

    let color_text = text.is_some_and(|s| s.starts_with('#') || s.starts_with("rgb"));
    if kind == Some(ResolvedKind::Color) || color_text {
        return Some(TokenKind::Color);
    }

    if path.contains("fontweight") || path.contains("font-weight") {
        return Some(TokenKind::FontWeight);
    }

    let numeric = matches!(value, Some(Literal::Number(_) | Literal::Integer(_)))
        || text.is_some_and(|s| s.ends_with("px"));
    if !numeric {
        return None;
    }

    if path.contains("fontsize") || path.contains("font-size") {
        return Some(TokenKind::Dimension);
    }

    if path.contains("lineheight") || path.contains("line-height") {
        // Unitless line heights are small multipliers
        let unitless = value.and_then(Literal::as_number).is_some_and(|n| n < 10.0);
        return Some(if unitless {
            TokenKind::Number
        } else {
            TokenKind::Dimension
        });
    }

    if DIMENSION_HINTS.iter().any(|hint| path.contains(hint)) {
        return Some(TokenKind::Dimension);
    }

    None
}
