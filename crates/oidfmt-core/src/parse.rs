//! Parsing dotted OIDs back into arcs.

use crate::error::{NotationError, Result};

/// Parse a dotted OID such as `1.2.840.113549` into its arcs.
///
/// Surrounding whitespace is ignored. Each arc must be a run of ASCII digits
/// that fits in a `u64`; leading zeros are accepted. Arc values are not
/// otherwise checked.
pub fn parse_dot_notation(text: &str) -> Result<Vec<u64>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(NotationError::EmptyInput);
    }

    text.split('.')
        .enumerate()
        .map(|(position, component)| parse_arc(position, component))
        .collect()
}

fn parse_arc(position: usize, component: &str) -> Result<u64> {
    if component.is_empty() {
        return Err(NotationError::EmptyComponent { position });
    }
    // `u64::from_str` would also take a leading '+'.
    if !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NotationError::InvalidComponent {
            position,
            text: component.to_string(),
        });
    }
    component
        .parse::<u64>()
        .map_err(|_| NotationError::ArcOverflow {
            position,
            text: component.to_string(),
        })
}
