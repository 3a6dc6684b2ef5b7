//! Dot and ASN.1 renderings of an OID's arcs.

use serde::{Deserialize, Serialize};

use crate::error::{NotationError, Result};

/// Render arcs as period-separated decimals, e.g. `1.2.840.113549`.
///
/// Returns `None` when `values` is absent or empty. Every `u64` is accepted
/// as-is; arcs are never range-checked.
pub fn dot_notation(values: Option<&[u64]>) -> Option<String> {
    let values = values.filter(|v| !v.is_empty())?;

    let mut out = String::with_capacity(values.len() * 4);
    for (i, arc) in values.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(&arc.to_string());
    }
    Some(out)
}

/// Render arcs in ASN.1 value notation, e.g. `{iso(1) member-body(2) 840 113549}`.
///
/// Naming arcs needs a registry keyed by position and parent arc, which this
/// crate does not carry, so the result is always `None`.
pub fn asn1_notation(_values: Option<&[u64]>) -> Option<String> {
    None
}

/// A textual notation for object identifiers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    #[serde(alias = "dotted")]
    Dot,
    #[serde(alias = "asn.1")]
    Asn1,
}

impl Notation {
    /// Parse a notation from a string.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "dot" | "dotted" => Ok(Notation::Dot),
            "asn1" | "asn.1" => Ok(Notation::Asn1),
            _ => Err(NotationError::UnknownNotation {
                name: s.to_string(),
            }),
        }
    }

    /// Canonical name for this notation.
    pub fn name(&self) -> &'static str {
        match self {
            Notation::Dot => "dot",
            Notation::Asn1 => "asn1",
        }
    }

    /// One-line description, used in listings.
    pub fn description(&self) -> &'static str {
        match self {
            Notation::Dot => "period-separated decimal arcs (1.2.840.113549)",
            Notation::Asn1 => "ASN.1 value notation ({iso(1) member-body(2) 840 113549})",
        }
    }

    /// Whether this notation can produce output at all.
    pub fn is_implemented(&self) -> bool {
        matches!(self, Notation::Dot)
    }

    /// Render `values` in this notation.
    pub fn render(self, values: Option<&[u64]>) -> Option<String> {
        match self {
            Notation::Dot => dot_notation(values),
            Notation::Asn1 => asn1_notation(values),
        }
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Notation {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self> {
        Notation::parse(s)
    }
}

/// List all notations.
pub fn available_notations() -> &'static [Notation] {
    &[Notation::Dot, Notation::Asn1]
}

/// The result of rendering one OID, in a form suitable for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendering {
    /// Notation that was requested.
    pub notation: Notation,
    /// Arcs as given.
    pub arcs: Vec<u64>,
    /// Rendered text, or `None` if the notation produced nothing.
    pub text: Option<String>,
}

impl Rendering {
    /// Render `arcs` in `notation`; an empty slice yields an absent rendering.
    pub fn new(notation: Notation, arcs: &[u64]) -> Self {
        Self {
            notation,
            arcs: arcs.to_vec(),
            text: notation.render(Some(arcs)),
        }
    }

    /// Whether the notation produced no text.
    pub fn is_absent(&self) -> bool {
        self.text.is_none()
    }
}
