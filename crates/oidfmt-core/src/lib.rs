//! Textual notations for ASN.1 object identifiers.
//!
//! Takes an OID that has already been decoded into its arcs and renders it:
//! - **Dot notation:** `1.2.840.113549`
//! - **ASN.1 notation:** `{iso(1) member-body(2) 840 113549}` (not available;
//!   always renders as `None`)
//!
//! An absent or empty arc sequence is a normal input and renders as `None`.
//! [`parse_dot_notation`] goes the other way for dotted strings.

pub mod error;
pub mod notation;
pub mod parse;

pub use error::NotationError;
pub use notation::{asn1_notation, available_notations, dot_notation, Notation, Rendering};
pub use parse::parse_dot_notation;
