//! `oidfmt notations`: list available notations.

use anyhow::Result;
use oidfmt_core::available_notations;

/// List all notations with a short description.
pub fn list() -> Result<()> {
    println!("Notations:");
    println!();
    for notation in available_notations() {
        let marker = if notation.is_implemented() {
            ""
        } else {
            " (not available)"
        };
        println!("  {:<8} {}{marker}", notation.name(), notation.description());
    }
    Ok(())
}
