//! `oidfmt format`: render arcs in a notation.

use anyhow::Result;
use oidfmt_core::Rendering;

use crate::config::{OutputFormat, Settings};

/// Render `arcs` and print the result.
///
/// An absent rendering is not an error: text mode prints nothing to stdout.
pub fn run(arcs: &[u64], settings: Settings) -> Result<()> {
    let rendering = Rendering::new(settings.notation, arcs);
    if let Some(output) = render(&rendering, settings.format)? {
        println!("{output}");
    } else if let Some(warning) = absent_warning(&rendering) {
        eprintln!("{warning}");
    }
    Ok(())
}

/// Produce the stdout text for a rendering, or `None` if there is nothing to print.
pub(crate) fn render(rendering: &Rendering, format: OutputFormat) -> Result<Option<String>> {
    match format {
        OutputFormat::Text => Ok(rendering.text.clone()),
        OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(rendering)?)),
    }
}

/// The stderr line explaining why a rendering is absent.
pub(crate) fn absent_warning(rendering: &Rendering) -> Option<String> {
    if !rendering.is_absent() {
        return None;
    }
    if rendering.arcs.is_empty() {
        Some("warning: no arcs given, nothing to render".to_string())
    } else {
        Some(format!(
            "warning: {} notation is not available, nothing rendered",
            rendering.notation
        ))
    }
}
