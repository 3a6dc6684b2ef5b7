//! `oidfmt parse`: read a dotted OID and re-render it.

use anyhow::{Context, Result};
use oidfmt_core::{parse_dot_notation, Rendering};

use crate::commands::format::{absent_warning, render};
use crate::config::{OutputFormat, Settings};

/// Parse `dotted`, then print its arcs and its rendering in the chosen notation.
pub fn run(dotted: &str, settings: Settings) -> Result<()> {
    let arcs = parse_dot_notation(dotted).with_context(|| format!("parsing '{dotted}'"))?;
    let rendering = Rendering::new(settings.notation, &arcs);

    match settings.format {
        OutputFormat::Json => {
            if let Some(output) = render(&rendering, settings.format)? {
                println!("{output}");
            }
        }
        OutputFormat::Text => {
            println!("{}", render_text(&rendering));
            if let Some(warning) = absent_warning(&rendering) {
                eprintln!("{warning}");
            }
        }
    }
    Ok(())
}

/// Text-mode stdout: the arcs line, then the rendering line when there is one.
pub(crate) fn render_text(rendering: &Rendering) -> String {
    let mut out = format!("arcs: {}", join_arcs(&rendering.arcs));
    if let Some(text) = &rendering.text {
        out.push_str(&format!("\n{}: {text}", rendering.notation));
    }
    out
}

fn join_arcs(arcs: &[u64]) -> String {
    let parts: Vec<String> = arcs.iter().map(u64::to_string).collect();
    parts.join(" ")
}
