//! show command - Display a terminal strip document

use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::load_strip;
use crate::cli::Context;
use crate::core::strip::TerminalStrip;
use crate::ui::output::{self, format_color, format_label};

#[derive(Debug, Serialize)]
struct StripView<'a> {
    uuid: String,
    installation: &'a str,
    location: &'a str,
    name: &'a str,
    comment: &'a str,
    description: &'a str,
    physical_terminals: Vec<PhysicalView<'a>>,
    bridges: Vec<BridgeView>,
    warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
struct PhysicalView<'a> {
    uuid: String,
    position: usize,
    levels: Vec<LevelView<'a>>,
}

#[derive(Debug, Serialize)]
struct LevelView<'a> {
    uuid: String,
    level: usize,
    element: Option<String>,
    label: &'a str,
    #[serde(rename = "type")]
    terminal_type: &'static str,
    function: &'static str,
    led: bool,
    bridge: Option<String>,
}

#[derive(Debug, Serialize)]
struct BridgeView {
    uuid: String,
    color: String,
    real_terminals: Vec<String>,
}

fn view<'a>(strip: &'a TerminalStrip, warnings: Vec<String>) -> StripView<'a> {
    let physical_terminals = strip
        .physical_terminals()
        .enumerate()
        .map(|(position, pt)| PhysicalView {
            uuid: pt.id().to_string(),
            position,
            levels: pt
                .real_terminals()
                .iter()
                .filter_map(|id| strip.real_terminal(*id))
                .map(|rt| LevelView {
                    uuid: rt.id().to_string(),
                    level: rt.level(),
                    element: rt.element().map(|e| e.to_string()),
                    label: rt.label(),
                    terminal_type: rt.terminal_type().as_str(),
                    function: rt.terminal_function().as_str(),
                    led: rt.is_led(),
                    bridge: rt.bridge().map(|b| b.to_string()),
                })
                .collect(),
        })
        .collect();

    let bridges = strip
        .bridges()
        .iter()
        .map(|b| BridgeView {
            uuid: b.id().to_string(),
            color: b.color().to_string(),
            real_terminals: b.real_terminals().iter().map(|t| t.to_string()).collect(),
        })
        .collect();

    StripView {
        uuid: strip.uuid().to_string(),
        installation: strip.installation(),
        location: strip.location(),
        name: strip.name(),
        comment: strip.comment(),
        description: strip.description(),
        physical_terminals,
        bridges,
        warnings,
    }
}

fn render(strip: &TerminalStrip) -> String {
    let mut lines = vec![
        format!("Strip {} ({})", format_label(strip.name()), strip.uuid()),
        format!("  installation: {}", strip.installation()),
        format!("  location: {}", strip.location()),
    ];
    if !strip.comment().is_empty() {
        lines.push(format!("  comment: {}", strip.comment()));
    }
    if !strip.description().is_empty() {
        lines.push(format!("  description: {}", strip.description()));
    }
    lines.push(format!(
        "Physical terminals: {}, real terminals: {}, bridges: {}",
        strip.physical_terminal_count(),
        strip.real_terminal_count(),
        strip.bridges().len()
    ));

    for (position, pt) in strip.physical_terminals().enumerate() {
        lines.push(format!("[{}] {}", position, pt.id()));
        for rt in pt.real_terminals().iter().filter_map(|id| strip.real_terminal(*id)) {
            let mut line = format!(
                "    {}: {} ({}/{})",
                rt.level(),
                format_label(rt.label()),
                rt.terminal_type(),
                rt.terminal_function()
            );
            if !rt.is_element() {
                line.push_str(" virtual");
            }
            if let Some(bridge) = strip.is_bridged(rt.id()) {
                line.push_str(&format!(" * {}", format_color(bridge.color())));
            }
            lines.push(line);
        }
    }

    if !strip.bridges().is_empty() {
        lines.push("Bridges:".to_string());
        for bridge in strip.bridges() {
            let labels: Vec<_> = bridge
                .real_terminals()
                .iter()
                .filter_map(|id| strip.real_terminal(*id))
                .map(|rt| format_label(rt.label()))
                .collect();
            lines.push(format!(
                "  {} {}: {}",
                bridge.id(),
                format_color(bridge.color()),
                labels.join(", ")
            ));
        }
    }

    lines.join("\n")
}

/// Display a strip document.
pub fn show(ctx: &Context, path: &Path, json: bool) -> Result<()> {
    let loaded = load_strip(ctx, path)?;

    if json {
        let warnings = loaded.warnings.iter().map(|w| w.to_string()).collect();
        let text = serde_json::to_string_pretty(&view(&loaded.strip, warnings))
            .context("Failed to serialize strip")?;
        println!("{}", text);
    } else {
        output::print(render(&loaded.strip), ctx.verbosity());
    }

    Ok(())
}
