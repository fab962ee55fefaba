use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use listkit_core::samples::{panel_preset, panel_presets};
use listkit_core::{ListkitConfig, PanelState, WidthStore};
use serde_json::json;
use tracing::info;

use crate::ui;

#[derive(Parser, Debug)]
pub struct PanelArgs {
    /// Width store file (defaults to [panel].store_path or ~/.listkit/panel-widths.json)
    #[arg(long, global = true, env = "LISTKIT_PANEL_STORE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: PanelCommands,
}

#[derive(Subcommand, Debug)]
pub enum PanelCommands {
    /// List panel presets with their current widths
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show one panel's bounds and current width
    Show {
        /// Panel storage key (e.g. "document-list-width")
        key: String,
    },
    /// Simulate dragging the panel edge from one pointer x to another
    Drag {
        /// Panel storage key
        key: String,
        /// Pointer x where the drag starts
        #[arg(long, allow_negative_numbers = true)]
        from: i64,
        /// Pointer x where the drag ends
        #[arg(long, allow_negative_numbers = true)]
        to: i64,
    },
    /// Set the width directly (clamped to the panel bounds)
    Set {
        /// Panel storage key
        key: String,
        /// Width in pixels
        width: u32,
    },
    /// Forget the stored width and return to the default
    Reset {
        /// Panel storage key
        key: String,
    },
}

pub fn run_panel(args: PanelArgs, cfg: &ListkitConfig) -> Result<()> {
    let store_path = args.store.unwrap_or_else(|| cfg.store_path());
    let mut store = WidthStore::open(&store_path)
        .context(format!("Failed to open width store: {:?}", store_path))?;

    match args.command {
        PanelCommands::List { json } => list(&store, json),
        PanelCommands::Show { key } => {
            let panel = load(&store, &key)?;
            print_panel(&key, &panel);
            Ok(())
        }
        PanelCommands::Drag { key, from, to } => {
            let mut panel = load(&store, &key)?;
            panel.begin_drag(from);
            if let Some(width) = panel.drag_to(to) {
                info!(key = %key, width, "resized panel");
            }
            if let Some(width) = panel.end_drag() {
                persist(&mut store, &key, width)?;
            }
            print_panel(&key, &panel);
            Ok(())
        }
        PanelCommands::Set { key, width } => {
            let mut panel = load(&store, &key)?;
            let width = panel.set_width(width);
            persist(&mut store, &key, width)?;
            print_panel(&key, &panel);
            Ok(())
        }
        PanelCommands::Reset { key } => {
            let mut panel = load(&store, &key)?;
            panel.reset();
            if store.remove(&key).is_some() {
                store.save().context("Failed to save width store")?;
            }
            print_panel(&key, &panel);
            Ok(())
        }
    }
}

fn load(store: &WidthStore, key: &str) -> Result<PanelState> {
    let spec = panel_preset(key).ok_or_else(|| {
        let known: Vec<String> = panel_presets()
            .into_iter()
            .filter_map(|p| p.storage_key)
            .collect();
        anyhow!("Unknown panel '{}' (expected one of: {})", key, known.join(", "))
    })?;
    PanelState::new(spec, store.get(key)).context(format!("Invalid panel preset '{}'", key))
}

fn persist(store: &mut WidthStore, key: &str, width: u32) -> Result<()> {
    store.set(key, width);
    store.save().context("Failed to save width store")
}

fn print_panel(key: &str, panel: &PanelState) {
    let spec = panel.spec();
    ui::note(format!(
        "{} ({:?}, min {}, max {}, default {})",
        key, spec.side, spec.min_width, spec.max_width, spec.default_width
    ));
    println!(
        "{} {}px {:.0}%",
        key,
        panel.width(),
        panel.fill_ratio() * 100.0
    );
}

fn list(store: &WidthStore, as_json: bool) -> Result<()> {
    let mut panels: Vec<(String, PanelState)> = Vec::new();
    for spec in panel_presets() {
        let Some(key) = spec.storage_key.clone() else {
            continue;
        };
        let stored = store.get(&key);
        panels.push((key, PanelState::new(spec, stored)?));
    }

    if as_json {
        let out: Vec<_> = panels
            .iter()
            .map(|(key, panel)| {
                json!({
                    "key": key,
                    "spec": panel.spec(),
                    "width": panel.width(),
                    "stored": store.get(key),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    ui::note(format!("width store: {}", store.path().display()));
    for (key, panel) in &panels {
        let marker = if store.get(key).is_some() { "*" } else { " " };
        println!(
            "{}{:<22} {:>4}px  [{}-{}]",
            marker,
            key,
            panel.width(),
            panel.spec().min_width,
            panel.spec().max_width
        );
    }

    // Widths saved under keys that no preset uses
    for (key, width) in store.entries() {
        if panel_preset(key).is_none() {
            println!("?{:<22} {:>4}px  (no preset)", key, width);
        }
    }

    Ok(())
}
