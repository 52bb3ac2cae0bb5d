//! VTabs command-line renderer
//!
//! Loads a widget configuration, renders it into a host page, optionally
//! selects a tab or steps the auto-cycle, and prints the resulting HTML.

mod args;

use std::fs;
use std::io::Write;

use anyhow::{bail, Context};
use clap::Parser;
use vtabs_core::{init_logging, Config, Page, WidgetConfig};

use args::CliArgs;

const DEFAULT_PAGE: &str = r#"<!DOCTYPE html><html><head></head><body><div id="vtabs"></div></body></html>"#;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let settings = match &args.settings {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Config::default(),
    };
    init_logging(&settings);

    let json = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read {}", args.config.display()))?;
    let mut widget = WidgetConfig::from_json(&json)
        .with_context(|| format!("invalid widget configuration in {}", args.config.display()))?;
    if let Some(position) = args.position {
        widget = widget.position(position);
    }
    if args.debug {
        widget = widget.debug(true);
    }

    let page = match &args.page {
        Some(path) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Page::from_html(&html, settings)
        }
        None => Page::from_html(DEFAULT_PAGE, settings),
    };

    let container = widget.container.clone();
    let Some(rendered) = page.create_vertical_tabs(widget) else {
        bail!("no widget rendered: container {container} not found");
    };

    if let Some(index) = args.select {
        page.select_tab(&rendered, index);
    }
    for _ in 0..args.cycle_steps {
        if page.step_cycle(&container).is_none() {
            break;
        }
    }

    tracing::info!(
        widget_id = %rendered.id(),
        tabs = rendered.len(),
        active = ?rendered.active_index(),
        "Rendered vertical tabs"
    );

    let html = page.to_html();
    match &args.output {
        Some(path) => fs::write(path, html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
