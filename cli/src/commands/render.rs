use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};
use impactmap::{ColumnMap, FrameSource, Renderer, Selection, StyleConfig};
use tracing::{info, warn};

use crate::cli::RenderArgs;

pub fn run(_cli: &crate::cli::Cli, args: &RenderArgs) -> Result<()> {
    let Some(geojson) = render_geojson(args)? else {
        warn!(authority = %args.authority, "no drawable streets for this selection");
        return Ok(())
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &geojson).with_context(|| format!("[render] failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote geojson");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(geojson.as_bytes())?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<StyleConfig> {
    match path {
        Some(path) => StyleConfig::from_json_file(path)
            .with_context(|| format!("[render] failed to load style config {}", path.display())),
        None => Ok(StyleConfig::default()),
    }
}

/// Serialized frame, or `None` when the selection leaves nothing to draw.
fn render_geojson(args: &RenderArgs) -> Result<Option<String>> {
    let config = load_config(args.config.as_deref())?;
    let source = FrameSource::read_csv(&args.input, ColumnMap::default())
        .with_context(|| format!("[render] failed to read {}", args.input.display()))?;

    let mut selection = Selection::group(&args.authority);
    if let Some(attribute) = &args.category {
        selection = selection.with_category(attribute, &args.only);
    }

    let renderer = Renderer::new(config)?;
    let frame = renderer.render_source(&source, &selection)
        .with_context(|| format!("[render] failed to render {}", args.authority))?;

    frame.map(|frame| serde_json::to_string_pretty(&frame.to_geojson()).context("[render] failed to serialize"))
        .transpose()
}
