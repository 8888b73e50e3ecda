//! Segment Studio — scripted front end for the save-segment editor.
//!
//! Replays a JSON script of editor actions (or the built-in demo scenario)
//! against the configured trait catalog and prints each saved segment as a
//! JSON line.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use segment_core::config::{FieldDef, StudioConfig};
use segment_core::types::{FieldCatalog, SchemaField};
use segment_editor::{ConsoleSink, EditorAction, SegmentEditor};

#[derive(Parser, Debug)]
#[command(name = "segment-studio")]
#[command(about = "Audience segment editor driven by scripted actions")]
#[command(version)]
struct Cli {
    /// JSON file containing an array of editor actions to replay
    #[arg(long, env = "SEGMENT_STUDIO__SCRIPT", conflicts_with = "demo")]
    script: Option<PathBuf>,

    /// Run the built-in demo scenario instead of a script
    #[arg(long, default_value_t = false)]
    demo: bool,

    /// JSON file with catalog field definitions (overrides config)
    #[arg(long, env = "SEGMENT_STUDIO__CATALOG_FILE")]
    catalog: Option<PathBuf>,

    /// Number of catalog entries seeding the initial selection (overrides config)
    #[arg(long, env = "SEGMENT_STUDIO__INITIAL_SELECTED")]
    initial_selected: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let config = StudioConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {e}");
        StudioConfig::default()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let initial_selected = cli.initial_selected.unwrap_or(config.initial_selected);
    let catalog = load_catalog(&cli, &config, initial_selected)?;
    info!(
        catalog_size = catalog.len(),
        initial_selected, "Catalog loaded"
    );

    let mut editor = SegmentEditor::new(catalog, Box::new(ConsoleSink));

    if cli.demo {
        run_demo(&mut editor)?;
        return Ok(());
    }

    let script = cli
        .script
        .context("provide --script <file> or --demo")?;
    let actions = load_script(&script)?;
    info!(actions = actions.len(), script = %script.display(), "Replaying script");

    for (i, action) in actions.into_iter().enumerate() {
        editor
            .dispatch(action)
            .with_context(|| format!("script action {i} failed"))?;
    }
    Ok(())
}

fn load_catalog(
    cli: &Cli,
    config: &StudioConfig,
    initial_selected: usize,
) -> anyhow::Result<FieldCatalog> {
    let fields: Vec<SchemaField> = match &cli.catalog {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading catalog file {}", path.display()))?;
            let defs: Vec<FieldDef> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing catalog file {}", path.display()))?;
            defs.into_iter().map(SchemaField::from).collect()
        }
        None => config
            .catalog
            .iter()
            .cloned()
            .map(SchemaField::from)
            .collect(),
    };
    Ok(FieldCatalog::new(fields, initial_selected)?)
}

fn load_script(path: &PathBuf) -> anyhow::Result<Vec<EditorAction>> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))?;
    // Either a single JSON array or one action object per line.
    if let Ok(actions) = serde_json::from_str::<Vec<EditorAction>>(&raw) {
        return Ok(actions);
    }
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| serde_json::from_str(l).with_context(|| format!("parsing action: {l}")))
        .collect()
}

/// The canonical walkthrough: name the segment, add Age, drop Last Name,
/// and save.
fn run_demo(editor: &mut SegmentEditor) -> anyhow::Result<()> {
    info!("Running demo scenario");
    editor.open()?;
    editor.set_name("VIP Users")?;
    editor.select_field("age")?;
    editor.add_field()?;
    editor.remove_field(1)?;
    let payload = editor.save()?;
    info!(
        segment_name = %payload.segment_name,
        fields = payload.schema.len(),
        "Demo scenario complete"
    );
    Ok(())
}
