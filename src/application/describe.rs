//! The describe workflow: load, optionally collect types, render.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::cli::output::MarkdownTableWriter;
use crate::domain::models::{Manifest, Settings, Tables};
use crate::domain::ports::TypePrompt;
use crate::infrastructure::manifest::ManifestLoader;
use crate::services::TypeCollector;

/// Load the manifest named by `settings`, fill in types when asked to, and
/// write the selected tables to `out`.
#[instrument(skip_all, fields(manifest = %settings.manifest_path.display()))]
pub fn run<P, W>(settings: &Settings, prompt: P, out: W) -> Result<()>
where
    P: TypePrompt,
    W: Write,
{
    let mut manifest = ManifestLoader::load(&settings.manifest_path)?;
    info!(
        inputs = manifest.inputs.len(),
        outputs = manifest.outputs.len(),
        "Manifest loaded"
    );

    let selection = settings.selection();
    if settings.prompt_types {
        TypeCollector::new(prompt).collect(&mut manifest, selection);
    }

    render(&manifest, selection.tables(), settings.max_column_width, out)
        .context("Failed to write tables")
}

/// Write the requested tables; with both, inputs come first and a blank
/// line separates them.
pub fn render<W: Write>(
    manifest: &Manifest,
    tables: Tables,
    max_column_width: u16,
    out: W,
) -> std::io::Result<()> {
    let mut writer = MarkdownTableWriter::with_max_column_width(out, max_column_width);

    match tables {
        Tables::InputsOnly => writer.write_inputs(&manifest.inputs)?,
        Tables::OutputsOnly => writer.write_outputs(&manifest.outputs)?,
        Tables::Both => {
            writer.write_inputs(&manifest.inputs)?;
            writer.write_separator()?;
            writer.write_outputs(&manifest.outputs)?;
        }
    }

    writer.flush()
}
