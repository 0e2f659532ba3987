use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::font::{editor, naming, NameSet, Region, Style};
use crate::models::{Config, RenameReport};
use crate::utils::ensure_directory_exists;

use super::collection::CollectionWriter;

/// Rename every style and bundle the per-region results into collections.
/// A style whose input font is missing is logged and skipped; every other
/// failure aborts the batch.
pub fn run(config: &Config) -> Result<RenameReport> {
    let mut report = RenameReport::default();
    let merger = CollectionWriter::new(config.otf2otc.clone());
    let total = Style::ALL.len();

    for (i, style) in Style::ALL.into_iter().enumerate() {
        log::info!("Processing style {}/{}: {}", i + 1, total, style);

        let font_path = config.input_font_path(style);
        log::info!("Loading font from: {}.", font_path.display());
        if !font_path.is_file() {
            log::error!(
                "Cannot find font file {}. Skipping style {}.",
                font_path.display(),
                style
            );
            report.styles_skipped += 1;
            continue;
        }

        let ttf_paths = process_style(config, style)?;
        report.fonts_written += ttf_paths.len();
        report.styles_processed += 1;

        if config.make_ttc {
            let ttc_path = config.ttc_output_dir().join(naming::ttc_file_name(style));
            log::info!(
                "Generating ttc file for style {}. Ttc file will be exported to: {}.",
                style,
                ttc_path.display()
            );
            merger.merge(&ttf_paths, &ttc_path)?;
            report.collections_written += 1;
        }
    }

    Ok(report)
}

/// Export the renamed per-region TTFs for one style, returning the written
/// paths in region order
pub fn process_style(config: &Config, style: Style) -> Result<Vec<PathBuf>> {
    let font_path = config.input_font_path(style);
    let data = editor::read_font(&font_path)?;

    let ttf_dir = config.ttf_output_dir();
    ensure_directory_exists(&ttf_dir)?;

    let mut ttf_paths = Vec::with_capacity(Region::ALL.len());
    for region in Region::ALL {
        let names = NameSet::new(region, style);
        let renamed = editor::rename_font(&data, &names)?;
        let output_path = ttf_dir.join(naming::ttf_file_name(region, style));
        fs::write(&output_path, &renamed)?;
        log::debug!("Wrote {} ({} bytes)", output_path.display(), renamed.len());
        ttf_paths.push(output_path);
    }

    Ok(ttf_paths)
}
