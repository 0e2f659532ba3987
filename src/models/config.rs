use std::path::PathBuf;

use crate::font::Style;

/// Configuration for the batch rename process
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the per-style input fonts (`<Style>.ttf`)
    pub input_dir: PathBuf,
    /// Root output directory; TTFs and TTCs go into subdirectories of it
    pub output_dir: PathBuf,
    /// Name or path of the external collection-merge tool
    pub otf2otc: PathBuf,
    /// Whether to run the collection-merge step after renaming
    pub make_ttc: bool,
    /// Enable debug output
    pub debug: bool,
}

impl Config {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            input_dir: PathBuf::from("./input"),
            output_dir: PathBuf::from("./output"),
            otf2otc: PathBuf::from("otf2otc"),
            make_ttc: true,
            debug: false,
        }
    }

    /// Directory the renamed per-region TTFs are written to
    pub fn ttf_output_dir(&self) -> PathBuf {
        self.output_dir.join("ttf")
    }

    /// Directory the merged TTCs are written to
    pub fn ttc_output_dir(&self) -> PathBuf {
        self.output_dir.join("ttc")
    }

    /// Path of the input font expected for a style
    pub fn input_font_path(&self, style: Style) -> PathBuf {
        self.input_dir.join(format!("{}.ttf", style.name()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
