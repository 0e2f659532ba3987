use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Wrapper around the external `otf2otc` collection-merge tool
#[derive(Debug, Clone)]
pub struct CollectionWriter {
    tool: PathBuf,
}

impl CollectionWriter {
    pub fn new(tool: PathBuf) -> Self {
        Self { tool }
    }

    /// Argument vector passed to the tool: `-o <output> <input>...`
    pub fn args(inputs: &[PathBuf], output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(inputs.len() + 2);
        args.push(OsString::from("-o"));
        args.push(output.as_os_str().to_os_string());
        for input in inputs {
            args.push(input.as_os_str().to_os_string());
        }
        args
    }

    /// Merge `inputs` into one collection file at `output`
    pub fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        log::info!("Merging {} fonts into {}", inputs.len(), output.display());
        for input in inputs {
            log::debug!("  - {}", input.display());
        }

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }

        let result = Command::new(&self.tool)
            .args(Self::args(inputs, output))
            .output()
            .map_err(|e| Error::Tool(format!("Failed to run {}: {}", self.tool.display(), e)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
            let details = if stderr.is_empty() {
                format!("exited with {}", result.status)
            } else {
                stderr
            };
            return Err(Error::Tool(format!(
                "{} failed: {}",
                self.tool.display(),
                details
            )));
        }

        Ok(())
    }
}
