//! Batch renamer and TTC packager for Noto Sans CJK font releases.
//!
//! For each style the tool loads one input font, rewrites its naming
//! metadata once per CJK region, exports the per-region TTFs and bundles
//! them into a per-style TTC by invoking the external `otf2otc` tool.
//! Font binary parsing and writing are delegated to the fontations stack;
//! the collection merge stays in the external tool.

pub mod cli;
pub mod error;
pub mod font;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use error::{Error, Result};
