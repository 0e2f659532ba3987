use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::models::Config;

/// Parse command line arguments into a run configuration
pub fn parse_args() -> Result<Config> {
    parse(env::args().skip(1).collect())
}

fn parse(args: Vec<String>) -> Result<Config> {
    let mut config = Config::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--debug" => {
                config.debug = true;
                i += 1;
            }
            "--no-ttc" => {
                config.make_ttc = false;
                i += 1;
            }
            "--input" => {
                config.input_dir = PathBuf::from(value(&args, i, "--input")?);
                i += 2;
            }
            "--output" => {
                config.output_dir = PathBuf::from(value(&args, i, "--output")?);
                i += 2;
            }
            "--otf2otc" => {
                config.otf2otc = PathBuf::from(value(&args, i, "--otf2otc")?);
                i += 2;
            }
            other => {
                return Err(Error::Config(format!("Unknown option: {}", other)));
            }
        }
    }

    Ok(config)
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| Error::Config(format!("{} requires an argument", flag)))
}

/// Check if help was requested anywhere on the command line
pub fn wants_help() -> bool {
    env::args().skip(1).any(|arg| arg == "--help" || arg == "-h")
}

/// Get the help message for command-line usage
pub fn get_help_message() -> String {
    r#"noto-cjk-builder - Batch renamer and TTC packager for Noto Sans CJK fonts

USAGE:
    noto-cjk-builder [OPTIONS]

OPTIONS:
    -h, --help          Show this help message
    --debug             Enable debug output
    --input <DIR>       Directory containing the per-style input fonts (default: ./input)
    --output <DIR>      Root output directory (default: ./output)
    --otf2otc <PATH>    Collection-merge tool to invoke (default: otf2otc)
    --no-ttc            Rename and export only, skip the collection-merge step

For every style (Regular, Thin, Light, Medium, Bold, Black) the tool reads
<input>/<Style>.ttf, writes one renamed TTF per region (JP, KR, SC, TC, HK)
to <output>/ttf/, and merges the five into <output>/ttc/NotoSansCJK-<Style>.ttc.
A style whose input font is missing is skipped.
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_gives_the_defaults() {
        let config = parse(vec![]).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("./input"));
        assert_eq!(config.output_dir, PathBuf::from("./output"));
        assert_eq!(config.otf2otc, PathBuf::from("otf2otc"));
        assert!(config.make_ttc);
        assert!(!config.debug);
    }

    #[test]
    fn flags_override_the_defaults() {
        let config = parse(
            ["--debug", "--no-ttc", "--input", "fonts", "--otf2otc", "/opt/afdko/otf2otc"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap();
        assert!(config.debug);
        assert!(!config.make_ttc);
        assert_eq!(config.input_dir, PathBuf::from("fonts"));
        assert_eq!(config.otf2otc, PathBuf::from("/opt/afdko/otf2otc"));
    }

    #[test]
    fn a_value_flag_without_a_value_is_rejected() {
        let err = parse(vec!["--output".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn unknown_options_are_rejected() {
        let err = parse(vec!["--frobnicate".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
