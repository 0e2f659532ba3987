use anyhow::Result;

use noto_cjk_builder::utils::{ensure_directory_exists, logging};
use noto_cjk_builder::{cli, pipeline};

fn main() -> Result<()> {
    if cli::wants_help() {
        println!("{}", cli::get_help_message());
        return Ok(());
    }

    let config = cli::parse_args()?;
    logging::init(config.debug);

    ensure_directory_exists(&config.input_dir)?;
    ensure_directory_exists(&config.ttf_output_dir())?;
    ensure_directory_exists(&config.ttc_output_dir())?;

    let report = pipeline::run(&config)?;

    println!("Font rename summary:");
    println!("  - {}", report.summary());

    Ok(())
}
