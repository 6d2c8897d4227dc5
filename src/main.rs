//! localize-readme — copy the repository READMEs into the locale doc trees.
//!
//! Run from the repository root with no arguments, or point `--root` at it:
//!
//! - `README.md` → `docs/en_US/README.md`
//! - `README-CN.md` → `docs/zh_CN/README.md`

use anyhow::Result;
use clap::Parser;
use readme_localizer::{localize, readme_pairs, readme_rules};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "localize-readme",
    about = "Copy the top-level READMEs into the locale documentation directories"
)]
struct Cli {
    /// Repository root containing README.md, README-CN.md and docs/
    #[arg(short = 'r', long, default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pairs = readme_pairs();
    let rules = readme_rules();
    let written = localize(&cli.root, &pairs, &rules)?;

    println!("localized {} README file(s)", written);
    Ok(())
}
