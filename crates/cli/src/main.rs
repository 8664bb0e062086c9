use clap::Parser;

use docgen_cli::{Cli, run};
use docgen_core::DocumentDefaults;

fn main() -> anyhow::Result<()> {
    docgen_observability::init();

    let cli = Cli::parse();
    let defaults = DocumentDefaults::from_env();

    let output = run(cli.command, &defaults)?;
    println!("{output}");
    Ok(())
}
