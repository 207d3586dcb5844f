mod commands;
pub mod state;

use anyhow::Result;
use clap::Parser;
use commands::convert::ConvertCommand;
use state::CliContext;

#[derive(Parser, Debug)]
#[command(name = "convert-pdf-export")]
#[command(
    version,
    about = "Converts a legacy actor-export mapping file into a PDFProvider mapper script."
)]
pub struct Cli {
    #[command(flatten)]
    convert: ConvertCommand,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = CliContext::new();

    cli.convert.execute(&ctx)
}
