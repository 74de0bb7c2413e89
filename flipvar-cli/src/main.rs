mod flip;

use anyhow::Result;
use clap::Command;
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "flipvar";
}

fn build_parser() -> Command {
    let command = Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Flip amino acid in fasta file: apply each <id>.var substitution to <id>.fasta and write the reverting variants.");

    flip::cli::add_flip_args(command)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let matches = build_parser().get_matches();
    flip::handlers::run_flip(&matches)?;

    Ok(())
}
