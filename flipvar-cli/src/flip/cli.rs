use clap::{Arg, Command};

pub const SEQS_ARG: &str = "seqs";
pub const VARDIR_ARG: &str = "vardir";
pub const FASTADIR_ARG: &str = "fastadir";
pub const OUTVARDIR_ARG: &str = "outvardir";
pub const OUTFASTADIR_ARG: &str = "outfastadir";

fn required_path(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("PATH")
        .required(true)
        .help(help)
}

///
/// Add the five path arguments of a flip run to a command.
///
pub fn add_flip_args(command: Command) -> Command {
    command
        .arg(required_path(
            SEQS_ARG,
            "Path to file with list of sequence IDs to process",
        ))
        .arg(required_path(VARDIR_ARG, "Path to input variation files"))
        .arg(required_path(FASTADIR_ARG, "Path to input fasta files"))
        .arg(required_path(OUTVARDIR_ARG, "Path to output variation files"))
        .arg(required_path(OUTFASTADIR_ARG, "Path to output fasta files"))
}
