use anyhow::Result;
use clap::Command;

mod cmd;
mod config;

fn main() -> Result<()> {
    let matches = cli().get_matches();
    match matches.subcommand() {
        Some(("build", args)) => cmd::build::execute(args),
        _ => unreachable!("subcommand required"),
    }
}

fn cli() -> Command {
    Command::new("quill")
        .about("Build a website from a tree of markdown documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::build::make_subcommand())
}
