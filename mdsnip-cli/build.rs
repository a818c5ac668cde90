use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs
// Build scripts can't access src/ modules, so the argument list is repeated here
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdsnip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pick a command snippet from a markdown file and copy it to the clipboard")
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .help("Markdown file containing the snippets")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .short('s')
                .value_name("NAME")
                .help("How values are applied: substitute (default) or assign")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("selector")
                .long("selector")
                .help("Interactive picker reading labels on stdin")
                .value_hint(ValueHint::CommandName),
        )
        .arg(
            Arg::new("selector-args")
                .long("selector-args")
                .help("Arguments for the picker")
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to an mdsnip.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("no-clipboard")
                .long("no-clipboard")
                .help("Do not copy the result to the clipboard")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("Print snippet labels and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdsnip", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdsnip", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdsnip", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
