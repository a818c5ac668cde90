// Command-line interface for mdsnip
//
// mdsnip reads a markdown cheat sheet, hands the snippet labels to an interactive picker (fzf by
// default), prompts for the placeholders of the chosen snippet and puts the resulting command on
// the clipboard and stdout. It never runs the command.
//
// Usage:
//  mdsnip <file> [--strategy substitute|assign] [--selector <program>] [--selector-args <args>]
//  mdsnip <file> --list                  - Print snippet labels and exit
//
// Configuration precedence (lowest to highest): built-in defaults, ./mdsnip.toml, --config <path>,
// command-line flags.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdsnip_config::{Loader, SnipConfig};
use mdsnip_core::{
    extract_markdown, resolver_for, ClipboardSink, EchoSink, Pipeline, ProcessSelector, SnipError,
};
use std::fs;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn build_cli() -> Command {
    Command::new("mdsnip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pick a command snippet from a markdown file and copy it to the clipboard")
        .long_about(
            "mdsnip turns a markdown file into a command palette.\n\n\
            A snippet is a code block placed directly after a quote block; the quote's\n\
            first line is the label shown in the picker. Placeholders written as $name\n\
            or ${name} are prompted for; names starting with an uppercase letter, a digit\n\
            or an underscore ($HOME, $1, $_x) are left to the shell.\n\n\
            Examples:\n  \
            mdsnip ops.md                          # Pick with fzf, substitute values\n  \
            mdsnip ops.md -s assign                # Prefix name=value; assignments instead\n  \
            mdsnip ops.md --selector rofi --selector-args '-dmenu -i'\n  \
            mdsnip ops.md --list                   # Print labels only"
        )
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
                .long_help(
                    "How prompted values are applied to the snippet.\n\n\
                    substitute: replace $name and ${name} with the value\n\
                    assign:     prepend name=value; assignments, keep the snippet as written\n\n\
                    Unrecognized names fall back to substitute."
                )
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("selector")
                .long("selector")
                .value_name("PROGRAM")
                .help("Interactive picker reading labels on stdin (default: fzf)")
                .value_hint(ValueHint::CommandName),
        )
        .arg(
            Arg::new("selector-args")
                .long("selector-args")
                .value_name("ARGS")
                .help("Arguments for the picker, split with shell quoting rules")
                .allow_hyphen_values(true)
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
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
                .help("Print snippet labels, one per line, and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output on stderr (-v, -vv, -vvv)")
                .action(ArgAction::Count),
        )
}

fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,mdsnip_core=info,mdsnip=info".to_string(),
            2 => "info,mdsnip_core=debug,mdsnip=debug".to_string(),
            _ => "debug,mdsnip_core=trace,mdsnip=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> Result<(), SnipError> {
    let config = load_cli_config(matches)?;

    let path = matches
        .get_one::<String>("file")
        .expect("file is required");
    let source = fs::read_to_string(path)
        .map_err(|e| SnipError::Input(format!("Error reading file '{path}': {e}")))?;

    if matches.get_flag("list") {
        return handle_list_command(&source);
    }

    let mut pipeline = build_pipeline(&config)?;
    match pipeline.run(&source)? {
        Some(_) => debug!("done"),
        None => debug!("nothing selected"),
    }
    Ok(())
}

/// Print every label in document order.
fn handle_list_command(source: &str) -> Result<(), SnipError> {
    let table = extract_markdown(source)?;
    if table.is_empty() {
        return Err(SnipError::NoSnippets);
    }
    for label in table.labels() {
        println!("{label}");
    }
    Ok(())
}

fn build_pipeline(config: &SnipConfig) -> Result<Pipeline, SnipError> {
    let selector = ProcessSelector::from_arg_string(&config.selector.program, &config.selector.args)?;
    let resolver = resolver_for(&config.selector.program);
    debug!(
        program = %config.selector.program,
        args = ?selector.args(),
        strategy = %config.materialize.strategy,
        "pipeline configured"
    );

    let mut pipeline = Pipeline::new(config.materialize.strategy, Box::new(selector), resolver);
    if config.output.clipboard {
        pipeline = pipeline.with_sink(Box::new(ClipboardSink::detect()));
    }
    if config.output.echo {
        pipeline = pipeline.with_sink(Box::new(EchoSink::stdout()));
    }
    Ok(pipeline)
}

fn load_cli_config(matches: &ArgMatches) -> Result<SnipConfig, SnipError> {
    let loader = Loader::new().with_optional_file("mdsnip.toml");
    let loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader,
    };
    apply_cli_overrides(loader, matches)
        .and_then(Loader::build)
        .map_err(|err| SnipError::Config(format!("Failed to load configuration: {err}")))
}

fn apply_cli_overrides(
    mut loader: Loader,
    matches: &ArgMatches,
) -> Result<Loader, mdsnip_config::LoadError> {
    for (flag, key) in [
        ("strategy", "materialize.strategy"),
        ("selector", "selector.program"),
        ("selector-args", "selector.args"),
    ] {
        if let Some(value) = matches.get_one::<String>(flag) {
            loader = loader.set_override(key, value.as_str())?;
        }
    }
    if matches.get_flag("no-clipboard") {
        loader = loader.set_override("output.clipboard", false)?;
    }
    Ok(loader)
}
