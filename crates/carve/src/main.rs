use clap::builder::styling::{AnsiColor, Styles};
use clap::{ColorChoice, CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

use carve::config::CarveConfig;
use carve::extract::{self, ExtractOptions};

#[derive(Parser)]
#[command(name = "carve")]
#[command(about = "Extract a function's exact source extent from a file")]
struct Cli {
    /// Source file to search
    file: PathBuf,

    /// Function names to extract (omit to pick one interactively)
    names: Vec<String>,

    /// List candidate function names and exit
    #[arg(long)]
    list: bool,

    /// Output extracted functions as JSON
    #[arg(long)]
    json: bool,
}

/// Help output styling.
const HELP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().bold())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::Cyan.on_default().bold())
    .placeholder(AnsiColor::Cyan.on_default());

/// Determine color choice for help output. NO_COLOR wins; otherwise
/// leave it to TTY detection.
fn help_color_choice() -> ColorChoice {
    if std::env::var("NO_COLOR").is_ok() {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: libc::signal is a standard POSIX function. We reset SIGPIPE to
    // default behavior (terminate on broken pipe) instead of Rust's default
    // (ignore, causing write errors). No memory safety concerns - just
    // changes signal disposition.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn main() {
    reset_sigpipe();

    let matches = Cli::command()
        .styles(HELP_STYLES)
        .color(help_color_choice())
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).expect("clap mismatch");

    let config = CarveConfig::load(std::path::Path::new("."));
    let options = ExtractOptions {
        list: cli.list,
        json: cli.json,
    };

    std::process::exit(extract::run(&cli.file, &cli.names, &options, &config));
}
