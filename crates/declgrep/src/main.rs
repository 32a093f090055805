use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing_subscriber::{EnvFilter, fmt};

use declgrep::{ClangFrontend, SearchProvider, SymbolMatch};

#[derive(Parser, Debug)]
#[command(name = "declgrep", version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Compiler driver used for the AST dump.
    #[arg(long, default_value = "clang++")]
    compiler: String,

    /// Reuse a previously parsed tree for the file instead of reparsing.
    #[arg(long)]
    cached: bool,

    /// Emit results as JSON instead of colored text.
    #[arg(long)]
    json: bool,

    #[arg(long, short)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find function declarations by name pattern.
    Fun {
        file: PathBuf,
        pattern: String,
    },
    /// Find class, struct and class template declarations by name pattern.
    Cls {
        file: PathBuf,
        pattern: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("declgrep=debug")
    } else {
        EnvFilter::new("declgrep=warn")
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let searcher = SearchProvider::new(Arc::new(ClangFrontend::new(&args.compiler)));

    let (result, file, kind_label) = match &args.command {
        Command::Fun {
            file,
            pattern,
        } => (searcher.find_functions(file, pattern, args.cached), file, "Fun"),
        Command::Cls {
            file,
            pattern,
        } => (searcher.find_classlike(file, pattern, args.cached), file, "Class"),
    };

    let entries = match result {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        },
    };

    if args.json {
        match serde_json::to_string_pretty(&entries) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            },
        }
        return ExitCode::SUCCESS;
    }

    if entries.is_empty() {
        println!("Nothing found");
        return ExitCode::SUCCESS;
    }

    println!("{}", file.display().green());
    for entry in &entries {
        println!("\t{}", render_entry(entry, kind_label));
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
#[path = "../tests/src/cli_tests.rs"]
mod tests;

/// `Kind [line:col]: name` with the matched sub-range highlighted.
fn render_entry(
    entry: &SymbolMatch,
    kind_label: &str,
) -> String {
    let before = &entry.name[..entry.span.start];
    let matched = &entry.name[entry.span.start..entry.span.end];
    let after = &entry.name[entry.span.end..];
    format!(
        "{kind_label} [{}:{}]: {before}{}{after}",
        entry.line,
        entry.col,
        matched.yellow(),
    )
}
