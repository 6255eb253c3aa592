use clap::Parser;
use color_eyre::eyre::{Context, Result};
use mdpage_cli::Cli;
use mdpage_lib::convert::{Conversion, convert};
use mdpage_lib::markdown::highlighting::CodeTheme;
use std::io::{self, Write};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber based on verbosity level.
///
/// Verbosity levels:
/// - 0 (default): WARN only (errors and warnings)
/// - 1 (-v): INFO (pages written)
/// - 2 (-vv): DEBUG (pipeline stages)
/// - 3 (-vvv): TRACE (code block highlighting)
/// - 4+ (-vvvv): TRACE with file/line numbers
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,mdpage=info,mdpage_lib=info".to_string(),
            2 => "info,mdpage=debug,mdpage_lib=debug".to_string(),
            _ => "debug,mdpage=trace,mdpage_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose > 0)
                .with_level(true)
                .with_thread_ids(false)
                .with_file(verbose >= 4)
                .with_line_number(verbose >= 4)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Handle --list-themes first (no input needed)
    if cli.list_themes {
        list_themes();
        return Ok(());
    }

    let Some(input) = cli.input.as_deref() else {
        color_eyre::eyre::bail!("No input file provided. Use `mdpage --help` for usage.");
    };

    let options = cli.convert_options();
    let outcome = convert(input, cli.output.as_deref(), &options)
        .wrap_err_with(|| format!("Failed to convert {:?}", input))?;

    match outcome {
        Conversion::Html(html) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(html.as_bytes())
                .wrap_err("Failed to write to stdout")?;
        }
        Conversion::Written(path) => {
            eprintln!("Wrote {}", path.display());
        }
        // Already reported by the converter.
        Conversion::SourceMissing(_) => std::process::exit(1),
    }

    Ok(())
}

/// Lists all available code themes with descriptions.
fn list_themes() {
    println!("Available code themes:\n");
    for theme in CodeTheme::all() {
        println!("  {:20} {}", theme.kebab_name(), theme.description());
    }
    println!("\nUse --code-theme <name> to pick one");
}
