use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod render;

use render::{OutputKind, RenderOpts};

#[derive(Parser)]
#[command(
    name = "tutorialize",
    version,
    about = "Generate a tutorial using a Markdown formatted input file and Jinja2-style templates"
)]
struct Cli {
    /// Path to the tutorial source file
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Template file, resolved against the template directory (default: current directory)
    #[arg(short = 't', long = "template", value_name = "TEMPLATE_FILE")]
    template_file: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Print the parsed document as JSON instead of rendering a template
    #[arg(long, conflicts_with = "template_file")]
    json: bool,

    /// Re-render whenever the input or template changes
    #[arg(short, long, requires = "out")]
    watch: bool,

    /// Path to a tutorialize.json config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Uses `RUST_LOG` if set, otherwise a level derived from the verbosity flags.
/// Logs go to stderr so stdout carries only the rendered output.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // A subscriber may already be installed (e.g. by a test harness); keep it.
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::debug!(error = %e, "tracing subscriber already set");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = config::load_config(cli.config.as_deref(), Path::new("."))?;

    let kind = if cli.json {
        OutputKind::Json
    } else {
        let Some(name) = cli.template_file.or(config.template) else {
            bail!(
                "no template given: pass -t <TEMPLATE_FILE> or set \"template\" in {}",
                config::CONFIG_FILE
            );
        };
        OutputKind::Template {
            dir: config.template_dir,
            name,
        }
    };

    let opts = RenderOpts {
        input: cli.input_file,
        kind,
        markdown: config.markdown,
        out: cli.out,
        quiet: cli.quiet,
    };

    if cli.watch {
        render::watch_and_render(&opts)?;
    } else {
        render::handle_render(&opts)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_template_flag() {
        let cli = Cli::try_parse_from(["tutorialize", "in.tut", "-t", "page.html"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("in.tut"));
        assert_eq!(cli.template_file.as_deref(), Some("page.html"));
        assert!(!cli.watch);
    }

    #[test]
    fn watch_requires_out() {
        assert!(Cli::try_parse_from(["tutorialize", "in.tut", "--watch"]).is_err());
        assert!(Cli::try_parse_from(["tutorialize", "in.tut", "--watch", "-o", "out.html"]).is_ok());
    }

    #[test]
    fn init_logging_twice_is_harmless() {
        init_logging(false, true);
        init_logging(true, false);
    }

    #[test]
    fn json_conflicts_with_template() {
        assert!(Cli::try_parse_from(["tutorialize", "in.tut", "--json", "-t", "x"]).is_err());
    }
}
