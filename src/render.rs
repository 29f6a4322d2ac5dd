//! Read a tutorial, parse it and produce output: a rendered template or the
//! parsed document as JSON. Optionally watch the inputs and re-render.

use anyhow::{Context, Result};
use colored::Colorize;
use notify::{EventKind, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tutorial_parse::{CommonMark, MarkdownOptions, Templates};

/// What to produce from the parsed document.
pub enum OutputKind {
    /// Pretty-printed document JSON.
    Json,
    /// Render the template `name`, resolved against `dir`.
    Template { dir: PathBuf, name: String },
}

pub struct RenderOpts {
    pub input: PathBuf,
    pub kind: OutputKind,
    pub markdown: MarkdownOptions,
    pub out: Option<PathBuf>,
    pub quiet: bool,
}

/// Parse the input file and produce the output text.
pub fn render_document(opts: &RenderOpts) -> Result<String> {
    let content = std::fs::read_to_string(&opts.input)
        .with_context(|| format!("Failed to read '{}'", opts.input.display()))?;

    let renderer = CommonMark::new(opts.markdown);
    let doc = tutorial_parse::parse_with(&content, &renderer)
        .with_context(|| format!("Failed to parse '{}'", opts.input.display()))?;
    info!(
        file = %opts.input.display(),
        steps = doc.steps.len(),
        "parsed tutorial"
    );

    match &opts.kind {
        OutputKind::Json => Ok(doc.to_json()?),
        OutputKind::Template { dir, name } => {
            let templates = Templates::from_dir(dir);
            let output = doc
                .render(&templates, name)
                .with_context(|| format!("Failed to render template '{}'", name))?;
            Ok(output)
        }
    }
}

/// Render once, writing to `--out` or stdout.
pub fn handle_render(opts: &RenderOpts) -> Result<()> {
    let output = render_document(opts)?;

    match &opts.out {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            if !opts.quiet {
                eprintln!("{} {}", "Rendered".green().bold(), path.display());
            }
        }
        None => println!("{output}"),
    }

    Ok(())
}

/// Files whose changes trigger a re-render.
fn watched_files(opts: &RenderOpts) -> Result<Vec<PathBuf>> {
    let mut files = vec![opts.input.clone()];
    if let OutputKind::Template { dir, name } = &opts.kind {
        files.push(dir.join(name));
    }

    files
        .iter()
        .map(|f| {
            std::fs::canonicalize(f)
                .with_context(|| format!("Cannot resolve path '{}'", f.display()))
        })
        .collect()
}

/// Minimum gap between two renders; editors often save in several writes.
const DEBOUNCE: Duration = Duration::from_millis(200);
/// Pause before re-reading so a save in progress can land.
const SETTLE: Duration = Duration::from_millis(50);

/// True when `event` writes to one of `files` (canonical paths).
fn should_rerender(event: &notify::Event, files: &[PathBuf]) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.canonicalize().is_ok_and(|p| files.contains(&p)))
}

/// Render, then re-render whenever the input or the template is saved.
/// Runs until the watcher goes away or the process is interrupted.
pub fn watch_and_render(opts: &RenderOpts) -> Result<()> {
    if let Err(e) = handle_render(opts) {
        eprintln!("{} {:#}", "Render error:".red().bold(), e);
    }

    let files = watched_files(opts)?;

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    let mut dirs: Vec<&Path> = files.iter().filter_map(|f| f.parent()).collect();
    dirs.sort();
    dirs.dedup();
    for dir in dirs {
        debug!(dir = %dir.display(), "watching");
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
    }

    if !opts.quiet {
        eprintln!(
            "{} {} (Ctrl+C to stop)",
            "Watching".cyan().bold(),
            opts.input.display()
        );
    }

    let mut last_render: Option<Instant> = None;
    for event in rx.iter().filter(|event| should_rerender(event, &files)) {
        if last_render.is_some_and(|at| at.elapsed() <= DEBOUNCE) {
            debug!(paths = ?event.paths, "skipping event inside debounce window");
            continue;
        }

        std::thread::sleep(SETTLE);
        match handle_render(opts) {
            Ok(()) => last_render = Some(Instant::now()),
            Err(e) => eprintln!("{} {:#}", "Render error:".red().bold(), e),
        }
    }

    Ok(())
}
