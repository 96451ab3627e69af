// Chunk: docs/chunks/screen_layout - Terminal viewer over the screen layout
//!
//! lite-layout-view: prints one screenful of a file through the layout engine.
//!
//! ```text
//! lite-layout-view <file> [--wrap] [--csv | --tsv] [--config <path>]
//!                  [--cols <n>] [--lines <n>] [--top <line>]
//! ```
//!
//! The terminal is modelled as a monospace screen of `cols × lines` cells, so
//! wrapped output shows exactly where the engine splits each row. Set
//! `RUST_LOG=lite_layout=debug` to watch relayouts.

use std::process::ExitCode;
use std::rc::Rc;
use std::{env, fs};

use lite_layout::{LayoutConfig, LayoutMode, ScreenLayout};
use lite_layout_text::{MonospaceMetrics, Text, TextContent};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: lite-layout-view <file> [--wrap] [--csv | --tsv] [--config <path>] \
                     [--cols <n>] [--lines <n>] [--top <line>]";

/// Parsed command line.
struct Args {
    path: String,
    tag: Option<&'static str>,
    config: Option<String>,
    cols: usize,
    lines: usize,
    top: usize,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args {
        path: String::new(),
        tag: None,
        config: None,
        cols: 80,
        lines: 24,
        top: 0,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--wrap" => parsed.tag = Some(""),
            "--csv" => parsed.tag = Some("csv"),
            "--tsv" => parsed.tag = Some("tsv"),
            "--config" => parsed.config = Some(value(&mut args, "--config")?),
            "--cols" => parsed.cols = number(&mut args, "--cols")?,
            "--lines" => parsed.lines = number(&mut args, "--lines")?,
            "--top" => parsed.top = number(&mut args, "--top")?,
            flag if flag.starts_with("--") => return Err(format!("unknown option {}", flag)),
            path => parsed.path = path.to_string(),
        }
    }
    if parsed.path.is_empty() {
        return Err("missing file argument".to_string());
    }
    Ok(parsed)
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("{} needs a value", flag))
}

fn number(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<usize, String> {
    let raw = value(args, flag)?;
    raw.parse()
        .map_err(|_| format!("{} expects a number, got {:?}", flag, raw))
}

fn run(args: Args) -> Result<(), String> {
    let config = match &args.config {
        Some(path) => LayoutConfig::load(path).map_err(|e| e.to_string())?,
        None => LayoutConfig::default(),
    };
    let text = fs::read_to_string(&args.path)
        .map_err(|e| format!("failed to read {}: {}", args.path, e))?;

    // One cell per character, one line per terminal row
    let metrics = Rc::new(MonospaceMetrics::new(1.0, 1.0));
    let mut screen = ScreenLayout::with_config(TextContent::from(text), metrics, config);
    screen.set_screen_size(args.cols as f32, args.lines as f32);
    if let Some(tag) = args.tag {
        screen.toggle_layout(tag);
        if screen.mode() == LayoutMode::Plain {
            tracing::warn!(tag, "layout request refused, showing plain layout");
        }
    }
    screen.scroll_at(args.top);

    tracing::info!(
        path = %args.path,
        rows = screen.row_size(),
        lines = screen.line_size(),
        mode = ?screen.mode(),
        "rendering"
    );

    let gutter = screen.row_size().to_string().len();
    for (label, line) in screen.line_numbers().iter().zip(screen.texts()) {
        println!("{:>width$} | {}", label.value(), render(line), width = gutter);
    }
    Ok(())
}

/// Lays a display line out on character cells using its advances.
///
/// Tabs and aligned column separators are expanded to the spaces they
/// occupy; terminators are dropped.
fn render(line: &Text) -> String {
    let mut out = String::with_capacity(line.value().len());
    for (c, &advance) in line.value().chars().zip(line.advances()) {
        let cells = advance.round() as usize;
        match c {
            '\r' | '\n' => {}
            '\t' => out.extend(std::iter::repeat(' ').take(cells)),
            _ => {
                out.push(c);
                out.extend(std::iter::repeat(' ').take(cells.saturating_sub(1)));
            }
        }
    }
    out
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = parse_args(env::args().skip(1)).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("lite-layout-view: {}", message);
            eprintln!("{}", USAGE);
            ExitCode::FAILURE
        }
    }
}
