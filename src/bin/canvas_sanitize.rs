//! Simple CLI that reads canvas HTML from stdin and writes the sanitized
//! fragment to stdout.
//!
//! Usage: `canvas_sanitize [--markdown | --json [--id F123]] < canvas.html`
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use canvas_sanitizer::encoding::decode_html;
use canvas_sanitizer::{sanitize_bytes, to_markdown, CanvasContent};
use std::env;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_ID: &str = "F0000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Html,
    Markdown,
    Json,
}

struct Args {
    mode: Mode,
    id: String,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        mode: Mode::Html,
        id: DEFAULT_ID.to_string(),
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--markdown" => args.mode = Mode::Markdown,
            "--json" => args.mode = Mode::Json,
            "--id" => {
                args.id = iter.next().ok_or("--id needs a value")?;
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: canvas_sanitize [--markdown | --json [--id F123]] < canvas.html");
            return ExitCode::FAILURE;
        }
    };

    let mut input = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut input) {
        eprintln!("Failed to read from stdin: {err}");
        return ExitCode::FAILURE;
    }

    let output = match args.mode {
        Mode::Json => {
            let record = CanvasContent::from_bytes(&args.id, "", "", &input);
            match serde_json::to_string(&record) {
                Ok(json) => json,
                Err(err) => {
                    eprintln!("Failed to encode JSON: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
        // Markdown reads the raw export: sanitizing drops the `br`s inside
        // `pre`/`blockquote` and the `embedded-link` class the renderer uses.
        Mode::Markdown => match decode_html(&input) {
            Ok(html) => to_markdown(&html),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        Mode::Html => match sanitize_bytes(&input) {
            Ok(html) => html,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
    };

    let mut stdout = io::stdout().lock();
    if writeln!(stdout, "{output}").is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
