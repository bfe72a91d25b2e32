//! Command-line glue: positional render arguments, flags and help text.
//!
//! The positional layout is `code size height page delay start end`. Any
//! position may be the literal `undefined` to keep its default.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::render::RenderOptions;

pub const USAGE: &str = "\
fumen-render: draw a fumen as an image.
Usage: fumen-render [--out PATH] [--transparent] fumen_code {size=22} {height=undefined} {page_index=0} {delay=500} {start=0} {end=undefined}
Optional arguments are in {braces}; `undefined` keeps the default. The default usage is to just provide the fumen code.
Providing page_index renders a PNG of that single page; otherwise a multi-page fumen becomes a looping GIF.";

const UNDEFINED: &str = "undefined";

/// One fumen to render and how to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Raw argument: a code, a fumen link or a short link
    pub fumen: String,
    pub options: RenderOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Render(RenderRequest),
}

/// Parsed process arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub command: Command,
    pub out: Option<PathBuf>,
}

fn positional<T: std::str::FromStr>(args: &[String], i: usize, name: &str) -> Result<Option<T>> {
    match args.get(i).map(String::as_str) {
        None | Some(UNDEFINED) => Ok(None),
        Some(v) => v
            .parse::<T>()
            .map(Some)
            .map_err(|_| anyhow!("invalid {} value: {}", name, v)),
    }
}

impl RenderRequest {
    /// Parse positional arguments on top of `defaults`.
    pub fn from_args(args: &[String], defaults: &RenderOptions) -> Result<Command> {
        let Some(fumen) = args.first() else {
            return Ok(Command::Help);
        };
        if fumen.eq_ignore_ascii_case("help") {
            return Ok(Command::Help);
        }

        let mut options = defaults.clone();
        if let Some(size) = positional(args, 1, "size")? {
            options.tile_size = size;
        }
        if let Some(height) = positional(args, 2, "height")? {
            options.visible_rows = Some(height);
        }
        if let Some(page) = positional(args, 3, "page_index")? {
            options.page = page;
        }
        if let Some(delay) = positional(args, 4, "delay")? {
            options.delay_ms = delay;
        }
        if let Some(start) = positional(args, 5, "start")? {
            options.start = start;
        }
        if let Some(end) = positional(args, 6, "end")? {
            options.end = Some(end);
        }
        if args.len() > 7 {
            return Err(anyhow!("unexpected argument: {}", args[7]));
        }

        Ok(Command::Render(RenderRequest {
            fumen: fumen.clone(),
            options,
        }))
    }
}

/// Split `--out PATH`, `--transparent` and `--help` from the positional arguments.
pub fn parse_cli(args: &[String], defaults: &RenderOptions) -> Result<Cli> {
    let mut out = None;
    let mut defaults = defaults.clone();
    let mut rest = Vec::with_capacity(args.len());
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--out" | "-o" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --out"))?;
                out = Some(PathBuf::from(v));
            }
            "--transparent" => defaults.transparent = true,
            "--help" | "-h" => {
                return Ok(Cli {
                    command: Command::Help,
                    out,
                })
            }
            other if other.starts_with("--") => {
                return Err(anyhow!("unknown argument: {}", other));
            }
            other => rest.push(other.to_string()),
        }
        i += 1;
    }

    Ok(Cli {
        command: RenderRequest::from_args(&rest, &defaults)?,
        out,
    })
}
