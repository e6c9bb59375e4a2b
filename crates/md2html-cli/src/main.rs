use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use md2html_config::Config;
use md2html_engine::{DEFAULT_TEMPLATE, convert};
use std::{
    ffi::OsString,
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

/// Convert a markdown file into a standalone HTML page.
#[derive(Debug, Parser)]
#[command(
    name = "md2html",
    author,
    version,
    about,
    long_about = None,
    after_help = "Long flags may also be written with a single dash, e.g. -input FILE."
)]
struct Args {
    /// Input markdown file [default: stdin]
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output HTML file [default: stdout]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// HTML template using {{ .Title }} and {{ .Content }}
    #[arg(short, long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Title for the HTML document
    #[arg(long)]
    title: Option<String>,

    /// Open the result in the default browser
    #[arg(short, long)]
    preview: bool,

    /// Path to configuration file [default: ~/.config/md2html/config.toml]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse_from(single_dash_longs(std::env::args_os()));
    let config = load_config(args.config.as_deref())?;

    let markdown = read_input(args.input.as_deref())?;
    let template = read_template(args.template.as_deref().or(config.template.as_deref()))?;
    let title = args.title.or(config.title).unwrap_or_default();

    let html = convert(&markdown, &template, &title)?;
    log::debug!("Rendered {} bytes of HTML", html.len());

    let output = match args.output {
        Some(path) => Some(path),
        None if args.preview => Some(preview_path()?),
        None => None,
    };

    match output {
        Some(path) => {
            fs::write(&path, &html)
                .with_context(|| format!("Error writing file {}", path.display()))?;
            println!("HTML written to {}", path.display());
            if args.preview {
                open_in_browser(&path);
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Error writing to stdout")?;
        }
    }

    Ok(())
}

/// Rewrites `-input` and `-title=T` style flags to their `--` forms.
///
/// Only exact long flag names are touched, so short flags with attached
/// values (`-ifile.md`) still parse as before. Nothing after `--` changes.
fn single_dash_longs(raw: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let command = Args::command();
    let longs: Vec<&str> = command.get_arguments().filter_map(|a| a.get_long()).collect();

    let mut out = Vec::new();
    let mut raw = raw.into_iter();
    while let Some(arg) = raw.next() {
        if arg == "--" {
            out.push(arg);
            out.extend(raw.by_ref());
            break;
        }
        let is_single_dash_long = arg.to_str().is_some_and(|s| {
            s.strip_prefix('-')
                .filter(|rest| !rest.starts_with('-'))
                .map(|rest| rest.split_once('=').map_or(rest, |(name, _)| name))
                .is_some_and(|name| longs.contains(&name))
        });
        if is_single_dash_long {
            let mut long = OsString::from("-");
            long.push(&arg);
            out.push(long);
        } else {
            out.push(arg);
        }
    }
    out
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file not found: {}", path.display()),
        },
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Ok(Config::load()?.unwrap_or_default())
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            log::info!("Reading markdown from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Error reading file {}", path.display()))
        }
        None => {
            log::info!("Reading markdown from stdin");
            let mut markdown = String::new();
            io::stdin()
                .read_to_string(&mut markdown)
                .context("Error reading stdin")?;
            Ok(markdown)
        }
    }
}

fn read_template(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            log::info!("Using template {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Error reading template file {}", path.display()))
        }
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

/// A persistent temp file for `--preview` without `--output`.
fn preview_path() -> Result<PathBuf> {
    let file = tempfile::Builder::new()
        .prefix("md2html-")
        .suffix(".html")
        .tempfile()
        .context("Error creating preview file")?;
    let (_, path) = file.keep().context("Error keeping preview file")?;
    Ok(path)
}

fn open_in_browser(path: &Path) {
    log::info!("Opening {} in browser", path.display());
    if let Err(e) = open::that(path) {
        log::warn!("Failed to open browser: {e}");
    }
}
