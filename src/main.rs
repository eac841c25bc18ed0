use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod carousel;
mod constants;
mod content;
mod error;
mod render;
mod resolve;
mod session;
mod viewer;

use crate::content::PageContent;
use crate::resolve::{FsResolver, ImageResolver};
use crate::session::Session;

#[derive(Debug, Parser)]
#[command(name = "findings-deck", version, about = "Project results page with independent image carousels")]
struct Cli {
    /// Page content as TOML. The built-in project report is used when omitted.
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Directory image references are resolved against.
    /// Defaults to the content file's directory, or the working directory.
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// Replace the embedded overview video.
    #[arg(long, global = true)]
    video_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the page as a single HTML file.
    Render {
        /// Output file. Defaults to index.html in the asset directory.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Advance a gallery before rendering: `ID` or `ID=N`. Repeatable.
        #[arg(long = "advance", value_name = "ID[=N]", value_parser = parse_steps)]
        advance: Vec<(String, usize)>,
    },
    /// Open the interactive viewer.
    View,
    /// Validate the content and report missing images.
    Check,
}

fn parse_steps(arg: &str) -> Result<(String, usize), String> {
    match arg.split_once('=') {
        None => Ok((arg.to_string(), 1)),
        Some((id, n)) => n
            .parse()
            .map(|n| (id.to_string(), n))
            .map_err(|e| format!("invalid step count `{n}`: {e}")),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "findings_deck=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let mut content = match &cli.content {
        Some(path) => PageContent::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => PageContent::default_report().context("built-in report is invalid")?,
    };
    if let Some(url) = &cli.video_url {
        content.override_video_url(url);
    }

    let assets = match (&cli.assets, &cli.content) {
        (Some(dir), _) => dir.clone(),
        (None, Some(file)) => file.parent().map(Path::to_path_buf).unwrap_or_default(),
        (None, None) => PathBuf::from("."),
    };
    let resolver = FsResolver::new(assets);
    let mut session = Session::from_content(&content)?;

    match cli.command {
        Command::Render { out, advance } => {
            for (id, steps) in advance {
                session.advance_by(&id, steps)?;
            }
            let out = out.unwrap_or_else(|| resolver.root().join("index.html"));
            let page_dir = match out.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir,
                _ => Path::new("."),
            };
            let root = resolver.root().to_path_buf();
            let resolver = resolver
                .linked_from(page_dir)
                .with_context(|| format!("linking images from {} to {}", page_dir.display(), root.display()))?;
            let html = render::render_page(&content, &session, &resolver);
            fs::write(&out, html).with_context(|| format!("writing {}", out.display()))?;
            info!(path = %out.display(), "page written");
            Ok(0)
        }
        Command::View => {
            viewer::run(&content, session, &resolver)?;
            Ok(0)
        }
        Command::Check => Ok(check(&content, &resolver)),
    }
}

fn check(content: &PageContent, resolver: &FsResolver) -> i32 {
    let mut missing = 0;
    for image in content.image_refs() {
        match resolver.resolve(image) {
            Ok(_) => println!("ok       {image}"),
            Err(e) => {
                missing += 1;
                println!("missing  {image} ({})", e.reason);
            }
        }
    }
    if missing > 0 {
        warn!(missing, root = %resolver.root().display(), "some images could not be found");
        1
    } else {
        info!(root = %resolver.root().display(), "all images found");
        0
    }
}
