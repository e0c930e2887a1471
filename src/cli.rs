/// CLI argument parsing and command handling.
use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use cardtint::{
    color::{self, ChannelSource, RandomChannels},
    config::Config,
    page::{self, Host},
    preview::{self, PreviewPage, PreviewServer},
};

#[derive(Parser)]
#[command(
    name = "cardtint",
    version,
    about = "cardtint - random background colors for card elements"
)]
pub struct Cli {
    /// Path to the config file (defaults to <config dir>/cardtint/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a preview page whose cards are colored on content load
    Render {
        #[command(flatten)]
        page: PageArgs,
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
    /// Serve the preview page on localhost
    Serve {
        #[command(flatten)]
        page: PageArgs,
        /// Port to listen on; 0 picks a free one
        #[arg(short = 'p', long = "port", default_value_t = 0)]
        port: u16,
    },
    /// Print random card colors
    Color {
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Debug)]
pub struct PageArgs {
    /// One card per label; placeholders are used when empty
    pub labels: Vec<String>,
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,
    /// Class marker of the cards to color
    #[arg(long = "class")]
    pub class: Option<String>,
    /// Number of placeholder cards
    #[arg(long = "count")]
    pub count: Option<usize>,
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Execute a CLI command (render, serve or color).
pub fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Render { page, output } => handle_render(page, output, config)?,
        Command::Serve { page, port } => handle_serve(page, port, config)?,
        Command::Color { count, seed } => handle_color(count, seed)?,
    }
    Ok(())
}

fn channel_source(seed: Option<u64>) -> Box<dyn ChannelSource> {
    match seed {
        Some(seed) => Box::new(RandomChannels::seeded(seed)),
        None => Box::new(RandomChannels::thread()),
    }
}

/// Build the page and fire content-loaded so its cards carry colors.
fn load_page(args: PageArgs, config: &Config) -> PreviewPage {
    let class = args.class.unwrap_or_else(|| config.class_name.clone());
    let title = args.title.unwrap_or_else(|| config.title.clone());
    let labels = if args.labels.is_empty() {
        preview::placeholder_labels(args.count.unwrap_or(config.card_count))
    } else {
        args.labels
    };

    let mut host = Host::new(PreviewPage::from_labels(title, &class, labels));
    let mut source = channel_source(args.seed);
    host.on_content_loaded(move |doc| {
        page::init_cards(doc, &class, source.as_mut());
    });
    host.finish_loading();
    host.into_document()
}

fn handle_render(args: PageArgs, output: Option<PathBuf>, config: &Config) -> Result<()> {
    let page = load_page(args, config);
    match output {
        Some(path) => {
            let file = std::fs::File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            page.write_to(file)?;
            info!(path = %path.display(), "wrote preview page");
        }
        None => page.write_to(std::io::stdout().lock())?,
    }
    Ok(())
}

fn handle_serve(args: PageArgs, port: u16, config: &Config) -> Result<()> {
    let server = PreviewServer::bind(&load_page(args, config), port)?;
    if let Some(addr) = server.local_addr() {
        println!("Preview available at http://{addr}/ (Ctrl-C to stop)");
    }
    server.run();
    Ok(())
}

fn handle_color(count: usize, seed: Option<u64>) -> Result<()> {
    let mut source = channel_source(seed);
    let mut stdout = std::io::stdout().lock();
    for _ in 0..count {
        writeln!(stdout, "{}", color::random_color(source.as_mut()))?;
    }
    Ok(())
}
