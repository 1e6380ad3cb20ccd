use anyhow::Result;
use clap::{Parser, Subcommand};
use gitlanes::ColorMode;
use gitlanes::areas::history::STDIN_SOURCE;
use gitlanes::areas::viewer::GraphViewer;
use gitlanes::artifacts::core::{PagerWriter, should_page};
use gitlanes::artifacts::render::row_height::{
    DEFAULT_COLUMN_WIDTH, DEFAULT_EXPANDED_ROW_HEIGHT, DEFAULT_ROW_HEIGHT,
};
use gitlanes::commands::plumbing::layout::LayoutDumpOptions;
use gitlanes::commands::porcelain::log::LogOptions;
use gitlanes::commands::porcelain::svg::SvgOptions;
use minus::Pager;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gitlanes",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Lay out commit histories as branch/merge graphs",
    long_about = "This tool reads a commit history listing, one commit per line as printed by \
    `git log --format='%H %P%x09%s'`, and lays it out as lanes and routes. \
    The layout can be shown as a text graph, rendered to SVG, or dumped raw.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "log",
        about = "Show the history as a text graph",
        long_about = "This command draws the history as a text graph in the style of `git log --graph`, \
        followed by the commit id and subject of every commit."
    )]
    Log {
        #[arg(index = 1, default_value = STDIN_SOURCE, help = "History file ('-' for stdin)")]
        input: String,
        #[arg(long, help = "Show abbreviated commit ids")]
        abbrev_commit: bool,
        #[arg(long, value_enum, default_value_t = ColorMode::Auto, help = "When to colour the graph")]
        color: ColorMode,
        #[arg(long, help = "Do not pipe the output into a pager")]
        no_pager: bool,
    },
    #[command(
        name = "svg",
        about = "Render the history graph as SVG",
        long_about = "This command renders the history graph as a standalone SVG document. \
        Commits named with --expand get a taller row."
    )]
    Svg {
        #[arg(index = 1, default_value = STDIN_SOURCE, help = "History file ('-' for stdin)")]
        input: String,
        #[arg(short, long, help = "Write the SVG document to this file instead of stdout")]
        output: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_ROW_HEIGHT, help = "Height of a row")]
        row_height: f64,
        #[arg(long, default_value_t = DEFAULT_EXPANDED_ROW_HEIGHT, help = "Height of an expanded row")]
        expanded_height: f64,
        #[arg(long, default_value_t = DEFAULT_COLUMN_WIDTH, help = "Distance between two columns")]
        column_width: f64,
        #[arg(long = "expand", value_name = "OID", help = "Draw this commit with an expanded row")]
        expand: Vec<String>,
    },
    #[command(
        name = "layout",
        about = "Print the raw layout of every commit",
        long_about = "This command prints the column, lane, vertical offset and routes computed for \
        every commit, one line per commit."
    )]
    Layout {
        #[arg(index = 1, default_value = STDIN_SOURCE, help = "History file ('-' for stdin)")]
        input: String,
        #[arg(long, default_value_t = DEFAULT_ROW_HEIGHT, help = "Height of a row")]
        row_height: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Log {
            input,
            abbrev_commit,
            color,
            no_pager,
        } => {
            let colorize = color.should_colorize();
            colored::control::set_override(colorize);
            let opts = LogOptions::new(abbrev_commit, colorize);

            if should_page(no_pager) {
                let pager = Pager::new();
                let viewer = GraphViewer::open(&input, Box::new(PagerWriter::new(pager.clone())))?;
                viewer.log(&opts)?;
                minus::page_all(pager)?;
            } else {
                let viewer = GraphViewer::open(&input, Box::new(std::io::stdout()))?;
                viewer.log(&opts)?;
            }
        }
        Commands::Svg {
            input,
            output,
            row_height,
            expanded_height,
            column_width,
            expand,
        } => {
            let viewer = GraphViewer::open(&input, Box::new(std::io::stdout()))?;
            let opts = SvgOptions::new(row_height, expanded_height, column_width, expand, output);

            viewer.svg(&opts)?
        }
        Commands::Layout { input, row_height } => {
            let viewer = GraphViewer::open(&input, Box::new(std::io::stdout()))?;

            viewer.dump_layout(&LayoutDumpOptions::new(row_height))?
        }
    }

    Ok(())
}
