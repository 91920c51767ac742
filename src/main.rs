use clap::{Parser, Subcommand};
use diagram_pages::config::{self, ToolConfig};
use diagram_pages::generate::GenerateOptions;
use diagram_pages::links::{LinkRewrite, RewriteError};
use diagram_pages::mapper::MapOptions;
use diagram_pages::render::RenderContext;
use diagram_pages::run::{self, Mode, Outcome};
use diagram_pages::{logging, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "diagram-pages")]
#[command(about = "Generate and patch the HTML pages behind an interactive diagram")]
#[command(long_about = "\
Generate and patch the HTML pages behind an interactive diagram

Each clickable element of the diagram links to a page of its own. This tool
creates those pages from a JSON description, keeps their links pointing at
the right place, and produces the navigation table the viewer loads.

Page document (pages.json):

  {
    \"template\": \"<title>{{TITLE}}</title> ...\",   (optional)
    \"pages\": [
      { \"title\": \"Observer Theory\", \"elementId\": \"text-observer\", \"filename\": \"observer.html\" }
    ]
  }

Template placeholders: {{TITLE}}, {{ELEMENT_ID}}, {{TIMESTAMP}}.

Settings are read from diagram-pages.toml when present; flags override it.
Run 'diagram-pages gen-config' to print a documented config file.")]
#[command(version)]
struct Cli {
    /// Config file (optional; defaults apply when it doesn't exist)
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one HTML page per entry of the page document, plus an index
    Generate(GenerateArgs),
    /// Replace a literal string in every .html file of a directory
    RewriteLinks(RewriteArgs),
    /// Turn an element → URL mapping file into the viewer's navigation files
    Map(MapArgs),
    /// Print a stock diagram-pages.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Page document to read
    #[arg(long)]
    input: Option<PathBuf>,
    /// Directory to write pages into
    #[arg(long)]
    output: Option<PathBuf>,
    /// Don't write index.html
    #[arg(long)]
    no_index: bool,
}

#[derive(clap::Args)]
struct RewriteArgs {
    /// Directory whose .html files are rewritten
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Named rewrite: fix-back-links or point-to-diagram
    #[arg(long, conflicts_with_all = ["from", "to"])]
    preset: Option<String>,
    /// Text to replace (literal, not a regex)
    #[arg(long, requires = "to", required_unless_present = "preset")]
    from: Option<String>,
    /// Replacement text
    #[arg(long, requires = "from")]
    to: Option<String>,
}

#[derive(clap::Args)]
struct MapArgs {
    /// Mapping file: { "text-observer": { "name": "...", "url": "..." }, ... }
    #[arg(long)]
    mappings: PathBuf,
    /// Where to write navigation_dictionary.json and navigation_code.js
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let tool_config = config::load_config(&cli.config)?;
    let Some(mode) = resolve_mode(cli.command, &tool_config)? else {
        return Ok(());
    };

    match run::execute(&mode, &RenderContext::now())? {
        Outcome::Generated(report) => output::print_generate_report(&report),
        Outcome::Rewrote(report) => output::print_rewrite_report(&report),
        Outcome::Mapped(report) => output::print_map_report(&report),
    }

    Ok(())
}

/// Combine flags with config values; flags win. `None` for commands that
/// don't run a tool.
fn resolve_mode(command: Command, config: &ToolConfig) -> Result<Option<Mode>, RewriteError> {
    let mode = match command {
        Command::Generate(args) => Mode::Generate(GenerateOptions {
            input: args.input.unwrap_or_else(|| config.generate.input.clone()),
            output_dir: args.output.unwrap_or_else(|| config.generate.output.clone()),
            write_index: config.generate.write_index && !args.no_index,
        }),
        Command::RewriteLinks(args) => {
            let rewrite = match (args.preset, args.from, args.to) {
                (Some(preset), _, _) => LinkRewrite::preset(&preset)?,
                (None, Some(from), Some(to)) => LinkRewrite::new(from, to)?,
                _ => return Err(RewriteError::EmptySource),
            };
            Mode::RewriteLinks {
                dir: args.dir.unwrap_or_else(|| config.links.dir.clone()),
                rewrite,
            }
        }
        Command::Map(args) => Mode::Map(MapOptions {
            mappings: args.mappings,
            out_dir: args.out_dir.unwrap_or_else(|| config.mapper.out_dir.clone()),
        }),
        Command::GenConfig => return Ok(None),
    };
    Ok(Some(mode))
}
