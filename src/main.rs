//! `dressing` - create and inspect wardrobe projects from the command line.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dressing::cli::{create_project, format_summary, open_project, render_bom, NewProjectOptions};
use dressing::{init_logging, Config};
use dressing_designer::serialization::FILE_EXTENSION;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "dressing", version, about = "Parametric wardrobe and dressing designer")]
struct Cli {
    /// Configuration file (JSON or TOML); defaults to the platform config directory
    #[arg(long, global = true, env = "DRESSING_CONFIG")]
    config: Option<PathBuf>,

    /// Log committed changes and regeneration details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a project and save it
    New(NewArgs),

    /// Print the bill of materials of a project
    Bom(BomArgs),

    /// Print size, zones, cost, weight and validation of a project
    Summary(SummaryArgs),

    /// List the available templates
    Templates,
}

#[derive(Args)]
struct NewArgs {
    /// Output file
    output: PathBuf,

    /// Project name
    #[arg(short, long, default_value = "")]
    name: String,

    /// Template to start from (e.g. dressing_three_zones)
    #[arg(short, long)]
    template: Option<String>,

    /// Overall width, in the configured measurement system
    #[arg(long)]
    width: Option<String>,

    /// Overall height
    #[arg(long)]
    height: Option<String>,

    /// Overall depth
    #[arg(long)]
    depth: Option<String>,

    /// Carcass material id
    #[arg(short, long)]
    material: Option<String>,
}

#[derive(Args)]
struct BomArgs {
    /// Project file
    file: PathBuf,

    /// Merge identical parts into one line
    #[arg(short, long)]
    aggregate: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SummaryArgs {
    /// Project file
    file: PathBuf,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => dressing_settings::default_config_path()?,
    };
    debug!("Using config {}", path.display());
    Config::load_or_default(&path).with_context(|| format!("Invalid config {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::New(args) => {
            let mut output = args.output;
            if output.extension().is_none() {
                output.set_extension(FILE_EXTENSION);
            }

            let mut orchestrator = create_project(
                &config,
                &NewProjectOptions {
                    name: args.name,
                    template: args.template,
                    width: args.width,
                    height: args.height,
                    depth: args.depth,
                    material: args.material,
                },
            )?;
            orchestrator.save_to_file(&output)?;
            println!(
                "Saved {} ({} components) to {}",
                orchestrator.project().name,
                orchestrator.project().components().len(),
                output.display()
            );
        }
        Commands::Bom(args) => {
            let orchestrator = open_project(&config, &args.file)?;
            print!("{}", render_bom(orchestrator.project(), args.aggregate, args.json)?);
        }
        Commands::Summary(args) => {
            let orchestrator = open_project(&config, &args.file)?;
            print!(
                "{}",
                format_summary(
                    orchestrator.project(),
                    orchestrator.catalog(),
                    config.defaults.measurement_system
                )
            );
        }
        Commands::Templates => {
            for template in dressing_designer::ProjectTemplate::all() {
                println!(
                    "{:<22} {}",
                    template.as_str(),
                    template.description()
                );
            }
        }
    }

    Ok(())
}
