use clap::{Parser, Subcommand};
use fontface_gen::config::{self, Overrides};
use fontface_gen::generate::{self, FontFaceGenerator};
use fontface_gen::store::{self, JsonWeightStore};
use fontface_gen::{output, scan, weights};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Flags shared by commands that classify a font directory.
#[derive(clap::Args, Clone)]
struct SourceArgs {
    /// Directory containing the font files
    source: PathBuf,

    /// Font family name (overrides fontface.toml)
    #[arg(long)]
    family: Option<String>,

    /// URL prefix for font sources (overrides fontface.toml)
    #[arg(long)]
    base_url: Option<String>,

    /// Merge custom weights from the weights file
    #[arg(long)]
    custom_weights: bool,
}

fn version_string() -> &'static str {
    let on_tag = env!("FONTFACE_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("FONTFACE_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "fontface-gen")]
#[command(about = "Generate @font-face CSS from a directory of font files")]
#[command(long_about = "\
Generate @font-face CSS from a directory of font files

Weight and style are inferred from filenames. The name (without extension)
is split on '-' and '_'; any part containing 'italic' makes the file italic,
and parts matching a weight name set the weight (the last match wins):

  Roboto-Regular.woff2     → 400 normal
  Roboto-Bold.ttf          → 700 normal
  Roboto_BoldItalic.woff   → 700 italic
  Roboto.ttf               → 400 normal (no weight name)

Only .woff2, .woff, .ttf and .eot files are used. Files sharing a weight and
style become one @font-face block with sources ordered woff2, woff, truetype,
embedded-opentype.

Settings can live in <SOURCE>/fontface.toml; run 'fontface-gen gen-config'
for a documented template.")]
#[command(version = version_string())]
struct Cli {
    /// Custom weights JSON file (overrides fontface.toml)
    #[arg(long, global = true)]
    weights_file: Option<PathBuf>,

    /// Log classification details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the stylesheet (printed to stdout unless --output is given)
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Directory to write <family>.css into
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show how each file would be grouped, without writing anything
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Inspect or edit custom weight names
    Weights {
        #[command(subcommand)]
        action: WeightsAction,
    },
    /// Print a stock fontface.toml with all options documented
    GenConfig,
}

#[derive(Subcommand)]
enum WeightsAction {
    /// List stock and custom weights
    List,
    /// Print the stored custom weights as JSON
    Custom,
    /// Add or replace a custom weight, e.g. `set Book 350`
    Set { name: String, weight: String },
    /// Remove a custom weight
    Remove { name: String },
    /// Replace custom weights with Book=350, Heavy=850, ExtraBlack=950
    Reset,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Generate { source, output } => {
            let run = run_generation(&source, cli.weights_file.as_deref())?;
            let css = run.generator.generate_css(&run.font_family);
            match output {
                Some(dir) => {
                    std::fs::create_dir_all(&dir)?;
                    let css_path = dir.join(generate::css_filename(&run.font_family));
                    std::fs::write(&css_path, &css)?;
                    output::print_generate_output(
                        &run.generator.sorted_groups(),
                        run.generator.skipped(),
                        Some(&css_path),
                    );
                }
                None => println!("{}", css),
            }
        }
        Command::Check { source } => {
            let run = run_generation(&source, cli.weights_file.as_deref())?;
            output::print_generate_output(
                &run.generator.sorted_groups(),
                run.generator.skipped(),
                None,
            );
        }
        Command::Weights { action } => {
            let mut weight_store = cli
                .weights_file
                .map(JsonWeightStore::new)
                .unwrap_or_default();
            match action {
                WeightsAction::List => {
                    let custom = store::custom_weights(&weight_store)?;
                    output::print_weights_output(&weights::weight_listing(&custom));
                }
                WeightsAction::Custom => {
                    let custom = store::custom_weights(&weight_store)?;
                    println!("{}", serde_json::to_string_pretty(&custom)?);
                }
                WeightsAction::Set { name, weight } => {
                    store::set_custom_weight(&mut weight_store, &name, &weight)?;
                    println!("Saved {} = {}", name.trim(), weight.trim());
                }
                WeightsAction::Remove { name } => {
                    if store::remove_custom_weight(&mut weight_store, &name)? {
                        println!("Removed {}", name.trim());
                    } else {
                        println!("No custom weight named {}", name.trim());
                    }
                }
                WeightsAction::Reset => {
                    let custom = store::reset_custom_weights(&mut weight_store)?;
                    println!("{}", serde_json::to_string_pretty(&custom)?);
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// A populated generator plus the family it should render for.
struct Generation {
    font_family: String,
    generator: FontFaceGenerator,
}

/// Resolve config, load the weight table, scan and classify.
fn run_generation(
    args: &SourceArgs,
    weights_file: Option<&Path>,
) -> Result<Generation, Box<dyn std::error::Error>> {
    let overrides = Overrides {
        font_family: args.family.clone(),
        base_url: args.base_url.clone(),
        use_custom_weights: args.custom_weights,
        weights_file: weights_file.map(|p| p.to_string_lossy().into_owned()),
    };
    let config = config::load_config(&args.source, &overrides)?;

    let mut weight_store = JsonWeightStore::new(&config.weights_file);
    let table = store::load_weight_table(&mut weight_store, config.use_custom_weights);

    let filenames = scan::scan_fonts(&args.source)?;
    let mut generator = FontFaceGenerator::new(table);
    generator.process_files(&filenames, &config.base_url);

    Ok(Generation {
        font_family: config.font_family,
        generator,
    })
}
