use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use swagdoc_core::config::{self, CONFIG_FILE_NAME, DocConfig, GroupingStrategy, SampleLanguage};
use swagdoc_core::grouping::group_paths;
use swagdoc_core::parse::{self, spec::SwaggerSpec};
use swagdoc_core::{DocGenerator, output};
use swagdoc_markdown::MarkdownGenerator;

#[derive(Parser)]
#[command(
    name = "swagdoc",
    about = "Markdown API reference generator for Swagger 2.0 documents",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Args)]
struct GenerateArgs {
    /// Path to the Swagger document (JSON, or YAML by extension)
    input: Option<PathBuf>,

    /// Directory the pages are written to [default: current directory]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Example Request language (curl, csharp, java); repeat for several
    #[arg(short = 'l', long = "language", value_parser = parse_language)]
    languages: Vec<SampleLanguage>,

    /// Group by the first operation of each path (path_item) or by every operation (operation)
    #[arg(long, value_parser = parse_grouping)]
    grouping: Option<GroupingStrategy>,

    /// URL prefixed to the URIs of code samples
    #[arg(long)]
    base_url: Option<String>,

    /// Config file [default: .swagdoc.yaml, if present]
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a document and render it in memory without writing pages
    Validate {
        /// Path to the Swagger document
        input: PathBuf,
    },

    /// Initialize a new swagdoc configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn parse_language(value: &str) -> Result<SampleLanguage, String> {
    value.parse()
}

fn parse_grouping(value: &str) -> Result<GroupingStrategy, String> {
    value.parse()
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        None => cmd_generate(cli.generate),

        Some(Commands::Validate { input }) => cmd_validate(&input),

        Some(Commands::Init { force }) => cmd_init(force),

        Some(Commands::Completions { shell }) => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "swagdoc", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Load the config file. An explicitly named file must exist.
fn load_config(explicit: Option<&Path>) -> Result<DocConfig> {
    match explicit {
        Some(path) => config::load_config(path)?
            .with_context(|| format!("config file {} not found", path.display())),
        None => Ok(config::load_config(Path::new(CONFIG_FILE_NAME))?.unwrap_or_default()),
    }
}

fn load_spec(path: &Path) -> Result<SwaggerSpec> {
    let spec =
        parse::from_file(path).with_context(|| format!("failed to load {}", path.display()))?;
    log::info!(
        "loaded {} ({} paths, {} definitions)",
        path.display(),
        spec.paths.len(),
        spec.definitions.len()
    );
    Ok(spec)
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    if !args.languages.is_empty() {
        cfg.languages = args.languages;
    }
    if let Some(grouping) = args.grouping {
        cfg.grouping = grouping;
    }
    if args.base_url.is_some() {
        cfg.base_url = args.base_url;
    }

    let input = args.input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output_dir = args.output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    let spec = load_spec(&input)?;
    let files = MarkdownGenerator
        .generate(&spec, &cfg)
        .with_context(|| format!("failed to render {}", input.display()))?;

    let written = output::write_files(&output_dir, &files)?;
    for path in &written {
        eprintln!("  wrote {}", path.display());
    }
    eprintln!("Generated {} pages from {}", written.len(), input.display());
    Ok(())
}

fn cmd_validate(input: &Path) -> Result<()> {
    let cfg = load_config(None)?;
    let spec = load_spec(input)?;

    let groups = group_paths(&spec, cfg.grouping)?;
    let operations: usize = groups.iter().map(|g| g.endpoints.len()).sum();

    // Renders every page to surface per-operation errors.
    let files = MarkdownGenerator
        .generate(&spec, &cfg)
        .with_context(|| format!("failed to render {}", input.display()))?;

    eprintln!("Valid Swagger {} document: {}", spec.swagger, spec.info.title);
    eprintln!("  Version: {}", spec.info.version);
    eprintln!("  Paths: {}", spec.paths.len());
    eprintln!("  Definitions: {}", spec.definitions.len());
    eprintln!("  Groups: {}", groups.len());
    eprintln!("  Operations: {}", operations);
    eprintln!("  Pages: {}", files.len());
    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
