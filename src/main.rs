use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use hubgaming_postgen::config::{self, GeneratorConfig, MetadataStyle};
use hubgaming_postgen::{generate, output};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::{Level, debug};

fn version_string() -> &'static str {
    if env!("POSTGEN_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("POSTGEN_GIT_HASH") {
        "" => "dev@unknown",
        // Leaked once at startup
        hash => Box::leak(format!("dev@{hash}").into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "postgen")]
#[command(about = "Generate a randomized daily blog post")]
#[command(long_about = "\
Generate a randomized daily blog post

Picks a title, body sentences, a hero image and partner links from built-in
content pools and writes one Markdown post with YAML front matter:

  _posts/<YYYY-MM-DD>-<slug>.md

Running with no subcommand is the same as 'postgen generate'. A post with the
same date and title as an existing one overwrites it.

Configuration (lowest to highest precedence):
  built-in defaults → postgen.toml → SITE_DOMAIN env var → CLI flags

Run 'postgen gen-config' to print a documented postgen.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file [default: postgen.toml, if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory posts are written to (overrides output.posts_dir)
    #[arg(long, global = true)]
    posts_dir: Option<PathBuf>,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Args, Clone, Default)]
struct GenerateArgs {
    /// Seed the random generator for a reproducible post
    #[arg(long)]
    seed: Option<u64>,

    /// Post date as YYYY-MM-DD [default: today]
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Front matter style (overrides output.metadata_style)
    #[arg(long, value_enum)]
    style: Option<MetadataStyle>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one post (default)
    Generate(GenerateArgs),
    /// Validate configuration and content pools without writing anything
    Check,
    /// Print a stock postgen.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Command::Generate(GenerateArgs::default())) {
        Command::Generate(args) => {
            let mut config = load_config(cli.config.as_deref(), cli.posts_dir)?;
            if let Some(style) = args.style {
                config.output.metadata_style = style;
            }
            let date = args
                .date
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            debug!(%date, seed = ?args.seed, "generating post");

            let generated = generate::generate(&config, date, &mut rng)?;
            let path = output::write_post(&generated)?;
            output::print_generate_output(path);
        }
        Command::Check => {
            let config = load_config(cli.config.as_deref(), cli.posts_dir)?;
            output::print_check_output(&config);
            println!("==> Configuration is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve config from file, environment and CLI flags, in that order.
fn load_config(
    path: Option<&Path>,
    posts_dir: Option<PathBuf>,
) -> Result<GeneratorConfig, config::ConfigError> {
    let mut config = match path {
        Some(path) => config::load_explicit_config(path)?,
        None => config::load_config(Path::new(config::DEFAULT_CONFIG_FILE))?,
    };
    config.apply_env()?;
    if let Some(dir) = posts_dir {
        config.output.posts_dir = dir;
    }
    config.validate()?;
    Ok(config)
}

/// Install the stderr subscriber. Warnings only unless `-v` is given.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
