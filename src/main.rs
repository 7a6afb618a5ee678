use clap::{Parser, Subcommand};
use docsite::assets::{self, AssetIndex, STATIC_DIR};
use docsite::generate::{self, Site};
use docsite::{config, output};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "docsite")]
#[command(about = "Typed site descriptor for static documentation websites")]
#[command(long_about = "\
Typed site descriptor for static documentation websites

One docsite.toml declares the site: metadata, head tags, navbar, theme and
home page content. docsite validates it, assembles the configuration an
external static-site generator consumes, and renders the home page.

Site structure:

  site/
  ├── docsite.toml                 # Site descriptor
  └── static/                      # Assets referenced from docsite.toml
      └── img/
          ├── logo.png             # Favicon, navbar logo, hero logo
          ├── logo-dark.png        # Hero logo in dark mode (optional)
          ├── social-card.jpg      # Open Graph / Twitter preview
          └── wizard.png           # Feature images

Build output:

  build/
  ├── site.config.json             # Assembled config for the generator
  ├── theme.css                    # Accent color for both color modes
  └── index.html                   # Home page in the default color mode

Run 'docsite gen-config' to generate a documented docsite.toml.")]
#[command(version)]
struct Cli {
    /// Site directory containing docsite.toml and static/
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "build", global = true)]
    output: PathBuf,

    /// Extra TOML file layered over docsite.toml (repeatable, applied in order)
    #[arg(long = "overlay", global = true)]
    overlays: Vec<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assemble the site, verify assets and write the build output
    Build,
    /// Validate the site descriptor and assets without writing anything
    Check,
    /// Print the assembled generator config as JSON
    PrintConfig,
    /// Print a stock docsite.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let (site, checked) = load_and_verify(&cli.source, &cli.overlays)?;
            tracing::info!(assets = checked, "assets verified");

            println!("==> Generating \u{2192} {}", cli.output.display());
            let report = generate::generate(&site, &cli.output)?;
            output::print_generate_output(&report, &cli.output);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let (site, checked) = load_and_verify(&cli.source, &cli.overlays)?;
            output::print_check_output(&site, checked);
            println!("==> Site is valid");
        }
        Command::PrintConfig => {
            let source = config::load_source(&cli.source, &cli.overlays)?;
            let site = Site::from_source(&source)?;
            println!("{}", serde_json::to_string_pretty(&site.config)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load and assemble the site, then check every asset it references.
fn load_and_verify(
    source: &Path,
    overlays: &[PathBuf],
) -> Result<(Site, usize), Box<dyn std::error::Error>> {
    let site_source = config::load_source(source, overlays)?;
    let site = Site::from_source(&site_source)?;
    let index = AssetIndex::scan(&source.join(STATIC_DIR))?;
    let checked = assets::verify(&site, &index)?;
    Ok((site, checked))
}
