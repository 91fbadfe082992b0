//! advocates-browse - fetch the advocate directory and print a filtered table
//!
//! Loads the full list once from the records endpoint, applies the filters
//! given on the command line and prints the result. Ctrl+C while loading
//! abandons the request.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

use advocates_common::config::{load_toml_config, resolve_endpoint, TomlConfig};
use advocates_directory::render::{render, render_specialty_options};
use advocates_directory::{Directory, FilterField, LoadState, RecordSource};
use anyhow::{bail, Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for advocates-browse
#[derive(Parser, Debug)]
#[command(name = "advocates-browse")]
#[command(about = "Browse and filter the advocate directory")]
#[command(version)]
struct Args {
    /// Records endpoint (overrides ADVOCATES_ENDPOINT and the config file)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Config file (default: platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// First name contains (case-insensitive)
    #[arg(long)]
    first_name: Option<String>,

    /// Last name contains (case-insensitive)
    #[arg(long)]
    last_name: Option<String>,

    /// City contains (case-insensitive)
    #[arg(long)]
    city: Option<String>,

    /// Degree contains (case-insensitive)
    #[arg(long)]
    degree: Option<String>,

    /// Minimum years of experience; ignored unless it is an integer
    #[arg(long)]
    min_years: Option<String>,

    /// Keyword matched against every field
    #[arg(short, long)]
    search: Option<String>,

    /// Require any of these specialties (repeatable)
    #[arg(long = "specialty")]
    specialties: Vec<String>,

    /// Print the specialty options instead of the table
    #[arg(long)]
    list_specialties: bool,
}

impl Args {
    fn text_filters(&self) -> [(FilterField, Option<&String>); 6] {
        [
            (FilterField::FirstName, self.first_name.as_ref()),
            (FilterField::LastName, self.last_name.as_ref()),
            (FilterField::City, self.city.as_ref()),
            (FilterField::Degree, self.degree.as_ref()),
            (FilterField::MinYears, self.min_years.as_ref()),
            (FilterField::Search, self.search.as_ref()),
        ]
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (config, config_error) = match load_toml_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (TomlConfig::default(), Some(e)),
    };

    // Logs go to stderr so stdout carries only the table
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                let level = &config.logging.level;
                format!("advocates_browse={level},advocates_directory={level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(e) = config_error {
        warn!("Using default configuration: {}", e);
    }

    let endpoint = resolve_endpoint(args.endpoint.as_deref(), &config);
    let source = RecordSource::new(endpoint, Duration::from_secs(args.timeout_secs))
        .context("Failed to build HTTP client")?;

    let mut directory = Directory::mount(&source);
    info!("{}", render(&directory));

    let interrupted = tokio::select! {
        _ = directory.settle() => false,
        _ = signal::ctrl_c() => true,
    };
    if interrupted {
        directory.unmount();
        info!("Interrupted; request abandoned");
        return Ok(());
    }

    if let LoadState::Failed(message) = directory.state() {
        bail!("{}", message);
    }

    for (field, value) in args.text_filters() {
        if let Some(value) = value {
            directory.set_filter(field, value.as_str());
        }
    }
    // Repeating a specialty on the command line selects it once
    let requested: BTreeSet<&String> = args.specialties.iter().collect();
    for specialty in requested {
        directory.toggle_specialty(specialty);
    }

    if args.list_specialties {
        print!("{}", render_specialty_options(&directory));
    } else {
        println!("{}", render(&directory).trim_end());
        if directory.any_filter_active() {
            info!(
                "Showing {} of {} advocates",
                directory.filtered().len(),
                directory.advocates().len()
            );
        }
    }

    Ok(())
}
