//! Turns the error responses recorded in a Postman collection into a dev proxy configuration.

use anyhow::Context;
use clap::Parser;
use postman_errors::{convert_with_options, ConversionOptions, MalformedBodyPolicy};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "postman-to-devproxy")]
#[command(about = "Generate dev proxy random errors from a Postman collection")]
#[command(version)]
struct Cli {
    /// Postman collection (v2.x JSON)
    input: PathBuf,

    /// Folder to write the errors file and devproxyrc.json into
    output: PathBuf,

    /// Percentage of watched requests the proxy should fail
    #[arg(short, long)]
    rate: Option<u32>,

    /// Log level written to devproxyrc.json
    #[arg(long)]
    log_level: Option<String>,

    /// Schema URL written to devproxyrc.json
    #[arg(long)]
    schema_url: Option<String>,

    /// Path of the dev proxy plugins assembly
    #[arg(long)]
    plugin_path: Option<String>,

    /// Dev proxy release channel to be notified about
    #[arg(long)]
    new_version_notification: Option<String>,

    /// Leave out error responses whose body isn't valid JSON instead of failing
    #[arg(long)]
    skip_malformed_bodies: bool,

    /// Log every item, variable and URL processed
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> ConversionOptions {
        let mut options = ConversionOptions::default();
        if let Some(rate) = self.rate {
            options.set_rate(rate);
        }
        if let Some(log_level) = &self.log_level {
            options.set_log_level(log_level.as_str());
        }
        if let Some(schema_url) = &self.schema_url {
            options.set_schema_url(schema_url.as_str());
        }
        if let Some(plugin_path) = &self.plugin_path {
            options.set_plugin_path(plugin_path.as_str());
        }
        if let Some(value) = &self.new_version_notification {
            options.set_new_version_notification(value.as_str());
        }
        if self.skip_malformed_bodies {
            options.set_malformed_body_policy(MalformedBodyPolicy::Skip);
        }
        options
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let report = convert_with_options(&cli.input, &cli.output, &cli.options())
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    match report {
        Some(report) => {
            println!(
                "Wrote {} error groups to {}",
                report.error_groups,
                report.errors_file.display()
            );
            println!("Wrote {}", report.rc_file.display());
        }
        None => info!("No error responses found in {}", cli.input.display()),
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
