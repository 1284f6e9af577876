//! `greeter` - run the greeter screen headlessly.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use greeter_app::config::GreeterConfig;
use greeter_app::headless_runner::run_loaded_scenario;
use greeter_app::headless_scenario::HeadlessScenario;
use greeter_app::prelude::*;
use greeter_widgets::find_flag_asset;

#[derive(Parser)]
#[command(name = "greeter")]
#[command(author, version, about = "Greeter screen with a three-locale language selector", long_about = None)]
struct Cli {
    /// Config file (defaults to ./greeter.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the screen, optionally after clicking locale options
    Show {
        /// Startup host locale (overrides config and OS detection)
        #[arg(long)]
        locale: Option<String>,

        /// Option index to click; repeatable, applied in order
        #[arg(long = "click")]
        clicks: Vec<usize>,

        /// Print the view tree as JSON instead of an outline
        #[arg(long)]
        json: bool,
    },

    /// Run a headless diagnostics scenario
    Scenario {
        /// Scenario JSON file
        path: PathBuf,

        /// Startup host locale (overrides config and OS detection)
        #[arg(long)]
        locale: Option<String>,

        /// Also write the report to this relative path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Print the embedded SVG flag for a country code (cn, gb, kr)
    Flag {
        /// Lowercase country code
        code: String,
    },
}

fn init_logging(level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn create_app(config: &GreeterConfig, locale: Option<String>) -> Result<GreeterApp> {
    let locale = locale.or_else(|| config.host.locale.clone());
    let provider = init_host_locale(locale.as_deref())?;
    let bundles = StringBundles::builtin().context("built-in string bundles are invalid")?;
    Ok(GreeterApp::create(provider, bundles))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GreeterConfig::load_or_default(cli.config.as_deref())?;
    init_logging(&config.log.level, cli.verbose);

    match cli.command {
        Commands::Show {
            locale,
            clicks,
            json,
        } => {
            let mut app = create_app(&config, locale)?;
            for index in clicks {
                let outcome = app.click(&option_element_id(index))?;
                app.frame();
                info!(index, ?outcome, "clicked locale option");
            }

            let mut stdout = std::io::stdout().lock();
            if json {
                serde_json::to_writer_pretty(&mut stdout, app.view())?;
                writeln!(stdout)?;
            } else {
                write!(stdout, "{}", app.view())?;
            }
        }
        Commands::Scenario {
            path,
            locale,
            report,
        } => {
            let scenario = HeadlessScenario::from_path(&path)?;
            let mut app = create_app(&config, locale)?;
            let outcome = run_loaded_scenario(&mut app, &scenario, config.headless.run_config())?;

            outcome.report().write_to_writer(&mut std::io::stdout().lock())?;
            if let Some(report_path) = report {
                outcome.report().write_to_path(&report_path)?;
            }
            if outcome.is_failed() {
                std::process::exit(1);
            }
        }
        Commands::Flag { code } => {
            let asset =
                find_flag_asset(&code).ok_or_else(|| anyhow!("unsupported country: {code}"))?;
            write!(std::io::stdout().lock(), "{}", asset.svg)?;
        }
    }

    Ok(())
}
