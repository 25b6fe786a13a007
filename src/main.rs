use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio::{AppConfig, AppError, DeployResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Edit a portfolio locally and publish it to GitHub Pages", long_about = None)]
struct Cli {
    /// Directory holding portfolio_data.json and output/ (defaults to FOLIO_ROOT or cwd)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the local editor
    #[clap(visible_alias = "s")]
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Render output/index.html from the stored document
    #[clap(visible_alias = "r")]
    Render,
    /// Render and publish to the gh-pages branch
    #[clap(visible_alias = "d")]
    Deploy {
        /// Print the step report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the stored document as JSON
    Show,
    /// List available color schemes
    Schemes,
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = AppConfig::from_env()?;
    if let Some(root) = cli.root {
        config.root = root;
    }

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            runtime()?.block_on(folio::serve(&config))
        }
        Commands::Render => folio::generate(&config).map(|_| ()),
        Commands::Deploy { json } => {
            let result = runtime()?.block_on(folio::deploy(&config))?;
            print_deploy(&result, json)?;
            if result.success {
                Ok(())
            } else {
                Err(AppError::Validation(result.message))
            }
        }
        Commands::Show => {
            let document = folio::show(&config)?;
            println!("{}", serde_json::to_string_pretty(&document)?);
            Ok(())
        }
        Commands::Schemes => {
            for scheme in folio::schemes() {
                println!("{:<16} {:<18} {}", scheme.key, scheme.name, scheme.primary);
            }
            Ok(())
        }
    }
}

fn runtime() -> Result<tokio::runtime::Runtime, AppError> {
    Ok(tokio::runtime::Builder::new_multi_thread().enable_all().build()?)
}

fn print_deploy(result: &DeployResult, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    for step in &result.steps {
        let mark = if step.success { "✅" } else { "❌" };
        println!("{mark} {}", step.command);
        let output = step.output.trim();
        if !output.is_empty() {
            for line in output.lines() {
                println!("   {line}");
            }
        }
    }
    if result.success {
        println!("🚀 {}", result.message);
        if !result.url.is_empty() {
            println!("   {}", result.url);
        }
    }
    Ok(())
}
