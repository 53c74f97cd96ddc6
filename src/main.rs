use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gcemap::compute::Instance;
use gcemap::gcp::client::{format_gcp_error, GcpClient};
use gcemap::mapping::{
    canonicalize_service_scopes, expand_instance, flatten_instance, parse_subnetwork_link,
    SelfLinksOnly,
};
use gcemap::schema::InstanceConfig;
use gcemap::ProviderConfig;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Expand and flatten Compute Engine instance configuration
#[derive(Parser, Debug)]
#[command(name = "gcemap", version, about, long_about = None)]
struct Args {
    /// Default GCP project
    #[arg(short, long, global = true)]
    project: Option<String>,

    /// Default GCP region
    #[arg(short, long, global = true)]
    region: Option<String>,

    /// Default GCP zone
    #[arg(short, long, global = true)]
    zone: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    /// Never call the Compute API; subnetworks must be given as self links
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the API instance request for a declared configuration (YAML or JSON)
    Expand { file: PathBuf },
    /// Turn an API instance (JSON) into persisted state
    Flatten { file: PathBuf },
    /// Print the project and region of a subnetwork self link
    ParseLink { link: String },
    /// Print the canonical URL of each scope
    CanonicalizeScopes {
        #[arg(required = true)]
        scopes: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("gcemap started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("gcemap").join("gcemap.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".gcemap").join("gcemap.log");
    }
    PathBuf::from("gcemap.log")
}

/// Read a YAML or JSON document, picking the parser by extension
fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    } else {
        serde_yaml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }
}

async fn expand(file: &Path, provider: &ProviderConfig, offline: bool) -> Result<()> {
    let config: InstanceConfig = read_document(file)?;

    let instance = if offline {
        expand_instance(&config, provider, &SelfLinksOnly).await?
    } else {
        let client = GcpClient::new(provider).await?;
        expand_instance(&config, provider, &client).await?
    };

    println!("{}", serde_json::to_string_pretty(&instance)?);
    Ok(())
}

fn flatten(file: &Path) -> Result<()> {
    let instance: Instance = read_document(file)?;
    let state = flatten_instance(&instance);
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = match setup_logging(args.log_level) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Logging disabled: {e:#}");
            None
        }
    };

    let provider = ProviderConfig::load()
        .with_overrides(args.project.clone(), args.region.clone(), args.zone.clone())
        .with_environment_defaults();

    tracing::info!(
        "Using project: {:?}, region: {:?}, zone: {:?}",
        provider.project,
        provider.region,
        provider.zone
    );

    let result = match &args.command {
        Command::Expand { file } => expand(file, &provider, args.offline).await,
        Command::Flatten { file } => flatten(file),
        Command::ParseLink { link } => {
            match parse_subnetwork_link(link) {
                Some(parsed) => println!("project: {}\nregion: {}", parsed.project, parsed.region),
                None => println!("project: \nregion: "),
            }
            Ok(())
        }
        Command::CanonicalizeScopes { scopes } => {
            for scope in canonicalize_service_scopes(scopes) {
                println!("{}", scope);
            }
            Ok(())
        }
    };

    if let Err(err) = result {
        tracing::error!("{:#}", err);
        eprintln!("Error: {}", format_gcp_error(&err));
        std::process::exit(1);
    }

    Ok(())
}
