use anyhow::Context;
use clap::Parser;
use nameholder_core::config::CONFIG_FILE_NAME;
use nameholder_core::output::render;
use nameholder_core::{construct, CliOverrides, Command, HolderConfig, OutputFormat, Session};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// nameholder - construct a name holder and drive it from flags or a script
#[derive(Parser, Debug, Clone)]
#[command(name = "nameholder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Set the name (repeatable, applied in order)
    #[arg(long = "set", value_name = "NAME", allow_hyphen_values = true)]
    names: Vec<String>,

    /// Command script to run after the --set values ("-" reads stdin)
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Path to a YAML or JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log every executed command
    #[arg(long)]
    echo: bool,

    /// Write a default nameholder.yaml to the current directory
    #[arg(long)]
    init: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.init {
        init_config(Path::new(CONFIG_FILE_NAME))?;
        return Ok(());
    }

    let config = load_config(&cli)?;
    init_logging(&config);
    debug!("Output format: {:?}", config.output_format);

    let lines = run(&cli, &config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for name in lines {
        writeln!(out, "{}", render(config.output_format, &name)?)?;
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only names.
/// RUST_LOG takes precedence; otherwise warn, or info when echoing commands.
fn init_logging(config: &HolderConfig) {
    let default_level = if config.echo_commands { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Write the default configuration file
fn init_config(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    HolderConfig::init_file(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

/// Load configuration from file (if any) and apply CLI overrides
fn load_config(cli: &Cli) -> anyhow::Result<HolderConfig> {
    let mut config = if let Some(ref path) = cli.config {
        HolderConfig::from_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?
    } else {
        let default_path = PathBuf::from(CONFIG_FILE_NAME);
        if default_path.exists() {
            HolderConfig::from_file(&default_path)
                .with_context(|| format!("Failed to load {}", CONFIG_FILE_NAME))?
        } else {
            HolderConfig::default()
        }
    };

    let overrides = CliOverrides {
        output_format: cli.format,
        echo_commands: cli.echo.then_some(true),
    };
    config.merge(&overrides);

    Ok(config)
}

/// Apply --set values, then the script if one was given. Returns the names to print.
fn run(cli: &Cli, config: &HolderConfig) -> anyhow::Result<Vec<String>> {
    let mut session = Session::with_holder(construct()).echo(config.echo_commands);

    for name in &cli.names {
        session.execute(Command::Set(name.clone()));
    }

    let Some(ref script_path) = cli.script else {
        return Ok(vec![session.holder().get_name().to_string()]);
    };

    let script = read_script(script_path)?;
    info!("Running script with {} line(s)", script.lines().count());

    let source = if script_path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        script_path.display().to_string()
    };
    session
        .run_script(&script)
        .with_context(|| format!("Failed to run script {}", source))
}

fn read_script(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut script = String::new();
        std::io::stdin()
            .read_to_string(&mut script)
            .context("Failed to read script from stdin")?;
        Ok(script)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))
    }
}
