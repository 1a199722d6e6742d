#![forbid(unsafe_code)]
//! ezcp Command Line Interface

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use ezcp::commands::{
    execute_detect, execute_files, execute_frameworks, execute_pack, DetectOptions, FilesOptions,
    PackOptions,
};
use ezcp::config::DEFAULT_CONFIG_FILE;
use ezcp::{Config, ProcessingOptions, SelectionMode};

#[derive(Parser)]
#[command(name = "ezcp")]
#[command(about = "Pack a web or mobile project into an AI-ready context report")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Processing flags shared by `files` and `pack`
#[derive(clap::Args, Debug, Clone)]
struct ProcessArgs {
    /// Force a framework (django, flask, nextjs, expo)
    #[arg(short, long)]
    framework: Option<String>,

    /// Keep test and spec files
    #[arg(long)]
    include_tests: bool,

    /// Extra exclude patterns (can specify multiple)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Skip files larger than this many bytes
    #[arg(long)]
    max_file_size: Option<u64>,

    /// Initial selection: all or priority
    #[arg(long)]
    select: Option<SelectionMode>,
}

impl ProcessArgs {
    /// Merge flags over the loaded config
    fn resolve(self, config: &Config) -> (Option<String>, ProcessingOptions, SelectionMode) {
        let mut processing = config.processing.clone();
        processing.include_tests |= self.include_tests;
        processing.custom_exclude_patterns.extend(self.exclude);
        if let Some(max) = self.max_file_size {
            processing.max_file_size = max;
        }

        let framework = self.framework.or_else(|| config.framework.clone());
        let selection = self.select.unwrap_or(config.selection);
        (framework, processing, selection)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the project's framework with confidence scores
    Detect {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// List processed files with priority and token estimates
    Files {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        #[command(flatten)]
        process: ProcessArgs,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the context report
    Pack {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        #[command(flatten)]
        process: ProcessArgs,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Never prompt; fail if no framework is detected
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List supported frameworks
    Frameworks,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = if cli.config == Path::new(DEFAULT_CONFIG_FILE) {
        Config::load_or_default()
    } else {
        match Config::load(&cli.config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "{} Invalid config {}: {}",
                    style("✗").red(),
                    cli.config.display(),
                    e
                );
                std::process::exit(1);
            }
        }
    };

    match cli.command {
        Commands::Detect { dir, json } => {
            execute_detect(DetectOptions { root: dir, json })?;
        }

        Commands::Files { dir, process, json } => {
            let (framework, processing, selection) = process.resolve(&config);
            execute_files(FilesOptions {
                root: dir,
                framework,
                processing,
                selection,
                json,
            })?;
        }

        Commands::Pack {
            dir,
            process,
            output,
            yes,
        } => {
            let (framework, processing, selection) = process.resolve(&config);
            execute_pack(PackOptions {
                root: dir,
                framework,
                processing,
                selection,
                output: output.or_else(|| config.output.clone()),
                yes,
            })?;
        }

        Commands::Frameworks => {
            execute_frameworks()?;
        }
    }

    Ok(())
}
