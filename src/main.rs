//! Unit Conversion Toolbox CLI
//!
//! Usage:
//!     unit_conversion_toolbox                      (interactive menu)
//!     unit_conversion_toolbox convert 5 km miles
//!     unit_conversion_toolbox convert 100 C F --category temperature
//!     unit_conversion_toolbox table --category length
//!     unit_conversion_toolbox ask "How many feet are in a mile?"

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, Level};

use unit_conversion_toolbox::app::{self, AppError};
use unit_conversion_toolbox::assistant::{Assistant, Gated, PlaceholderAssistant};
use unit_conversion_toolbox::config::{self, DEFAULT_CONFIG_PATH};
use unit_conversion_toolbox::i18n::{self, Translator};
use unit_conversion_toolbox::quantity::Category;
use unit_conversion_toolbox::reference;
use unit_conversion_toolbox::ui_cli::{self, Console};

/// Length, weight and temperature conversions with a reference table
#[derive(Parser)]
#[command(name = "unit_conversion_toolbox")]
#[command(version)]
#[command(about = "Convert length, weight and temperature units", long_about = None)]
struct Cli {
    /// Language code (auto/ko/en)
    #[arg(short = 'L', long, global = true)]
    lang: Option<String>,

    /// Config file path
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single value
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Source unit (e.g. Meters, ft, kg, C)
        from: String,

        /// Target unit
        to: String,

        /// Category (length/weight/temperature); inferred from the units if omitted
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
    },

    /// Print the common conversions table
    Table {
        /// Only show one category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Ask the assistant a question
    Ask {
        query: String,
    },

    /// Interactive menu (default)
    Interactive,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    debug!(lang = %lang, overrides = tr.has_overrides(), "language resolved");

    match try_run(cli.command, &cli.config, &mut cfg, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(
    command: Option<Commands>,
    config_path: &Path,
    cfg: &mut config::Config,
    tr: &Translator,
) -> Result<(), AppError> {
    match command.unwrap_or(Commands::Interactive) {
        Commands::Convert {
            value,
            from,
            to,
            category,
        } => {
            let (category, result) = ui_cli::convert_once(category, value, &from, &to)?;
            debug!(%category, result, "converted");
            println!("{}", ui_cli::format_result(result, cfg.decimals, &to));
        }
        Commands::Table { category } => {
            let entries = match category {
                Some(c) => reference::entries_for(&c),
                None => reference::REFERENCE_TABLE.to_vec(),
            };
            print!("{}", reference::render_table(&entries));
        }
        Commands::Ask { query } => {
            let assistant = Gated::new(PlaceholderAssistant, cfg.assistant_enabled);
            println!("{}", assistant.ask(&query)?);
        }
        Commands::Interactive => {
            let mut console = Console::stdio();
            app::run(&mut console, cfg, config_path, tr)?;
        }
    }
    Ok(())
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(s)
        .ok_or_else(|| format!("unknown category '{s}' (expected length, weight or temperature)"))
}
