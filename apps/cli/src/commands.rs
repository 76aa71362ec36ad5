//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use promptcat_core::{
    build_app_filter_doc, build_filters, extract_catalog, AppFiltersConfig, ExtractConfig,
    FiltersConfig, ProgressReporter,
};
use promptcat_shared::{init_config, load_config, AppConfig};

/// Default output file names, matching what the front-end loads.
const CATALOG_FILE: &str = "prompts_catalog.json";
const FILTERS_FILE: &str = "filters_catalog.json";
const APP_FILTERS_FILE: &str = "filters_for_app.json";

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// promptcat — build prompt catalogs from Telegram channel exports.
#[derive(Parser)]
#[command(
    name = "promptcat",
    version,
    about = "Build static prompt catalogs from a Telegram chat export and comments spreadsheet.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Extract and classify prompts from the comments spreadsheet.
    Extract {
        /// Path to the comments spreadsheet (.xlsx).
        #[arg(short, long)]
        sheet: Option<PathBuf>,

        /// Output path (defaults to prompts_catalog.json in the output dir).
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Minimum comment length to be considered a prompt.
        #[arg(long)]
        min_comment_len: Option<usize>,
    },

    /// Build the merged filters catalog from both sources.
    Catalog {
        /// Path to the Telegram chat export HTML.
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Path to the comments spreadsheet (.xlsx).
        #[arg(short, long)]
        sheet: Option<PathBuf>,

        /// Output path (defaults to filters_catalog.json in the output dir).
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Minimum channel-post body length to be considered a prompt.
        #[arg(long)]
        min_post_len: Option<usize>,
    },

    /// Generate the app filter document from a merged filters catalog.
    Appfilters {
        /// Path to a previously built filters catalog.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output path (defaults to filters_for_app.json in the output dir).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match cli.verbose {
        0 => "promptcat=info",
        1 => "promptcat=debug",
        _ => "promptcat=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Extract {
            sheet,
            out,
            min_comment_len,
        } => cmd_extract(sheet, out, min_comment_len),
        Command::Catalog {
            export,
            sheet,
            out,
            min_post_len,
        } => cmd_catalog(export, sheet, out, min_post_len),
        Command::Appfilters { input, out } => cmd_appfilters(input, out),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

fn output_path(config: &AppConfig, file_name: &str) -> PathBuf {
    PathBuf::from(&config.output.dir).join(file_name)
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_extract(
    sheet: Option<PathBuf>,
    out: Option<PathBuf>,
    min_comment_len: Option<usize>,
) -> Result<()> {
    let config = load_config()?;

    let extract_config = ExtractConfig {
        comments_sheet: sheet.unwrap_or_else(|| PathBuf::from(&config.inputs.comments_sheet)),
        output: out.unwrap_or_else(|| output_path(&config, CATALOG_FILE)),
        min_comment_len: min_comment_len.unwrap_or(config.limits.min_comment_len),
    };

    info!(sheet = %extract_config.comments_sheet.display(), "extracting prompts");

    let reporter = CliProgress::new();
    let result = extract_catalog(&extract_config, &reporter)?;

    println!();
    println!("  Prompt catalog written!");
    println!("  Rows read: {}", result.rows_read);
    println!("  Prompts:   {}", result.prompts_extracted);
    println!("  Output:    {}", result.output.display());
    println!("  Time:      {:.1}s", result.elapsed.as_secs_f64());
    println!();
    println!("  Categories:");
    let mut stats: Vec<_> = result.category_stats.iter().collect();
    stats.sort_by(|a, b| b.1.cmp(a.1));
    for (category, count) in stats {
        println!("    {category}: {count}");
    }
    let langs: Vec<String> = result
        .language_stats
        .iter()
        .map(|(lang, count)| format!("{lang}={count}"))
        .collect();
    println!("  Languages: {}", langs.join(", "));
    println!();

    Ok(())
}

fn cmd_catalog(
    export: Option<PathBuf>,
    sheet: Option<PathBuf>,
    out: Option<PathBuf>,
    min_post_len: Option<usize>,
) -> Result<()> {
    let config = load_config()?;

    let filters_config = FiltersConfig {
        chat_export: export.unwrap_or_else(|| PathBuf::from(&config.inputs.chat_export)),
        comments_sheet: sheet.unwrap_or_else(|| PathBuf::from(&config.inputs.comments_sheet)),
        output: out.unwrap_or_else(|| output_path(&config, FILTERS_FILE)),
        min_post_len: min_post_len.unwrap_or(config.limits.min_post_len),
    };

    info!(
        export = %filters_config.chat_export.display(),
        sheet = %filters_config.comments_sheet.display(),
        "building merged filters catalog"
    );

    let reporter = CliProgress::new();
    let result = build_filters(&filters_config, &reporter)?;

    println!();
    println!("  Filters catalog written!");
    println!("  From HTML:  {}", result.html_prompts);
    println!("  From Excel: {}", result.excel_prompts);
    println!("  Duplicates: {}", result.duplicates_removed);
    println!("  Total:      {}", result.total_filters);
    println!("  Output:     {}", result.output.display());
    println!("  Time:       {:.1}s", result.elapsed.as_secs_f64());
    println!();
    let mut stats: Vec<_> = result.category_stats.iter().collect();
    stats.sort_by(|a, b| b.1.cmp(a.1));
    for (category, count) in stats {
        println!("    {category}: {count}");
    }
    println!();

    Ok(())
}

fn cmd_appfilters(input: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;

    let app_config = AppFiltersConfig {
        input: input.unwrap_or_else(|| output_path(&config, FILTERS_FILE)),
        output: out.unwrap_or_else(|| output_path(&config, APP_FILTERS_FILE)),
    };

    info!(input = %app_config.input.display(), "generating app filters");

    let result = build_app_filter_doc(&app_config)?;

    println!();
    println!("  App filters written!");
    println!("  Categories: {}", result.categories);
    println!("  Filters:    {}", result.filters);
    println!("  Output:     {}", result.output.display());
    println!("  Time:       {:.1}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config written to {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config = load_config()?;
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn item(&self, current: usize, total: usize) {
        self.spinner.set_message(format!("Processing [{current}/{total}]"));
    }

    fn done(&self, _summary: &str) {
        self.spinner.finish_and_clear();
    }
}
