pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "tw-toolbox")]
#[command(about = "Everyday office tools: ID numbers, Minguo dates, insurance age and more")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true, default_value = "tw-toolbox.toml")]
    pub config: PathBuf,

    /// Override the history data directory
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 身分證字號驗證與產生
    #[command(subcommand)]
    Id(IdCommand),

    /// 西元年與民國年轉換
    Year(YearArgs),

    /// 保險年齡計算
    Age(AgeArgs),

    /// NB 網址分析
    #[command(subcommand)]
    Url(UrlCommand),

    /// 掃描案件檔名產生
    #[command(subcommand)]
    Scan(ScanCommand),

    /// JSON 格式化與結構樹
    Json(JsonArgs),

    /// 比對兩個目錄的檔案大小
    Compare(CompareArgs),
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum IdCommand {
    /// Validate an ID number
    Validate { code: String },

    /// Generate random valid ID numbers
    Generate {
        #[arg(short, long, default_value = "A")]
        region: String,

        /// 1 (男) or 2 (女)
        #[arg(short, long, default_value = "1")]
        gender: String,

        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// List region letters and their county/city
    Regions,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct YearArgs {
    /// Minguo date, e.g. 114/10/27
    #[arg(long)]
    pub minguo: Option<String>,

    /// Western date, e.g. 2025/10/27
    #[arg(long)]
    pub western: Option<String>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct AgeArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub birth: chrono::NaiveDate,

    /// Calculation date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub on: Option<chrono::NaiveDate>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
#[group(required = false, multiple = false)]
pub struct HistoryArgs {
    /// Delete one history entry by key
    #[arg(long)]
    pub delete: Option<String>,

    /// Delete all history entries
    #[arg(long)]
    pub clear: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum UrlCommand {
    /// Analyze a URL and record it in history
    Analyze {
        url: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Show or edit the analysis history
    History(HistoryArgs),
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum ScanCommand {
    /// Generate file names for a case and record it in history
    Generate { base_name: String },

    /// Show or edit the generation history
    History(HistoryArgs),
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct JsonArgs {
    /// JSON file to read, stdin when omitted
    pub file: Option<PathBuf>,

    /// Print the structure tree instead of formatted JSON
    #[arg(long)]
    pub tree: bool,

    /// Collapse tree nodes deeper than this
    #[arg(long)]
    pub depth: Option<usize>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct CompareArgs {
    pub original_dir: PathBuf,
    pub modified_dir: PathBuf,

    /// Output CSV instead of a table
    #[arg(long)]
    pub csv: bool,
}
