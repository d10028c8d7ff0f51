use anyhow::Context;
use clap::Parser;
use std::io::Read;
use tw_toolbox::config::{
    AgeArgs, Command, CompareArgs, HistoryArgs, IdCommand, JsonArgs, ScanCommand, UrlCommand,
    YearArgs,
};
use tw_toolbox::core::file_compare::{compare_files, entries_from_dir, write_csv};
use tw_toolbox::core::id_code::{find_region, generate_id_code, regions};
use tw_toolbox::core::insurance_age::calculate_ages;
use tw_toolbox::core::json_view::{format_json, JsonTreeNode};
use tw_toolbox::core::scan_case::generate_scan_case;
use tw_toolbox::core::url_analysis::{analyze_url, UrlRules};
use tw_toolbox::core::{ConfigProvider, HistoryEntry, ScanCaseResult, UrlAnalysis};
use tw_toolbox::utils::{logger, validation::Validate};
use tw_toolbox::{
    check_id_code, Calendar, CliConfig, DatePair, Gender, History, LocalStorage, ToolError,
    ToolboxConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入配置（檔案不存在時使用預設值）
    let mut config = match ToolboxConfig::from_file_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config.display(), e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    // 初始化日誌
    if cli.log_json || config.logging.json {
        logger::init_json_logger(cli.verbose, config.logging.level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, config.logging.level.as_deref());
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 應用命令列覆蓋設定
    if let Some(data_dir) = &cli.data_dir {
        config.storage.data_dir = data_dir.clone();
        tracing::debug!("🔧 Data directory overridden to: {}", data_dir);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    if let Err(e) = run(cli.command, &config) {
        let Some(tool_error) = e.downcast_ref::<ToolError>() else {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        };

        tracing::debug!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            tool_error,
            tool_error.category(),
            tool_error.severity()
        );
        eprintln!("❌ {}", tool_error.user_friendly_message());
        eprintln!("💡 建議: {}", tool_error.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        std::process::exit(tool_error.severity().exit_code());
    }

    Ok(())
}

fn run(command: Command, config: &ToolboxConfig) -> anyhow::Result<()> {
    match command {
        Command::Id(cmd) => run_id(cmd),
        Command::Year(args) => run_year(args),
        Command::Age(args) => run_age(args),
        Command::Url(cmd) => run_url(cmd, config),
        Command::Scan(cmd) => run_scan(cmd, config),
        Command::Json(args) => run_json(args),
        Command::Compare(args) => run_compare(args),
    }
}

fn history<T: HistoryEntry>(config: &ToolboxConfig) -> History<LocalStorage, T> {
    let storage = LocalStorage::new(config.data_dir().to_string());
    History::new(storage, config.history_limit())
}

fn run_id(cmd: IdCommand) -> anyhow::Result<()> {
    match cmd {
        IdCommand::Validate { code } => {
            let code = code.trim().to_uppercase();
            check_id_code(&code)?;
            println!("✅ 有效的身分證字號: {}", code);
        }
        IdCommand::Generate {
            region,
            gender,
            count,
        } => {
            let gender: Gender = gender.parse()?;
            let mut letters = region.trim().chars();
            let letter = match (letters.next(), letters.next()) {
                (Some(c), None) => c.to_ascii_uppercase(),
                _ => return Err(ToolError::InvalidRegion { region }.into()),
            };
            if let Some(r) = find_region(letter) {
                tracing::info!("Generating {} ID(s) for {} {}", count, r.name, gender.label());
            }
            for _ in 0..count {
                println!("{}", generate_id_code(letter, gender)?);
            }
        }
        IdCommand::Regions => {
            for r in regions() {
                println!("{}  {}  {}", r.letter, r.weight, r.name);
            }
        }
    }
    Ok(())
}

fn run_year(args: YearArgs) -> anyhow::Result<()> {
    let (side, text) = match (args.minguo, args.western) {
        (Some(text), _) => (Calendar::Minguo, text),
        (None, Some(text)) => (Calendar::Western, text),
        (None, None) => unreachable!("clap requires one of --minguo/--western"),
    };

    let mut pair = DatePair::default();
    pair.edit(side, &text)?;
    println!("民國年日期 (YYY/MM/DD): {}", pair.minguo);
    println!("西元年日期 (YYYY/MM/DD): {}", pair.western);
    Ok(())
}

fn run_age(args: AgeArgs) -> anyhow::Result<()> {
    let on = args
        .on
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let result = calculate_ages(args.birth, on)?;
    println!("實際足歲: {} 歲", result.actual_age);
    println!("保險年齡: {} 歲", result.insurance_age);
    Ok(())
}

fn print_url_analysis(analysis: &UrlAnalysis) {
    println!("轉換後連結: {}", analysis.transformed_url);
    if !analysis.notes.is_empty() {
        println!("備註: {}", analysis.notes);
    }
    println!("參數分析:");
    for param in &analysis.params {
        println!("  {} = {}", param.key, param.value);
    }
}

fn run_url(cmd: UrlCommand, config: &ToolboxConfig) -> anyhow::Result<()> {
    let history = history::<UrlAnalysis>(config);
    match cmd {
        UrlCommand::Analyze { url, notes } => {
            let analysis = analyze_url(url.trim(), &notes, &UrlRules::from_config(config))?;
            print_url_analysis(&analysis);
            history.record(analysis)?;
        }
        UrlCommand::History(args) => {
            let entries = edit_history(&history, args)?;
            for entry in entries {
                let notes = if entry.notes.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", entry.notes)
                };
                println!("{}  {}{}", entry.timestamp, entry.display_text, notes);
                println!("    {}", entry.original_url);
            }
        }
    }
    Ok(())
}

fn run_scan(cmd: ScanCommand, config: &ToolboxConfig) -> anyhow::Result<()> {
    let history = history::<ScanCaseResult>(config);
    match cmd {
        ScanCommand::Generate { base_name } => {
            let result = generate_scan_case(&base_name, config.scan_suffixes())?;
            println!("{}", result.joined());
            history.record(result)?;
        }
        ScanCommand::History(args) => {
            for entry in edit_history(&history, args)? {
                println!("{}  {}", entry.timestamp, entry.base_name);
            }
        }
    }
    Ok(())
}

fn edit_history<T: HistoryEntry>(
    history: &History<LocalStorage, T>,
    args: HistoryArgs,
) -> anyhow::Result<Vec<T>> {
    if args.clear {
        history.clear()?;
        println!("已清除所有歷史紀錄");
        return Ok(Vec::new());
    }
    let entries = match args.delete {
        Some(key) => history.remove(&key)?,
        None => history.entries()?,
    };
    if entries.is_empty() {
        println!("尚無歷史紀錄。");
    }
    Ok(entries)
}

fn run_json(args: JsonArgs) -> anyhow::Result<()> {
    let input = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let Some(formatted) = format_json(&input)? else {
        return Ok(());
    };

    if args.tree {
        for line in JsonTreeNode::root(&formatted.value).render(args.depth) {
            println!("{}", line);
        }
    } else {
        println!("{}", formatted.pretty);
    }
    Ok(())
}

fn run_compare(args: CompareArgs) -> anyhow::Result<()> {
    let original = entries_from_dir(&args.original_dir)?;
    let modified = entries_from_dir(&args.modified_dir)?;
    tracing::info!(
        "已選擇: 原始 {} 個檔案, 修改後 {} 個檔案",
        original.len(),
        modified.len()
    );

    let rows = compare_files(&original, &modified)?;

    if args.csv {
        write_csv(&rows, std::io::stdout().lock())?;
        return Ok(());
    }

    let dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
    println!(
        "{:<40} {:>14} {:>14} {:>12}  狀態",
        "檔名", "原始大小", "修改後大小", "差異"
    );
    for row in rows {
        println!(
            "{:<40} {:>14} {:>14} {:>12}  {}",
            row.name,
            dash(row.original_size.map(|v| v.to_string())),
            dash(row.modified_size.map(|v| v.to_string())),
            dash(row.difference.map(|v| v.to_string())),
            row.status
        );
    }
    Ok(())
}
