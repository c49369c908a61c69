use clap::Parser;
use hub_mapping_check::{cli, config, error, feed, reconcile, workbook};
use hub_mapping_check::{ComparisonReport, CoveragePolicy};
use hub_mapping_common::{load_pairs, save_pairs};
use cli::{Cli, Commands};
use config::LazyConfig;
use error::{MappingError, Result};
use feed::{strip_fragment, FeedCategoryExtractor};
use workbook::WorkbookCategoryReader;

fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &ComparisonReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Результати порівняння:");
    println!("  - Категорій в Excel: {}", report.workbook_count);
    println!("  - Категорій в XML: {}", report.feed_count);
    println!("  - Спільних категорій: {}", report.common_count);
    println!("  - {}", report.details());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    // Файл налаштувань читається лише командами, яким він потрібен
    let mut config = LazyConfig::new();

    match cli.command {
        Commands::Sheets { workbook, expect } => {
            let reader = WorkbookCategoryReader::open(&workbook)?;
            let names = reader.sheet_names();

            println!("Вкладки ({}):", names.len());
            for name in &names {
                println!("  - {}", name);
            }

            if expect {
                let expected = &config.get()?.expected_sheets;
                let (all_found, missing) = reader.verify_sheets_exist(expected.as_slice());
                if !all_found {
                    return Err(MappingError::Verification(format!(
                        "Не знайдено очікуваних вкладок в Excel файлі: {}\nЗнайдені вкладки: {}",
                        missing.join(", "),
                        names.join(", ")
                    )));
                }
                println!("✔ Всі очікувані вкладки знайдено ({})", expected.len());
            }
        }

        Commands::Extract { workbook, sheet, output } => {
            let sheet = match sheet {
                Some(sheet) => sheet,
                None => config.get()?.category_sheet.clone(),
            };
            let mut reader = WorkbookCategoryReader::open(&workbook)?;
            let pairs = reader.extract_category_pairs(&sheet)?;
            println!("✔ Знайдено категорій у вкладці '{}': {}", sheet, pairs.len());

            match output {
                Some(path) => {
                    save_pairs(&pairs, &path)?;
                    println!("✔ Збережено: {}", path.display());
                }
                None => {
                    for pair in &pairs {
                        println!("{}\t{}", pair.id, pair.name);
                    }
                }
            }
        }

        Commands::Feed { url, output } => {
            let url = match url {
                Some(url) => url,
                None => config.get()?.get_feed_url()?,
            };
            let extractor = FeedCategoryExtractor::with_timeout(config.get()?.feed_timeout())?;
            let pairs = extractor.fetch_category_pairs(strip_fragment(&url)).await?;
            println!("✔ Знайдено категорій у фіді: {}", pairs.len());

            match output {
                Some(path) => {
                    save_pairs(&pairs, &path)?;
                    println!("✔ Збережено: {}", path.display());
                }
                None => {
                    for pair in &pairs {
                        println!("{}\t{}", pair.id, pair.name);
                    }
                }
            }
        }

        Commands::Compare { workbook_pairs, feed_pairs, json } => {
            let workbook_pairs = load_pairs(&workbook_pairs)?;
            let feed_pairs = load_pairs(&feed_pairs)?;
            let report = reconcile::compare(&workbook_pairs, &feed_pairs);
            print_report(&report, json)?;
        }

        Commands::Check { workbook, feed_url, sheet, strict, json } => {
            let sheet = match sheet {
                Some(sheet) => sheet,
                None => config.get()?.category_sheet.clone(),
            };
            let feed_url = match feed_url {
                Some(url) => url,
                None => config.get()?.get_feed_url()?,
            };

            if !json {
                println!("[1/3] Читання вкладки '{}'...", sheet);
            }
            let workbook_pairs = {
                let mut reader = WorkbookCategoryReader::open(&workbook)?;
                reader.extract_category_pairs(&sheet)?
            };
            if workbook_pairs.is_empty() {
                return Err(MappingError::Verification(format!(
                    "Вкладка '{}' порожня або не містить даних",
                    sheet
                )));
            }

            if !json {
                println!("[2/3] Завантаження фіду: {}", strip_fragment(&feed_url));
            }
            let extractor = FeedCategoryExtractor::with_timeout(config.get()?.feed_timeout())?;
            let feed_pairs = extractor.fetch_category_pairs(strip_fragment(&feed_url)).await?;

            if !json {
                println!("[3/3] Порівняння...");
            }
            let report = reconcile::compare(&workbook_pairs, &feed_pairs);
            print_report(&report, json)?;

            let policy = if strict { CoveragePolicy::Exact } else { CoveragePolicy::WorkbookInFeed };
            report.verify(policy).map_err(MappingError::Verification)?;

            if !json {
                println!("\n✅ Усі категорії з Excel присутні в XML-фіді з правильними назвами");
            }
        }

        Commands::Config { set_feed_url, show } => {
            let mut config = config.into_config()?;

            if let Some(url) = set_feed_url {
                config.set_feed_url(url)?;
                println!("✔ URL фіду збережено");
            }

            if show {
                println!("Конфігурація:");
                println!("  Вкладка категорій: {}", config.category_sheet);
                println!("  Очікувані вкладки: {}", config.expected_sheets.join(", "));
                println!("  Тайм-аут фіду: {} с", config.feed_timeout_seconds);
                println!("  URL фіду: {}", config.feed_url.as_deref().unwrap_or("не задано"));
            }
        }
    }

    Ok(())
}
