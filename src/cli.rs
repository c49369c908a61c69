use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hub-mapping")]
#[command(about = "Звірка категорій Excel-мапінгу Hub з XML-фідом", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Детальний лог
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Показати вкладки Excel файлу
    Sheets {
        /// Excel файл мапінгу
        #[arg(required = true)]
        workbook: PathBuf,

        /// Перевірити наявність усіх очікуваних вкладок
        #[arg(long)]
        expect: bool,
    },

    /// Прочитати пари (ID, назва) з вкладки категорій
    Extract {
        /// Excel файл мапінгу
        #[arg(required = true)]
        workbook: PathBuf,

        /// Вкладка (за замовчуванням з конфігурації)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Зберегти пари у JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Завантажити категорії з XML-фіду
    Feed {
        /// URL фіду (за замовчуванням з конфігурації)
        url: Option<String>,

        /// Зберегти пари у JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Порівняти збережені списки пар
    Compare {
        /// JSON з парами з Excel
        #[arg(required = true)]
        workbook_pairs: PathBuf,

        /// JSON з парами з фіду
        #[arg(required = true)]
        feed_pairs: PathBuf,

        /// Вивести звіт у JSON
        #[arg(long)]
        json: bool,
    },

    /// Прочитати Excel, завантажити фід і перевірити відповідність
    Check {
        /// Excel файл мапінгу
        #[arg(required = true)]
        workbook: PathBuf,

        /// URL фіду (за замовчуванням з конфігурації)
        #[arg(short, long)]
        feed_url: Option<String>,

        /// Вкладка (за замовчуванням з конфігурації)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Вимагати також, щоб усі категорії фіду були в Excel
        #[arg(long)]
        strict: bool,

        /// Вивести звіт у JSON
        #[arg(long)]
        json: bool,
    },

    /// Показати/змінити конфігурацію
    Config {
        /// Задати URL фіду за замовчуванням
        #[arg(long)]
        set_feed_url: Option<String>,

        /// Показати конфігурацію
        #[arg(long)]
        show: bool,
    },
}
