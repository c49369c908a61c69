use thiserror::Error;

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Помилка конфігурації: {0}")]
    Config(String),

    #[error("Excel файл не знайдено: {0}")]
    FileNotFound(String),

    #[error("Помилка при завантаженні Excel файлу: {0}")]
    WorkbookOpen(String),

    #[error("Вкладка '{0}' не знайдена в Excel файлі")]
    SheetNotFound(String),

    #[error("Номер рядка заголовка рахується від 1, отримано {0}")]
    InvalidHeaderRow(usize),

    #[error("Помилка при завантаженні XML фіду: {0}")]
    FeedFetch(String),

    #[error("Помилка розбору XML фіду: {0}")]
    FeedParse(String),

    #[error("Перевірку не пройдено:\n{0}")]
    Verification(String),

    #[error("Помилка JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO помилка: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] hub_mapping_common::Error),
}

pub type Result<T> = std::result::Result<T, MappingError>;
