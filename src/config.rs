use crate::error::{MappingError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Змінна середовища з URL фіду (має пріоритет над файлом)
pub const FEED_URL_ENV: &str = "HUB_FEED_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Вкладка з категоріями фіду
    pub category_sheet: String,
    /// Вкладки, які має містити згенерований файл мапінгу
    pub expected_sheets: Vec<String>,
    pub feed_timeout_seconds: u64,
    pub feed_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            category_sheet: "Категорія+".into(),
            expected_sheets: [
                "Результат",
                "Довідник кольорів",
                "Каскад+",
                "Конвертер+",
                "Категорія+",
                "Інструкція щодо мапінгу Каскад",
                "Підказки категорій",
                "Ігнорувати+",
                "Довідник Каста",
                "Оффер+",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            feed_timeout_seconds: 30,
            feed_url: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Прочитати конфігурацію з файлу; відсутній файл означає значення за замовчуванням
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MappingError::Config("Домашній каталог не знайдено".into()))?;
        Ok(home.join(".config").join("hub-mapping").join("config.json"))
    }

    pub fn get_feed_url(&self) -> Result<String> {
        // Змінна середовища має пріоритет
        if let Ok(url) = std::env::var(FEED_URL_ENV) {
            if !url.trim().is_empty() {
                return Ok(url);
            }
        }

        self.feed_url.clone().ok_or_else(|| {
            MappingError::Config(format!(
                "URL фіду не задано. Передайте його аргументом, через {} або `hub-mapping config --set-feed-url URL`",
                FEED_URL_ENV
            ))
        })
    }

    pub fn set_feed_url(&mut self, url: String) -> Result<()> {
        self.feed_url = Some(url);
        self.save()
    }

    pub fn feed_timeout(&self) -> Duration {
        Duration::from_secs(self.feed_timeout_seconds)
    }
}

/// Конфігурація, яка читається лише при першому зверненні
///
/// Команди, що не потребують налаштувань, не падають через пошкоджений файл.
#[derive(Debug, Default)]
pub struct LazyConfig {
    path: Option<PathBuf>,
    loaded: Option<Config>,
}

impl LazyConfig {
    /// Файл за стандартним шляхом (`Config::config_path`)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            loaded: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn get(&mut self) -> Result<&Config> {
        if self.loaded.is_none() {
            let config = match &self.path {
                Some(path) => Config::load_from(path)?,
                None => Config::load()?,
            };
            self.loaded = Some(config);
        }

        self.loaded
            .as_ref()
            .ok_or_else(|| MappingError::Config("Конфігурацію не завантажено".into()))
    }

    pub fn into_config(mut self) -> Result<Config> {
        self.get()?;
        self.loaded
            .take()
            .ok_or_else(|| MappingError::Config("Конфігурацію не завантажено".into()))
    }
}
