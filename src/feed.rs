//! Категорії з XML-фіду постачальника
//!
//! Структура фіду: `<category id="1000" rz_id="169823">Домашній текстиль</category>`.
//! Категорії можуть лежати в `<categories>` або `<shop><categories>`, тому
//! обходиться все дерево.

use crate::error::{MappingError, Result};
use hub_mapping_common::CategoryPair;
use encoding_rs::{Encoding, UTF_8};
use roxmltree::{Document, ParsingOptions};
use std::borrow::Cow;
use std::time::Duration;
use tracing::debug;

/// Тайм-аут запиту фіду за замовчуванням
pub const DEFAULT_FEED_TIMEOUT: Duration = Duration::from_secs(30);

const CATEGORY_TAG: &str = "category";

/// Скільки байтів на початку документа шукати XML-декларацію
const DECLARATION_SCAN_LIMIT: usize = 1024;

/// Завантажувач категорій з XML-фіду
pub struct FeedCategoryExtractor {
    client: reqwest::Client,
}

impl FeedCategoryExtractor {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_FEED_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MappingError::FeedFetch(format!("HTTP клієнт: {}", e)))?;
        Ok(Self::from_client(client))
    }

    /// Використати готовий клієнт (власні проксі, заголовки тощо)
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Завантажити фід і витягти пари (ID, назва) у порядку документа
    pub async fn fetch_category_pairs(&self, feed_url: &str) -> Result<Vec<CategoryPair>> {
        let body = self.fetch_body(feed_url).await?;
        parse_category_pairs(&decode_feed_body(&body))
    }

    async fn fetch_body(&self, feed_url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(feed_url)
            .send()
            .await
            .map_err(|e| MappingError::FeedFetch(format!("{}: {}", feed_url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MappingError::FeedFetch(format!("{}: HTTP {}", feed_url, status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| MappingError::FeedFetch(format!("{}: {}", feed_url, e)))?;
        debug!(url = feed_url, bytes = body.len(), "фід завантажено");

        Ok(body.to_vec())
    }
}

/// Декодувати тіло фіду в текст
///
/// Порядок: BOM, коректний UTF-8, кодування з `<?xml ... encoding="..."?>`.
/// Заголовок `Content-Type` не враховується, фіди часто віддають його без charset.
pub fn decode_feed_body(bytes: &[u8]) -> Cow<'_, str> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text;
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let encoding = declared_encoding(bytes).unwrap_or(UTF_8);
    debug!(encoding = encoding.name(), "фід не в UTF-8");
    let (text, _) = encoding.decode_without_bom_handling(bytes);
    text
}

/// Кодування з XML-декларації, якщо воно відоме encoding_rs
fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(DECLARATION_SCAN_LIMIT)];
    // Декларація завжди ASCII-сумісна
    let head = String::from_utf8_lossy(head);
    let declaration = head.trim_start().strip_prefix("<?xml")?;
    let declaration = &declaration[..declaration.find("?>")?];

    let rest = &declaration[declaration.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &rest[1..];
    let label = &value[..value.find(quote)?];

    Encoding::for_label(label.trim().as_bytes())
}

/// Прибрати фрагмент `#...` з URL фіду
pub fn strip_fragment(feed_url: &str) -> &str {
    feed_url.split('#').next().unwrap_or(feed_url)
}

/// Витягти пари категорій з тексту XML
///
/// Пара додається лише якщо є і атрибут `id`, і непорожній текст.
/// Повідомлення парсера зберігається в помилці без змін.
pub fn parse_category_pairs(xml: &str) -> Result<Vec<CategoryPair>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)
        .map_err(|e| MappingError::FeedParse(e.to_string()))?;

    let pairs = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().namespace().is_none())
        .filter(|n| n.tag_name().name() == CATEGORY_TAG)
        .filter_map(|n| {
            let id = n.attribute("id")?.trim();
            // Текст до першого дочірнього елемента; коментарі пропускаються
            let text: String = n
                .children()
                .take_while(|c| !c.is_element())
                .filter(|c| c.is_text())
                .filter_map(|c| c.text())
                .collect();
            let name = text.trim();
            if id.is_empty() || name.is_empty() {
                return None;
            }
            Some(CategoryPair::new(id, name))
        })
        .collect();

    Ok(pairs)
}
