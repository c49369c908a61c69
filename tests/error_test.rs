//! Тести помилок
//!
//! Перевірка повідомлень і перетворень MappingError

use hub_mapping_check::error::MappingError;

/// Display для всіх рядкових варіантів
#[test]
fn test_error_display() {
    let errors = vec![
        MappingError::Config("тест".to_string()),
        MappingError::FileNotFound("mapping.xlsx".to_string()),
        MappingError::WorkbookOpen("зіпсований файл".to_string()),
        MappingError::SheetNotFound("Категорія+".to_string()),
        MappingError::FeedFetch("HTTP 404".to_string()),
        MappingError::FeedParse("unknown token at 1:1".to_string()),
        MappingError::Verification("розбіжності".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "порожнє повідомлення: {:?}", err);
    }
}

#[test]
fn test_sheet_not_found_message() {
    let err = MappingError::SheetNotFound("Категорія+".to_string());
    assert_eq!(err.to_string(), "Вкладка 'Категорія+' не знайдена в Excel файлі");
}

/// Текст парсера зберігається без змін
#[test]
fn test_feed_parse_keeps_message() {
    let parser_message = roxmltree::Document::parse("{not xml}").unwrap_err().to_string();
    assert_eq!(parser_message, "unknown token at 1:1");

    let err = hub_mapping_check::feed::parse_category_pairs("{not xml}").unwrap_err();
    assert!(matches!(&err, MappingError::FeedParse(message) if *message == parser_message));
    assert_eq!(err.to_string(), format!("Помилка розбору XML фіду: {}", parser_message));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: MappingError = io_err.into();

    assert!(matches!(err, MappingError::Io(_)));
    assert!(err.to_string().contains("IO"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: MappingError = json_err.into();

    assert!(matches!(err, MappingError::JsonParse(_)));
}

/// common::Error передається прозоро
#[test]
fn test_common_error_transparent() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "pairs.json");
    let common_err = hub_mapping_common::Error::Io(io_err);
    let err: MappingError = common_err.into();

    assert!(matches!(err, MappingError::Common(_)));
    assert_eq!(err.to_string(), "IO error: pairs.json");
}
