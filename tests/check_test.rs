//! Повний сценарій: Excel мапінгу + XML-фід -> звіт порівняння

mod support;

use hub_mapping_check::reconcile::compare;
use hub_mapping_check::workbook::WorkbookCategoryReader;
use hub_mapping_check::CoveragePolicy;
use std::time::Duration;
use support::{local_extractor, serve_once, write_single_sheet, SAMPLE_FEED};
use tempfile::tempdir;

const SHEET: &str = "Категорія+";

#[tokio::test]
async fn test_workbook_matches_feed() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("mapping_R2K3.xlsx");
    // Фід може містити категорії, відфільтровані з Excel (1002)
    write_single_sheet(
        &path,
        SHEET,
        &[
            &["ID категорії з фіду", "Назва категорії з фіду"],
            &["1000", "Дім і сад > Домашній текстиль"],
            &["1001", "Постільна білизна"],
        ],
    );

    let workbook_pairs = {
        let mut reader = WorkbookCategoryReader::open(&path).unwrap();
        reader.extract_category_pairs(SHEET).unwrap()
    };
    let url = serve_once("200 OK", SAMPLE_FEED.to_string()).await;
    let feed_pairs = local_extractor(Duration::from_secs(5))
        .fetch_category_pairs(&url)
        .await
        .unwrap();

    let report = compare(&workbook_pairs, &feed_pairs);

    assert_eq!(report.workbook_count, 2);
    assert_eq!(report.feed_count, 3);
    assert_eq!(report.common_count, 2);
    assert!(report.mismatched_names.is_empty());
    assert!(report.missing_in_feed.is_empty());
    assert_eq!(report.missing_in_workbook.len(), 1);
    assert_eq!(report.missing_in_workbook[0].id, "1002");
    assert!(!report.all_match);

    assert!(report.verify(CoveragePolicy::WorkbookInFeed).is_ok());
    assert!(report.verify(CoveragePolicy::Exact).is_err());
}

#[tokio::test]
async fn test_workbook_diverges_from_feed() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("mapping.xlsx");
    write_single_sheet(
        &path,
        SHEET,
        &[
            &["ID категорії з фіду", "Назва категорії з фіду"],
            &["1000", "Одяг"],
            &["1001", "Постільна білизна"],
            &["1002", "Рушники"],
            &["9999", "Видалена категорія"],
        ],
    );

    let workbook_pairs = WorkbookCategoryReader::open(&path)
        .unwrap()
        .extract_category_pairs(SHEET)
        .unwrap();
    let url = serve_once("200 OK", SAMPLE_FEED.to_string()).await;
    let feed_pairs = local_extractor(Duration::from_secs(5))
        .fetch_category_pairs(&url)
        .await
        .unwrap();

    let report = compare(&workbook_pairs, &feed_pairs);

    assert_eq!(report.common_count, 3);
    assert_eq!(report.missing_in_feed.len(), 1);
    assert_eq!(report.missing_in_feed[0].id, "9999");
    assert_eq!(report.mismatched_names.len(), 1);
    assert_eq!(report.mismatched_names[0].workbook_name, "Одяг");
    assert_eq!(report.mismatched_names[0].feed_name, "Домашній текстиль");

    let err = report.verify(CoveragePolicy::WorkbookInFeed).unwrap_err();
    assert!(err.contains("відсутні в XML-фіді (1): 9999"));
    assert!(err.contains("1000 (Excel: 'Одяг', XML: 'Домашній текстиль')"));
}
