//! Спільні хелпери інтеграційних тестів
#![allow(dead_code)]

use hub_mapping_check::feed::FeedCategoryExtractor;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Записати рядки у вкладку; порожні рядки-значення пропускаються
pub fn write_rows(worksheet: &mut Worksheet, first_row: u32, rows: &[&[&str]]) -> Result<(), XlsxError> {
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string(first_row + r as u32, c as u16, *value)?;
            }
        }
    }
    Ok(())
}

/// Створити книгу з однією вкладкою, рядки з A1
pub fn write_single_sheet(path: &Path, sheet_name: &str, rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).expect("Failed to name sheet");
    write_rows(worksheet, 0, rows).expect("Failed to write rows");
    workbook.save(path).expect("Failed to save workbook");
}

/// HTTP-клієнт без системних проксі (тести ходять на 127.0.0.1)
pub fn local_extractor(timeout: Duration) -> FeedCategoryExtractor {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()
        .expect("Failed to build client");
    FeedCategoryExtractor::from_client(client)
}

async fn read_request(socket: &mut TcpStream) {
    let mut buf = [0u8; 1024];
    let mut req = Vec::new();
    loop {
        match socket.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                req.extend_from_slice(&buf[..n]);
                if req.windows(4).any(|w| w == b"\r\n\r\n") || req.len() > 16 * 1024 {
                    break;
                }
            }
            Err(_) => break,
        }
    }
}

/// Відповісти на один запит і повернути URL фіду
pub async fn serve_once(status_line: &'static str, body: String) -> String {
    serve_bytes_once(status_line, "application/xml; charset=utf-8", body.into_bytes()).await
}

/// Відповісти сирими байтами з заданим Content-Type
pub async fn serve_bytes_once(status_line: &'static str, content_type: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let Ok((mut socket, _peer)) = listener.accept().await else {
            return;
        };
        read_request(&mut socket).await;

        let head = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status_line,
            content_type,
            body.len()
        );
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(&body).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{}/feed.xml", addr)
}

/// Прийняти з'єднання і ніколи не відповісти
pub async fn serve_silence() -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let Ok((mut socket, _peer)) = listener.accept().await else {
            return;
        };
        read_request(&mut socket).await;
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    format!("http://{}/feed.xml", addr)
}

/// URL порту, на якому ніхто не слухає
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/feed.xml", addr)
}

pub const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<yml_catalog date="2024-01-01 10:00">
  <shop>
    <categories>
      <category id="1000" rz_id="169823">Домашній текстиль</category>
      <category id="1001" rz_id="169824">Постільна білизна</category>
      <category id="1002">Рушники</category>
    </categories>
  </shop>
</yml_catalog>"#;
