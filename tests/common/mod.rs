//! 統合テスト用のヘルパー（ローカルHTTPサーバー・テスト用Excel）

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

// 1x1 PNG
pub const PNG_1X1: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// 1回だけ応答するHTTPサーバーを立てる
///
/// 戻り値はベースURLと、受け取ったリクエスト全文を返すハンドル。
pub async fn serve_once(status: u16, content_type: &str, body: Vec<u8>) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().expect("local addr");
    let content_type = content_type.to_string();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept failed");
        let request = read_request(&mut stream).await;

        let head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            reason(status),
            content_type,
            body.len()
        );
        let _ = stream.write_all(head.as_bytes()).await;
        let _ = stream.write_all(&body).await;
        let _ = stream.shutdown().await;

        request
    });

    (format!("http://{}", addr), handle)
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];

    loop {
        let n = match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// 見出しが既定と違うカタログ（空行・商品名なしの行を含む）
///
/// | Artículo            | Peso Vacío (g) |
/// | Ron Añejo 750ml     | 600            |
/// | (空行)               |                |
/// | (なし)               | 400            |
/// | Heineken Barril 20L | 5000           |
/// | Vino Tarapacá Copa  | "500 g"        |
pub fn sample_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "Artículo").unwrap();
    worksheet.write_string(0, 1, "Peso Vacío (g)").unwrap();

    worksheet.write_string(1, 0, "Ron Añejo 750ml").unwrap();
    worksheet.write_number(1, 1, 600.0).unwrap();

    worksheet.write_number(3, 1, 400.0).unwrap();

    worksheet.write_string(4, 0, "Heineken Barril 20L").unwrap();
    worksheet.write_number(4, 1, 5000.0).unwrap();

    worksheet.write_string(5, 0, "Vino Tarapacá Copa").unwrap();
    worksheet.write_string(5, 1, "500 g").unwrap();

    workbook.save_to_buffer().unwrap()
}
