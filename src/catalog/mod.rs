//! カタログ読み込み
//!
//! - ファイル/バイト列: calamine で1枚目のシートを読む（xlsx/xls/ods自動判定）
//! - URL: HTTP GET（200以外は「無い」扱い）
//!
//! 行の解釈（エイリアス照合など）は `liquor_hub_common::catalog` が行う。

mod fetch;

pub use fetch::fetch;

use crate::config::{CatalogSource, Config};
use crate::error::{LiquorHubError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use liquor_hub_common::{Catalog, CellValue};
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

/// Excelのバイト列からカタログを作る
pub fn parse(bytes: &[u8]) -> Result<Catalog> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| LiquorHubError::CatalogParse(e.to_string()))?;

    let sheet_name = workbook.sheet_names().first().cloned().unwrap_or_default();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LiquorHubError::CatalogParse("el libro no tiene hojas".into()))?
        .map_err(|e| LiquorHubError::CatalogParse(e.to_string()))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(|c| cell_value(c).as_text()).collect(),
        None => {
            debug!(sheet = %sheet_name, "hoja vacía");
            return Ok(Catalog::default());
        }
    };

    let data: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    debug!(sheet = %sheet_name, ?headers, rows = data.len(), "hoja leída");

    let catalog = Catalog::from_rows(&headers, &data);
    info!(sheet = %sheet_name, liquors = catalog.len(), "catálogo cargado");
    Ok(catalog)
}

/// ファイルからカタログを読む
pub fn load_file(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(LiquorHubError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    parse(&bytes)
}

/// 既定のカタログを読む
///
/// URLが設定されていればHTTPで、なければ同梱ファイルを読む。
/// 見つからない場合は `CatalogNotFound`（呼び出し側で手動アップロードに切り替える）。
pub async fn load_default(config: &Config) -> Result<Catalog> {
    match config.catalog_source() {
        CatalogSource::Url(url) => fetch(&url, config.timeout()).await,
        CatalogSource::File(path) => {
            if !path.is_file() {
                return Err(LiquorHubError::CatalogNotFound(path.display().to_string()));
            }
            load_file(&path)
        }
    }
}

/// calamineのセルを共通のセル型に変換
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::text(s.as_str()),
        other => CellValue::text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_conversion() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(cell_value(&Data::Int(600)), CellValue::Number(600.0));
        assert_eq!(cell_value(&Data::Float(412.5)), CellValue::Number(412.5));
        assert_eq!(cell_value(&Data::String("Ron".into())), CellValue::Text("Ron".into()));
        assert_eq!(cell_value(&Data::String(String::new())), CellValue::Empty);
    }

    #[test]
    fn test_parse_garbage_is_parse_error() {
        let result = parse(b"esto no es un excel");
        assert!(matches!(result, Err(LiquorHubError::CatalogParse(_))));
    }

    #[test]
    fn test_load_file_not_found() {
        let result = load_file(Path::new("/nonexistent/LICORES.xlsx"));
        assert!(matches!(result, Err(LiquorHubError::FileNotFound(_))));
    }
}
