//! カタログExcel生成（共通ライブラリ）
//!
//! 読み込み側のエイリアスで認識される列名（PRODUCTO / PESO BOTELLA）で
//! カタログを書き出す。空のリストを渡せば入力用テンプレートになる。

use crate::catalog::DEFAULT_CATALOG_FILENAME;
use crate::error::{Error, Result};
use crate::types::Liquor;
use rust_xlsxwriter::*;

/// 商品名列の見出し
pub const NAME_HEADER: &str = "PRODUCTO";
/// 重量列の見出し
pub const WEIGHT_HEADER: &str = "PESO BOTELLA";

/// シート名（拡張子を除いた既定ファイル名）
fn sheet_name() -> &'static str {
    DEFAULT_CATALOG_FILENAME
        .strip_suffix(".xlsx")
        .unwrap_or(DEFAULT_CATALOG_FILENAME)
}

/// カタログをxlsxのバイト列に書き出す
pub fn generate_catalog_buffer(liquors: &[Liquor]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x166534))
        .set_background_color(Color::RGB(0xEAFAF1))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0x86EFAC));

    let weight_format = Format::new().set_num_format("0.0");

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name())
        .map_err(|e| Error::Template(format!("シート名設定エラー: {}", e)))?;

    worksheet
        .set_column_width(0, 40)
        .and_then(|ws| ws.set_column_width(1, 16))
        .map_err(|e| Error::Template(format!("列幅設定エラー: {}", e)))?;

    worksheet
        .write_string_with_format(0, 0, NAME_HEADER, &header_format)
        .and_then(|ws| ws.write_string_with_format(0, 1, WEIGHT_HEADER, &header_format))
        .map_err(|e| Error::Template(format!("見出し書き込みエラー: {}", e)))?;

    for (i, liquor) in liquors.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet
            .write_string(row, 0, &liquor.name)
            .map_err(|e| Error::Template(format!("商品名書き込みエラー: {}", e)))?;

        // 空重量0は未登録として空欄のままにする
        if liquor.empty_weight > 0.0 {
            worksheet
                .write_number_with_format(row, 1, liquor.empty_weight, &weight_format)
                .map_err(|e| Error::Template(format!("重量書き込みエラー: {}", e)))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Template(format!("Excel保存エラー: {}", e)))
}

/// 入力用の空テンプレート
pub fn generate_template_buffer() -> Result<Vec<u8>> {
    generate_catalog_buffer(&[])
}
