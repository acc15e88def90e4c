//! カタログ（商品名 → 空ボトル重量）
//!
//! Excelの1枚目のシートをヘッダー行＋データ行として受け取り、
//! 列名のエイリアスで商品名列と重量列を探す。列の位置や順番は問わない。
//! ファイルの読み込み自体は呼び出し側（CLI/Web）が行う。

use crate::parser::parse_leading_number;
use crate::types::Liquor;
use serde::{Deserialize, Serialize};

/// 既定のカタログファイル名
pub const DEFAULT_CATALOG_FILENAME: &str = "LICORES.xlsx";

/// 商品名列のエイリアス（優先順）
pub const NAME_COLUMN_ALIASES: &[&str] = &["ARTÍCULO", "REFERENCIA", "PRODUCTO", "NOMBRE", "NAME"];

/// 重量列のエイリアス（優先順）
pub const WEIGHT_COLUMN_ALIASES: &[&str] =
    &["PESO BOTELLA", "PESO VACÍO", "VACÍO", "EMPTY WEIGHT", "PESO"];

/// 商品名が取れなかった行の名前（結果からは除外される）
pub const UNKNOWN_NAME: &str = "Desconocido";

/// セルの値
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// 文字列セル（空文字は空セル扱い）
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// 表示用の文字列（整数は小数点なし）
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
        }
    }

    /// 数値として読む（読めなければ `None`）
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            CellValue::Text(s) => parse_leading_number(s),
            _ => None,
        }
    }
}

/// 読み込み済みのカタログ
///
/// 再読み込み時は丸ごと置き換える。中身は変更しない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    liquors: Vec<Liquor>,
}

impl Catalog {
    pub fn new(liquors: Vec<Liquor>) -> Self {
        Self { liquors }
    }

    /// ヘッダー行とデータ行からカタログを作る
    ///
    /// - 全セルが空の行は読み飛ばす（行番号にも数えない）
    /// - 商品名が取れない行は除外する（IDの番号は詰めない）
    /// - 重量が無い・数値でない場合は0
    pub fn from_rows(headers: &[String], rows: &[Vec<CellValue>]) -> Self {
        let upper_headers: Vec<String> = headers.iter().map(|h| h.to_uppercase()).collect();

        let liquors = rows
            .iter()
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .enumerate()
            .map(|(index, row)| {
                let name = find_column(&upper_headers, row, NAME_COLUMN_ALIASES)
                    .map(|cell| cell.as_text())
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| UNKNOWN_NAME.to_string());

                let empty_weight = find_column(&upper_headers, row, WEIGHT_COLUMN_ALIASES)
                    .and_then(|cell| cell.as_number())
                    .unwrap_or(0.0);

                Liquor::new(index, name, empty_weight)
            })
            .filter(|liquor| liquor.name != UNKNOWN_NAME)
            .collect();

        Self { liquors }
    }

    pub fn len(&self) -> usize {
        self.liquors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.liquors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Liquor> {
        self.liquors.iter()
    }

    pub fn liquors(&self) -> &[Liquor] {
        &self.liquors
    }

    /// IDで検索
    pub fn find(&self, id: &str) -> Option<&Liquor> {
        self.liquors.iter().find(|l| l.id == id)
    }

    /// 商品名の部分一致（大文字小文字を区別しない）。空なら全件
    pub fn search(&self, term: &str) -> Vec<&Liquor> {
        if term.is_empty() {
            return self.liquors.iter().collect();
        }

        let term = term.to_lowercase();
        self.liquors
            .iter()
            .filter(|l| l.name.to_lowercase().contains(&term))
            .collect()
    }

    /// IDまたは商品名で1件に絞る
    ///
    /// IDの完全一致 → 名前の完全一致（大文字小文字無視） → 部分一致が1件だけ、の順。
    pub fn resolve(&self, query: &str) -> Option<&Liquor> {
        if let Some(liquor) = self.find(query) {
            return Some(liquor);
        }

        let lower = query.to_lowercase();
        if let Some(liquor) = self.liquors.iter().find(|l| l.name.to_lowercase() == lower) {
            return Some(liquor);
        }

        match self.search(query).as_slice() {
            [single] => Some(*single),
            _ => None,
        }
    }
}

/// エイリアスの優先順に、値の入っている列を探す
fn find_column<'a>(
    upper_headers: &[String],
    row: &'a [CellValue],
    aliases: &[&str],
) -> Option<&'a CellValue> {
    aliases.iter().find_map(|alias| {
        upper_headers
            .iter()
            .zip(row.iter())
            .find(|(header, cell)| !header.is_empty() && !cell.is_empty() && header.contains(alias))
            .map(|(_, cell)| cell)
    })
}
