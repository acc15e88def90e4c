//! 計算結果とカタログの型定義
//!
//! CLIと将来のWeb版で共有される型:
//! - Liquor: カタログの1行（名前と空ボトル重量）
//! - Unit: 結果の単位
//! - CalculationResult: 計算1回分の結果

use serde::{Deserialize, Serialize};
use std::fmt;

/// カタログ上の商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liquor {
    /// `liquor-<行番号>`
    pub id: String,
    pub name: String,
    /// 空ボトルの重量（グラム）。未登録なら0
    #[serde(default)]
    pub empty_weight: f64,
}

impl Liquor {
    pub fn new(index: usize, name: impl Into<String>, empty_weight: f64) -> Self {
        Self {
            id: liquor_id(index),
            name: name.into(),
            empty_weight,
        }
    }
}

/// 行番号からIDを生成
pub fn liquor_id(index: usize) -> String {
    format!("liquor-{}", index)
}

/// 結果の単位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// オンス（蒸留酒）
    Oz,
    /// ミリリットル（ビール・樽）
    Ml,
    /// グラス数（ワイン）
    Copas,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Oz => "oz",
            Unit::Ml => "ml",
            Unit::Copas => "copas",
        }
    }

    /// 結果カードの見出し
    pub fn title(&self) -> &'static str {
        match self {
            Unit::Oz => "Onzas Netas",
            Unit::Ml => "Mililitros Netos",
            Unit::Copas => "Copas",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 計算結果
///
/// 計算のたびに新しく作られ、前回の結果を丸ごと置き換える。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// 単位ごとに丸めた表示値
    pub value: f64,
    pub unit: Unit,
    /// 液体の正味重量（グラム）= 満重量 - 空重量
    pub liquid_weight: f64,
    /// 容量に対する残量（%、最大100）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    /// 商品名から読み取った容量（ml）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_capacity: Option<u32>,
}
