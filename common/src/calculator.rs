//! 重量から残量への換算
//!
//! 満重量 - 空重量 = 液体重量。分類ごとに以下へ換算する:
//! - ビール/樽: 密度で ml に換算し、容量が分かれば残量%も出す
//! - グラスワイン: 密度で ml に換算し、1杯の量で割って杯数にする
//! - 蒸留酒: 1オンスあたりのグラム数で割ってオンスにする
//!
//! 丸めるのは表示値だけで、途中計算は丸めない。

use crate::capacity::extract_capacity_ml;
use crate::classify::{classify, ProductClass};
use crate::error::ValidationError;
use crate::parser::parse_leading_number;
use crate::types::{CalculationResult, Liquor};

/// 1オンスあたりのグラム数
pub const OZ_TO_GRAMS: f64 = 31.25;
/// ビールの密度（g/ml）
pub const BEER_DENSITY: f64 = 1.01;
/// ワインの密度（g/ml）
pub const WINE_DENSITY: f64 = 0.99;
/// ワイン1杯の量（ml）
pub const ML_PER_GLASS: f64 = 150.0;

/// 入力を検証して計算する
///
/// 検証順:
/// 1. 商品が選択されている
/// 2. 空重量が正の値で登録されている
/// 3. 満重量が正の数値として読める
/// 4. 満重量 >= 空重量
pub fn calculate(
    liquor: Option<&Liquor>,
    full_weight_input: &str,
) -> Result<CalculationResult, ValidationError> {
    let liquor = liquor.ok_or(ValidationError::NoProductSelected)?;

    if !(liquor.empty_weight > 0.0) {
        return Err(ValidationError::MissingEmptyWeight);
    }

    let full_weight = parse_leading_number(full_weight_input)
        .filter(|w| *w > 0.0)
        .ok_or(ValidationError::InvalidFullWeight)?;

    if full_weight < liquor.empty_weight {
        return Err(ValidationError::FullBelowEmpty);
    }

    Ok(compute(&liquor.name, liquor.empty_weight, full_weight))
}

/// 検証済みの値で換算する
///
/// 呼び出し側で `full_weight >= empty_weight` を保証すること。
pub fn compute(name: &str, empty_weight: f64, full_weight: f64) -> CalculationResult {
    let liquid_weight = full_weight - empty_weight;
    let capacity = extract_capacity_ml(name);
    let class = classify(name);

    match class {
        ProductClass::BeerKeg => {
            let ml = liquid_weight / BEER_DENSITY;
            CalculationResult {
                value: ml.round(),
                unit: class.unit(),
                liquid_weight,
                percentage: capacity.map(|c| fill_percentage(ml, c)),
                total_capacity: capacity,
            }
        }
        ProductClass::WineGlass => {
            let ml = liquid_weight / WINE_DENSITY;
            let glasses = ml / ML_PER_GLASS;
            CalculationResult {
                value: round_to(glasses, 1),
                unit: class.unit(),
                liquid_weight,
                percentage: capacity.map(|c| fill_percentage(ml, c)),
                total_capacity: capacity,
            }
        }
        ProductClass::Spirit => CalculationResult {
            value: round_to(liquid_weight / OZ_TO_GRAMS, 2),
            unit: class.unit(),
            liquid_weight,
            percentage: None,
            total_capacity: None,
        },
    }
}

/// 容量に対する残量%（100で頭打ち、小数1桁）
pub fn fill_percentage(volume_ml: f64, capacity_ml: u32) -> f64 {
    round_to((volume_ml / capacity_ml as f64 * 100.0).min(100.0), 1)
}

/// 小数 `decimals` 桁に丸める
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
