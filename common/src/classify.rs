//! 商品分類
//!
//! 商品名のキーワードでビール/樽、グラスワイン、蒸留酒（既定）に分ける。
//! キーワードはデータとして持ち、ビール → ワインの順に照合する。

use crate::types::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ビール・樽のキーワード
pub const BEER_KEYWORDS: &[&str] = &["barril", "cerveza", "heineken"];

/// グラス売りワインのキーワード（銘柄・産地を含む）
pub const WINE_KEYWORDS: &[&str] = &["vino", "copa", "bilbao", "moras", "rosaleda", "tarapaca"];

/// 商品の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductClass {
    /// ビール・樽（ml で計算）
    BeerKeg,
    /// グラスワイン（杯数で計算）
    WineGlass,
    /// 蒸留酒など（オンスで計算）
    Spirit,
}

impl ProductClass {
    /// 結果の単位
    pub fn unit(&self) -> Unit {
        match self {
            ProductClass::BeerKeg => Unit::Ml,
            ProductClass::WineGlass => Unit::Copas,
            ProductClass::Spirit => Unit::Oz,
        }
    }

    /// 計算ボタンの表示名
    pub fn action_label(&self) -> &'static str {
        match self {
            ProductClass::BeerKeg => "Mililitros",
            ProductClass::WineGlass => "Copas",
            ProductClass::Spirit => "Onzas",
        }
    }
}

impl fmt::Display for ProductClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductClass::BeerKeg => write!(f, "Cerveza/Barril"),
            ProductClass::WineGlass => write!(f, "Vino por copa"),
            ProductClass::Spirit => write!(f, "Licor"),
        }
    }
}

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| name.contains(k))
}

/// ビール・樽か判定
pub fn is_beer_or_keg(name: &str) -> bool {
    contains_any(&name.to_lowercase(), BEER_KEYWORDS)
}

/// グラスワインか判定
pub fn is_wine_glass(name: &str) -> bool {
    contains_any(&name.to_lowercase(), WINE_KEYWORDS)
}

/// 商品名を分類する
pub fn classify(name: &str) -> ProductClass {
    if is_beer_or_keg(name) {
        ProductClass::BeerKeg
    } else if is_wine_glass(name) {
        ProductClass::WineGlass
    } else {
        ProductClass::Spirit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beer_keywords() {
        assert_eq!(classify("Heineken Barril 20L"), ProductClass::BeerKeg);
        assert_eq!(classify("CERVEZA Club Colombia"), ProductClass::BeerKeg);
        assert_eq!(classify("barril artesanal"), ProductClass::BeerKeg);
    }

    #[test]
    fn test_wine_keywords() {
        assert_eq!(classify("Vino Tarapacá Copa"), ProductClass::WineGlass);
        assert_eq!(classify("Gato Negro Copa"), ProductClass::WineGlass);
        assert_eq!(classify("Tarapaca Reserva"), ProductClass::WineGlass);
        assert_eq!(classify("Rosaleda Rosado"), ProductClass::WineGlass);
    }

    #[test]
    fn test_spirit_default() {
        assert_eq!(classify("Ron Añejo 750ml"), ProductClass::Spirit);
        assert_eq!(classify("Whisky Old Parr"), ProductClass::Spirit);
        assert_eq!(classify(""), ProductClass::Spirit);
    }

    #[test]
    fn test_beer_wins_over_wine() {
        // 両方のキーワードを含む場合はビールが優先
        assert_eq!(classify("Copa Cerveza Heineken"), ProductClass::BeerKeg);
    }

    #[test]
    fn test_accent_is_literal() {
        // アクセント付きは別の綴りとして扱う
        assert_eq!(classify("Tarapacá Reserva"), ProductClass::Spirit);
    }

    #[test]
    fn test_predicates_match_classify() {
        for name in ["Heineken Barril 20L", "Vino Tinto", "Ron Viejo", "Copa Bilbao"] {
            let class = classify(name);
            assert_eq!(is_beer_or_keg(name), class == ProductClass::BeerKeg);
            if !is_beer_or_keg(name) {
                assert_eq!(is_wine_glass(name), class == ProductClass::WineGlass);
            }
        }
    }

    #[test]
    fn test_unit_per_class() {
        assert_eq!(ProductClass::BeerKeg.unit(), Unit::Ml);
        assert_eq!(ProductClass::WineGlass.unit(), Unit::Copas);
        assert_eq!(ProductClass::Spirit.unit(), Unit::Oz);
    }
}
