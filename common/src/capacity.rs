//! 商品名からの容量抽出
//!
//! "Heineken Barril 20L", "Vino 750 ML", "Ron 75CL", "Aguardiente X1000" の
//! ような表記から容量（ml）を読み取る。パターンは優先順に並んだ表で、
//! 最初に一致したものだけを使う。

use regex::Regex;

/// 容量パターン（正規表現と ml への倍率）
pub struct CapacityPattern {
    pub regex: Regex,
    pub multiplier: f64,
}

lazy_static::lazy_static! {
    /// 優先順の容量パターン表
    pub static ref CAPACITY_PATTERNS: Vec<CapacityPattern> = vec![
        CapacityPattern {
            regex: Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*(?:ML|CC)(?-u:\b)").unwrap(),
            multiplier: 1.0,
        },
        CapacityPattern {
            regex: Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*CL(?-u:\b)").unwrap(),
            multiplier: 10.0,
        },
        CapacityPattern {
            regex: Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*(?:LTS|LITROS|LITRO|LT|L)(?-u:\b)").unwrap(),
            multiplier: 1000.0,
        },
        CapacityPattern {
            regex: Regex::new(r"X\s*([0-9]+(?:\.[0-9]+)?)").unwrap(),
            multiplier: 1.0,
        },
    ];
}

impl CapacityPattern {
    /// 正規化済みの名前に適用し、ml を返す
    pub fn apply(&self, normalized: &str) -> Option<f64> {
        self.regex
            .captures(normalized)
            .and_then(|cap| cap[1].parse::<f64>().ok())
            .map(|value| value * self.multiplier)
    }
}

/// 商品名を照合用に正規化（大文字化、最初のカンマを小数点に）
pub fn normalize_name(name: &str) -> String {
    name.to_uppercase().replacen(',', ".", 1)
}

/// 商品名から容量（ml）を抽出
///
/// どのパターンにも一致しない、または0mlの場合は `None`。
pub fn extract_capacity_ml(name: &str) -> Option<u32> {
    let normalized = normalize_name(name);

    CAPACITY_PATTERNS
        .iter()
        .find_map(|pattern| pattern.apply(&normalized))
        .map(|ml| ml.round())
        .filter(|ml| *ml >= 1.0 && *ml <= u32::MAX as f64)
        .map(|ml| ml as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milliliters() {
        assert_eq!(extract_capacity_ml("Ron Añejo 750ml"), Some(750));
        assert_eq!(extract_capacity_ml("Vino 750 ML"), Some(750));
        assert_eq!(extract_capacity_ml("Aguardiente 375CC"), Some(375));
    }

    #[test]
    fn test_centiliters() {
        assert_eq!(extract_capacity_ml("Whisky 70CL"), Some(700));
        assert_eq!(extract_capacity_ml("Whisky 75 cl"), Some(750));
    }

    #[test]
    fn test_liters() {
        assert_eq!(extract_capacity_ml("Heineken Barril 20L"), Some(20000));
        assert_eq!(extract_capacity_ml("Barril 8 LTS"), Some(8000));
        assert_eq!(extract_capacity_ml("Ron 1.75 Litros"), Some(1750));
        assert_eq!(extract_capacity_ml("Vodka 1 litro"), Some(1000));
        assert_eq!(extract_capacity_ml("Tequila 1 LT"), Some(1000));
    }

    #[test]
    fn test_comma_decimal_separator() {
        assert_eq!(extract_capacity_ml("Ron 1,5 L"), Some(1500));
    }

    #[test]
    fn test_trailing_x_token() {
        assert_eq!(extract_capacity_ml("Aguardiente X1000"), Some(1000));
        assert_eq!(extract_capacity_ml("Aguardiente x 750"), Some(750));
    }

    #[test]
    fn test_ml_has_priority_over_liters() {
        assert_eq!(extract_capacity_ml("750 ML 1 L"), Some(750));
        assert_eq!(extract_capacity_ml("1 L 750 ML"), Some(750));
    }

    #[test]
    fn test_unit_needs_word_boundary() {
        // "LATA" の L は単位ではない
        assert_eq!(extract_capacity_ml("Cerveza 3 LATAS"), None);
        assert_eq!(extract_capacity_ml("Ron 12 MLX"), None);
    }

    #[test]
    fn test_word_boundary_is_ascii_only() {
        // 非ASCII文字は単語の一部とみなさない
        assert_eq!(extract_capacity_ml("Barril 20LÍQUIDO"), Some(20000));
        assert_eq!(extract_capacity_ml("Vino 750MLÑ"), Some(750));
    }

    #[test]
    fn test_no_capacity() {
        assert_eq!(extract_capacity_ml("Vino Tarapacá Copa"), None);
        assert_eq!(extract_capacity_ml(""), None);
        assert_eq!(extract_capacity_ml("Ron 0 ML"), None);
    }

    #[test]
    fn test_fractional_ml_rounded() {
        assert_eq!(extract_capacity_ml("Licor 187.5 ML"), Some(188));
    }
}
