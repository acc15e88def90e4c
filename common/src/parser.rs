//! 数値テキストのパース
//!
//! フォームやExcelセルの数値は "900", "900g", " 1,5 kg" のように
//! 単位や空白が混ざることがある。先頭の数値部分だけを読み取る。

use regex::Regex;

/// 先頭の数値部分を読み取る（小数点はカンマも可）
///
/// 数値で始まらない場合は `None`。
pub fn parse_leading_number(text: &str) -> Option<f64> {
    lazy_static::lazy_static! {
        static ref LEADING_NUMBER_RE: Regex =
            Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap();
    }

    let normalized = text.trim_start().replacen(',', ".", 1);
    let matched = LEADING_NUMBER_RE.find(&normalized)?;
    matched.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}
