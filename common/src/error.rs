//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 入力検証エラー
///
/// いずれも画面にそのまま表示する文言を持ち、計算は行わない。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Por favor, selecciona un licor.")]
    NoProductSelected,

    #[error("Esta referencia no tiene peso vacío cargado en la base.")]
    MissingEmptyWeight,

    #[error("Revisa el peso lleno.")]
    InvalidFullWeight,

    #[error("El peso lleno es menor al peso vacío.")]
    FullBelowEmpty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_validation_messages_are_distinct() {
        let messages: Vec<String> = [
            ValidationError::NoProductSelected,
            ValidationError::MissingEmptyWeight,
            ValidationError::InvalidFullWeight,
            ValidationError::FullBelowEmpty,
        ]
        .iter()
        .map(|e| e.to_string())
        .collect();

        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_full_below_empty_message() {
        assert_eq!(
            ValidationError::FullBelowEmpty.to_string(),
            "El peso lleno es menor al peso vacío."
        );
    }
}
