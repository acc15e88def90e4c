//! カタログの書き出し（Excel）

#[cfg(feature = "excel")]
pub mod excel_core;
