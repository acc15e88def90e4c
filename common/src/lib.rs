//! LiquorHub Common Library
//!
//! CLIと将来のWeb(WASM)版で共有される型と計算ロジック。
//! ファイルやネットワークには触れない。

pub mod types;
pub mod error;
pub mod parser;
pub mod capacity;
pub mod classify;
pub mod calculator;
pub mod catalog;
pub mod export;

pub use types::{CalculationResult, Liquor, Unit};
pub use error::{Error, Result, ValidationError};
pub use capacity::extract_capacity_ml;
pub use classify::{classify, ProductClass};
pub use calculator::{calculate, compute, BEER_DENSITY, ML_PER_GLASS, OZ_TO_GRAMS, WINE_DENSITY};
pub use catalog::{Catalog, CellValue, DEFAULT_CATALOG_FILENAME};
