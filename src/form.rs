//! 計算フォーム
//!
//! カタログ検索・商品選択・満重量入力・計算結果/エラーを1セッション分保持する。
//! 画面（CLI/対話モード）はこの状態を読んで表示するだけ。

use crate::catalog;
use crate::config::Config;
use crate::error::Result;
use liquor_hub_common::{
    calculate, classify, CalculationResult, Catalog, Liquor, Unit, BEER_DENSITY, ML_PER_GLASS,
    OZ_TO_GRAMS,
};
use tracing::warn;

/// 手動アップロード失敗時のメッセージ
pub const UPLOAD_ERROR_MESSAGE: &str = "Error al procesar el archivo Excel.";

/// カタログの読み込み状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// 自動読み込み中
    Loading,
    /// カタログあり
    Ready,
    /// 自動読み込み失敗（手動アップロード待ち）
    NeedsUpload,
}

#[derive(Debug)]
pub struct CalculatorForm {
    catalog: Catalog,
    search_term: String,
    selected_id: Option<String>,
    full_weight: String,
    result: Option<CalculationResult>,
    error: Option<String>,
    status: LoadStatus,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            search_term: String::new(),
            selected_id: None,
            full_weight: String::new(),
            result: None,
            error: None,
            status: LoadStatus::Loading,
        }
    }
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// カタログ読み込み済みのフォーム
    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut form = Self::default();
        form.replace_catalog(catalog);
        form
    }

    /// 既定カタログを読み込む（失敗しても致命的ではない）
    pub async fn auto_load(&mut self, config: &Config) {
        self.status = LoadStatus::Loading;

        match catalog::load_default(config).await {
            Ok(catalog) => self.replace_catalog(catalog),
            Err(e) => {
                warn!(error = %e, "Auto-load failed, waiting for manual upload");
                self.replace_catalog(Catalog::default());
            }
        }
    }

    /// 手動アップロードされたExcelを読み込む
    ///
    /// 失敗時は既存のカタログを残し、エラーメッセージを設定する。
    pub fn upload(&mut self, bytes: &[u8]) -> Result<()> {
        match catalog::parse(bytes) {
            Ok(catalog) => {
                self.replace_catalog(catalog);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "manual upload failed");
                self.error = Some(UPLOAD_ERROR_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// カタログを丸ごと置き換える
    ///
    /// IDは行番号なので、同じIDでも名前・空重量が変わっていれば別の商品とみなし、
    /// 選択・結果・エラーを消す。
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        let previous = self.selected().cloned();

        self.catalog = catalog;
        self.status = if self.catalog.is_empty() {
            LoadStatus::NeedsUpload
        } else {
            LoadStatus::Ready
        };

        let still_valid = match (&previous, self.selected()) {
            (Some(before), Some(after)) => before == after,
            _ => false,
        };

        if !still_valid {
            self.selected_id = None;
            self.result = None;
            self.error = None;
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// 検索語で絞り込んだ商品一覧
    pub fn filtered(&self) -> Vec<&Liquor> {
        self.catalog.search(&self.search_term)
    }

    /// 商品を選択（エラーと結果は消える）
    pub fn select(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.selected_id = if id.is_empty() { None } else { Some(id) };
        self.error = None;
        self.result = None;
    }

    pub fn set_full_weight(&mut self, input: impl Into<String>) {
        self.full_weight = input.into();
    }

    /// 計算を実行し、結果またはエラーを保持する
    pub fn calculate(&mut self) -> std::result::Result<&CalculationResult, &str> {
        self.error = None;

        match calculate(self.selected(), &self.full_weight) {
            Ok(result) => Ok(&*self.result.insert(result)),
            Err(e) => Err(self.error.insert(e.to_string()).as_str()),
        }
    }

    /// 計算ボタンの表示名
    pub fn action_label(&self) -> String {
        match self.selected() {
            Some(liquor) => format!("Calcular {}", classify(&liquor.name).action_label()),
            None => "Calcular Resultado".to_string(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected(&self) -> Option<&Liquor> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.catalog.find(id))
    }

    pub fn full_weight(&self) -> &str {
        &self.full_weight
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }
}

/// 計量前の注意と換算定数
pub fn info_banner() -> String {
    format!(
        "Asegúrese de que la báscula esté correctamente nivelada y en ceros (TARA) antes de colocar la botella.\n\
         Constantes: 1 oz ≈ {} g. 1 ml ≈ {} g (Cerveza/Barril). 1 copa ≈ {} ml (Vino).",
        OZ_TO_GRAMS, BEER_DENSITY, ML_PER_GLASS
    )
}

/// 結果をターミナル表示用の文字列にする
pub fn render_result(result: &CalculationResult) -> String {
    let mut details = format!("Líquido: {:.0} g", result.liquid_weight);

    if let (Some(percentage), Some(capacity)) = (result.percentage, result.total_capacity) {
        details.push_str(&format!(" · {}% de {}ml", percentage, capacity));
    }

    if result.unit == Unit::Copas {
        details.push_str(&format!(" · {}ml/copa", ML_PER_GLASS));
    }

    format!(
        "{}\n{} {}\n{}",
        result.unit.title(),
        result.value,
        result.unit,
        details
    )
}
