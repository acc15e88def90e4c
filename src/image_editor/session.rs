use super::{EditedImage, ImageEditor, SourceImage};
use crate::error::Result;
use tracing::error;

/// 画像編集の状態（元画像・結果・エラー・処理中フラグ）
///
/// 失敗しても前の結果は残し、同じ画像で再試行できるようにする。
#[derive(Debug, Default)]
pub struct EditSession {
    source: Option<SourceImage>,
    result: Option<EditedImage>,
    error: Option<String>,
    processing: bool,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 元画像を設定（結果とエラーは消える）
    pub fn load_source(&mut self, image: SourceImage) {
        self.source = Some(image);
        self.result = None;
        self.error = None;
    }

    /// 元画像ごと破棄
    pub fn reset(&mut self) {
        self.source = None;
        self.result = None;
        self.error = None;
    }

    pub fn can_submit(&self, prompt: &str) -> bool {
        self.source.is_some() && !prompt.trim().is_empty() && !self.processing
    }

    /// 編集を実行する
    ///
    /// 画像か指示文が無ければ何もしない（`Ok(None)`）。成功時は結果を置き換え、
    /// 失敗時はエラーメッセージを設定して前の結果を残し、エラーを返す。
    pub async fn apply(&mut self, editor: &ImageEditor, prompt: &str) -> Result<Option<&EditedImage>> {
        if !self.can_submit(prompt) {
            return Ok(None);
        }
        let Some(source) = self.source.as_ref() else {
            return Ok(None);
        };

        self.processing = true;
        self.error = None;
        let outcome = editor.edit(source, prompt).await;
        self.processing = false;

        match outcome {
            Ok(image) => Ok(Some(&*self.result.insert(image))),
            Err(e) => {
                error!(error = %e, "image edit failed");
                let message = e.to_string();
                self.error = Some(if message.is_empty() {
                    "Error al procesar la imagen con AI.".to_string()
                } else {
                    message
                });
                Err(e)
            }
        }
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    pub fn result(&self) -> Option<&EditedImage> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// 表示中の画像（結果があれば結果、なければ元画像）のData URL
    pub fn preview_data_url(&self) -> Option<String> {
        match (&self.result, &self.source) {
            (Some(result), _) => Some(result.to_data_url()),
            (None, Some(source)) => Some(source.to_data_url()),
            (None, None) => None,
        }
    }
}
