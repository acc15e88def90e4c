use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "liquor-hub")]
#[command(about = "Calculadora de inventario de bar: peso de botella a volumen restante", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 満重量から残量を計算
    Calc {
        /// 商品ID（liquor-N）または商品名
        #[arg(short, long, required = true)]
        product: String,

        /// 満重量（グラム）
        #[arg(short = 'w', long, required = true)]
        full_weight: String,

        /// カタログExcel（省略時は既定カタログ）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// カタログの商品一覧
    List {
        /// 商品名で絞り込み
        #[arg(short, long)]
        search: Option<String>,

        /// カタログExcel（省略時は既定カタログ）
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// 商品名の分類と容量を表示
    Classify {
        /// 商品名
        #[arg(required = true)]
        name: String,
    },

    /// 対話式の計算フォーム
    Form {
        /// カタログExcel（省略時は既定カタログ）
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// AIで写真を編集
    EditImage {
        /// 元画像
        #[arg(required_unless_present = "suggestions")]
        image: Option<PathBuf>,

        /// 編集の指示
        #[arg(short, long, required_unless_present = "suggestions")]
        prompt: Option<String>,

        /// 出力ファイル（省略時は元画像名-editado-日時）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 指示の候補を表示
        #[arg(long)]
        suggestions: bool,
    },

    /// 空のカタログExcelを作成
    Template {
        /// 出力ファイル
        #[arg(short, long, default_value = "LICORES.xlsx")]
        output: PathBuf,

        /// 既存ファイルを上書き
        #[arg(long)]
        force: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 既定カタログのURLを設定（空文字で解除）
        #[arg(long)]
        set_catalog_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
