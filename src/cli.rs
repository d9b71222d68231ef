use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "client-match")]
#[command(about = "顧客コード・携帯番号照合ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Web画面を起動
    Serve {
        /// 待ち受けホスト
        #[arg(long)]
        host: Option<String>,

        /// 待ち受けポート
        #[arg(short, long)]
        port: Option<u16>,

        /// デバッグモード（DEBUGログ）
        #[arg(long)]
        debug: bool,
    },

    /// 参照ファイルと貼り付けテキストをファイルから照合
    Compare {
        /// 参照ファイル（xlsx/xls/xlsb/ods）
        #[arg(required = true)]
        reference: PathBuf,

        /// 貼り付けデータのテキストファイル（1行に「コード 携帯番号」）
        #[arg(required = true)]
        pasted: PathBuf,

        /// 結果Excelの出力先（ファイルまたはディレクトリ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 空の参照値を照合から除外
        #[arg(long)]
        exclude_empty: bool,
    },

    /// 設定を表示
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
