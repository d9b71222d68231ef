use clap::Parser;
use client_match::{cli, compare, config, export, matcher, reference, telemetry, web};
use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Serve { host, port, debug } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            config.debug |= debug || cli.verbose;
            config.validate()?;

            telemetry::setup_logging(config.effective_log_level());
            web::serve(config).await?;
        }

        Commands::Compare { reference: reference_path, pasted, output, exclude_empty } => {
            telemetry::setup_logging(if cli.verbose { "debug" } else { "warn" });
            println!("🔎 client-match - 照合\n");

            println!("[1/3] 参照ファイルを読み込み中...");
            let sheets = reference::read_reference_file(&reference_path)?;
            let rows: usize = sheets.iter().map(|s| s.rows.len()).sum();
            println!("✔ {}シート / {}行\n", sheets.len(), rows);

            println!("[2/3] 照合中...");
            let text = std::fs::read_to_string(&pasted)?;
            let options = matcher::MatchOptions {
                exclude_empty_reference: exclude_empty || config.exclude_empty_reference,
            };
            let result = compare::compare(&sheets, &text, &options, (&config).into())?;
            println!(
                "✔ 一致: {}件 / 不一致: {}件\n",
                result.matched_count(),
                result.unmatched_count()
            );

            if cli.verbose {
                for entry in &result.matched {
                    println!("  ○ {} {}", entry.code, entry.mobile);
                }
                for entry in &result.unmatched {
                    println!("  × {} {}", entry.code, entry.mobile);
                }
            }

            if let Some(output) = output {
                println!("[3/3] 結果を保存中...");
                let output_path = export::output_path_for_xlsx(&output, &config.default_file_name);
                export::excel::generate_excel(&result, &output_path)?;
                println!("✔ Excel出力: {}", output_path.display());
            }

            println!("\n✅ 照合完了");
        }

        Commands::Config { show } => {
            if show {
                println!("設定: {}", Config::config_path()?.display());
                println!("  待ち受け: {}", config.bind_address());
                println!("  デバッグ: {}", config.debug);
                println!("  ログレベル: {}", config.log_level);
                println!("  アップロード上限: {} bytes", config.max_upload_bytes);
                println!("  貼り付け行数上限: {}", config.max_pasted_lines);
                println!("  空の参照値を除外: {}", config.exclude_empty_reference);
                println!("  既定ファイル名: {}", config.default_file_name);
            }
        }
    }

    Ok(())
}
