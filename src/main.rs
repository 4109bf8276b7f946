use clap::Parser;
use poem_scan::core::samples::DEMO_POEM;
use poem_scan::utils::error::ErrorSeverity;
use poem_scan::utils::{logger, validation::Validate};
use poem_scan::{
    present, present_error, Analyzer, CliConfig, HttpScansionService, OutputFormat,
    SampleLibrary, ScanError, Session, Settings,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tokio::io::AsyncReadExt;

fn exit_with(e: &ScanError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("{}", present_error(e));

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

async fn load_input(session: &Session<HttpScansionService>, cli: &CliConfig) -> poem_scan::Result<()> {
    if let Some(path) = &cli.file {
        tracing::info!("📄 Reading poem from {}", path.display());
        return session.load_file(path).await;
    }
    if let Some(text) = &cli.text {
        session.set_text(text.clone());
        return Ok(());
    }
    if cli.demo {
        session.set_text(DEMO_POEM);
        return Ok(());
    }

    if std::io::stdin().is_terminal() {
        // Nothing piped in; submit will report the empty input.
        return Ok(());
    }
    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    session.set_text(text);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting poem-scan");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = Settings::load(&cli).unwrap_or_else(|e| exit_with(&e));

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let samples = match &settings.samples_path {
        Some(path) => Arc::new(SampleLibrary::from_file(path).unwrap_or_else(|e| exit_with(&e))),
        None => SampleLibrary::builtin(),
    };
    let service = HttpScansionService::from_config(&settings).unwrap_or_else(|e| exit_with(&e));
    let session = Session::new(Analyzer::with_samples(service, samples));
    session.set_improve_vowel_syllables(settings.improve_vowel_syllables);

    if let Err(e) = load_input(&session, &cli).await {
        exit_with(&e);
    }

    let result = match session.submit(settings.mode).await {
        Ok(result) => result,
        Err(e) => exit_with(&e),
    };
    tracing::info!("✅ Scanned {} lines", result.parses.len());

    let renderings = present(&result, &cli.views, cli.format).unwrap_or_else(|e| exit_with(&e));
    let show_labels = cli.format == OutputFormat::Text && renderings.len() > 1;
    for (i, rendering) in renderings.iter().enumerate() {
        if show_labels {
            if i > 0 {
                println!();
            }
            println!("== {} ==", rendering.view.label());
        }
        print!("{}", rendering.body);
        if !rendering.body.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
