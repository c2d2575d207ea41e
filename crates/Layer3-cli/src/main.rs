//! plugin-status CLI - Main entry point

mod output;

use clap::{Parser, Subcommand};
use output::OutputFormat;
use plugin_status_core::{AdminNotice, PluginStatusService, StatusRequest, API_ACTION};
use plugin_status_foundation::{Error, JsonStore, Result, StatusConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// plugin-status - list installed plugins, their activation state and health
#[derive(Parser, Debug)]
#[command(name = "plugin-status")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Filter by activation state (all, active, inactive)
    #[arg(short, long)]
    filter: Option<String>,

    /// Health checks run only when this is exactly "true"
    #[arg(long)]
    health: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Plugins root directory (overrides config)
    #[arg(long)]
    plugins_dir: Option<PathBuf>,

    /// JSON registry file to read instead of scanning the plugins directory
    #[arg(long)]
    registry: Option<PathBuf>,

    /// JSON array of active plugin ids (directory mode)
    #[arg(long)]
    active_file: Option<PathBuf>,

    /// Header-bearing file name inside each plugin directory
    #[arg(long)]
    main_file: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the admin notice describing the API for a page
    Notice {
        /// Admin page name
        #[arg(long)]
        page: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging (stdout은 응답 전용)
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Some(Command::Notice { page }) = &args.command {
        match AdminNotice::for_page(page.as_deref()) {
            Some(html) => println!("{}", html),
            None => eprintln!("No notice for this page."),
        }
        return Ok(());
    }

    let loaded = StatusConfig::default_stores().and_then(|stores| load_config(&stores, &args));
    let config = match loaded {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    let request = StatusRequest {
        filter: args.filter.clone(),
        health: args.health.clone(),
    };

    tracing::debug!("Handling action={} with {:?}", API_ACTION, request);

    // 파일시스템 검사는 블로킹 호출
    let result = tokio::task::spawn_blocking(move || {
        let service = PluginStatusService::from_config(&config);
        service.handle(&request)
    })
    .await?;

    match result {
        Ok(response) => {
            output::print(&response, args.format)?;
            Ok(())
        }
        Err(e) => fail(&e),
    }
}

/// 요청 실패 보고 후 종료 (stdout에는 아무것도 쓰지 않음)
fn fail(e: &Error) -> ! {
    tracing::error!("{}", e);
    eprintln!("Request failed: {}", e);
    std::process::exit(1);
}

/// 설정 로드 (글로벌 → 프로젝트) + CLI 오버라이드
///
/// 존재하지만 파싱할 수 없는 설정 파일은 요청 실패입니다.
fn load_config(stores: &[JsonStore], args: &Args) -> Result<StatusConfig> {
    StatusConfig::load_from(stores).map(|config| with_overrides(config, args))
}

fn with_overrides(mut config: StatusConfig, args: &Args) -> StatusConfig {
    config.merge(StatusConfig {
        plugins_dir: args.plugins_dir.clone(),
        registry_file: args.registry.clone(),
        active_plugins_file: args.active_file.clone(),
        main_file: args.main_file.clone(),
    });
    config
}
