use ai_chat::assets;
use ai_chat::core::config::{self, CliOverrides};
use ai_chat::core::state::{App, SidebarState, ThemeMode};
use ai_chat::tui::build_app;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "ai-chat", about = "Chat window with a collapsible sidebar")]
struct Args {
    /// Start in this theme (overrides config and AICHAT_THEME)
    #[arg(short, long, value_enum)]
    theme: Option<ThemeMode>,

    /// Start with the sidebar expanded or collapsed
    #[arg(short, long, value_enum)]
    sidebar: Option<SidebarState>,

    /// Start with the RAG indicator enabled
    #[arg(long)]
    rag: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to ai-chat.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("ai-chat.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        config::AppConfig::default()
    });
    let cli = CliOverrides {
        theme: args.theme,
        sidebar: args.sidebar,
        rag: args.rag,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "AI Chat starting up: theme={:?} sidebar={:?} rag={}",
        resolved.theme,
        resolved.sidebar,
        resolved.rag_enabled
    );

    let config_path = config::config_path();
    build_app(App::from_config(&resolved))
        .with_icon(resolved.window_icon.as_deref().map(assets::locate_icon))
        .with_config_path(config_path.as_deref())
        .run()
}
