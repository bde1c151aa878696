use anyhow::Result;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use snake_tui::app::App;
use snake_tui::game::GameConfig;
use std::fs::File;

#[derive(Parser)]
#[command(name = "snake-tui")]
#[command(version, about = "Grid snake for the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(4..=100))]
    width: u16,

    /// Grid height in cells
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(4..=100))]
    height: u16,

    /// Starting speed, in ticks per second
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..=60))]
    speed: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so logs go to a file
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("snake-tui.log") {
        let _ = WriteLogger::init(LevelFilter::Info, log_config, log_file);
    }

    log::info!(
        "starting {}x{} board at {} ticks/sec",
        cli.width,
        cli.height,
        cli.speed
    );

    let config = GameConfig {
        grid_width: cli.width as usize,
        grid_height: cli.height as usize,
        initial_speed: cli.speed,
        ..GameConfig::default()
    };

    let mut app = App::new(config);
    app.run().await
}
