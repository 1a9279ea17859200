use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use hover_popup::config::Settings;
use hover_popup::gui_app;

#[derive(Parser, Debug)]
#[command(
    name = "popup_gui",
    about = "Show a button that reveals a popup panel while hovered",
    version
)]
struct Cli {
    /// JSON settings file (title, window size, theme)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    hover_popup::logging::init("info");
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    gui_app::run_iced_app(settings)?;
    Ok(())
}
