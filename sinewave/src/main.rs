use clap::Parser;
use sinewave_gui::{run_gui, GuiConfig};

#[derive(Parser)]
#[command(name = "sinewave", version, about = "Interactive sin(x) viewer")]
struct Cli {
    /// Window width in logical pixels
    #[arg(long)]
    width: Option<f32>,
    /// Window height in logical pixels
    #[arg(long)]
    height: Option<f32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = GuiConfig::default();
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    run_gui(config)?;
    Ok(())
}
