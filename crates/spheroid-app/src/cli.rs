use std::path::PathBuf;

use clap::Parser;

/// Spheroid: a procedurally deformed sphere, software-rendered in the terminal.
#[derive(Parser, Debug)]
#[command(name = "spheroid", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `spheroid=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Preset applied at startup.
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Render off-screen and log frame stats instead of opening the terminal UI.
    #[arg(long)]
    pub headless: bool,

    /// Frames to render in headless mode.
    #[arg(long, default_value_t = 60)]
    pub frames: u32,

    /// Write a config file with every default and exit.
    #[arg(long)]
    pub write_default_config: bool,

    /// Print the deformation modes as JSON and exit.
    #[arg(long)]
    pub print_modes: bool,

    /// Print a preset as JSON and exit.
    #[arg(long, value_name = "NAME")]
    pub print_preset: Option<String>,
}

impl Args {
    /// True when the terminal UI will own the screen.
    pub fn interactive(&self) -> bool {
        !(self.headless || self.write_default_config || self.print_modes || self.print_preset.is_some())
    }
}

pub fn parse() -> Args {
    Args::parse()
}
