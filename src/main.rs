use clap::{Parser, ValueEnum};
use env_logger::Env;

use chime::SongMachine;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Style {
    Relaxing,
    Upbeat,
    Ambient,
}

impl Style {
    fn as_str(self) -> &'static str {
        match self {
            Style::Relaxing => "relaxing",
            Style::Upbeat => "upbeat",
            Style::Ambient => "ambient",
        }
    }
}

/// Generate a unique musical piece 🎵
#[derive(Parser, Debug)]
#[command(name = "chime")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Style of the song
    #[arg(long, value_enum, default_value = "relaxing")]
    style: Style,

    /// Duration in seconds
    #[arg(long, default_value_t = 180.0)]
    duration: f32,

    /// Output file name (optional)
    #[arg(long)]
    output: Option<String>,

    /// Seed the generator for a reproducible song (optional)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let machine = SongMachine::new();
    if let Err(e) = machine.generate(
        cli.style.as_str(),
        cli.duration,
        cli.output.as_deref(),
        &mut rng,
    ) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
