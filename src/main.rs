use std::path::PathBuf;

use clap::Parser;
use form_lessons::{logging, Config, Lessons};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with questions replacing the built-in register quiz
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Append log output to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Open the quiz directly instead of the lesson catalog
    #[arg(long)]
    quiz: bool,

    /// How long the confetti stays at full opacity
    #[arg(long, default_value_t = 4000)]
    celebration_hold_ms: u64,

    /// How long the confetti takes to fade out
    #[arg(long, default_value_t = 2000)]
    celebration_fade_ms: u64,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            questions_path: self.questions,
            log_file: self.log_file,
            open_quiz: self.quiz,
            ..Config::default()
        }
        .with_celebration_millis(self.celebration_hold_ms, self.celebration_fade_ms)
    }
}

#[tokio::main]
async fn main() {
    let config = Args::parse().into_config();

    if let Some(path) = &config.log_file {
        if let Err(e) = logging::init(path) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let result = Lessons::new(&config).and_then(Lessons::run);
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
