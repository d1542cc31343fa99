use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, info};

mod display;
mod loaders;

#[derive(Parser)]
#[command(version, about)]
struct Options {
    #[arg(short, long)]
    /// Grading configuration file (TOML)
    config: Option<PathBuf>,
    #[arg(short, long)]
    /// Exam results (CSV with a `StudentID,Score` header)
    results: Option<PathBuf>,
    #[arg(short, long)]
    /// Number of students to display, overriding the configuration
    top: Option<usize>,
    #[arg(short, long, action = clap::ArgAction::Count)]
    /// Increase verbosity
    verbose: u8,
    /// Course scenario (TOML)
    scenario: PathBuf,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let mut config = loaders::load_config(options.config.as_deref())?;
    if let Some(top) = options.top {
        config.ranking.limit = top;
    }
    let scenario = loaders::load_scenario(&options.scenario)?;
    let results = match &options.results {
        Some(path) => loaders::load_exam_results(path)?,
        None => Vec::new(),
    };
    let course = loaders::build_course(&scenario, config, &results)?;
    info!(
        students = course.student_count(),
        homework = course.homework_count(),
        "course loaded"
    );
    display::display_top(&course, &course.top_students());
    println!();
    display::display_stats(&course);
    display::display_missing_exam(&course);
    Ok(())
}
