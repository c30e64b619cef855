use ChemCalc::cli::cli_main::{run_formulas, run_interactive_menu};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::str::FromStr;

fn init_logger() {
    // CHEMCALC_LOG=debug shows every parsed token
    let level = std::env::var("CHEMCALC_LOG")
        .ok()
        .and_then(|level| LevelFilter::from_str(&level).ok())
        .unwrap_or(LevelFilter::Warn);
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("logger is not initialized: {}", e);
    }
}

pub fn main() {
    init_logger();
    let formulas: Vec<String> = std::env::args().skip(1).collect();
    if formulas.is_empty() {
        run_interactive_menu();
    } else if run_formulas(&formulas) > 0 {
        std::process::exit(1);
    }
}
