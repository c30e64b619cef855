pub mod cli_calculators;
pub mod cli_main;
pub mod cli_settings;

use log::error;
use std::io::{self, BufRead, Write};

/// One line from `reader`, `None` at end of input or on a read error
fn read_user_input<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input),
        Err(e) => {
            error!("failed to read input: {}", e);
            None
        }
    }
}

/// Reads one line from stdin, `None` once stdin is closed
pub(crate) fn get_user_input() -> Option<String> {
    read_user_input(&mut io::stdin().lock())
}

pub(crate) fn prompt(text: &str) -> Option<String> {
    print!("{}", text);
    let _ = io::stdout().flush();
    get_user_input().map(|input| input.trim().to_string())
}
