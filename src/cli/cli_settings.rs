use super::{get_user_input, prompt};
use crate::settings::{with_settings, with_settings_mut};
use std::io::{self, Write};

pub fn settings_menu() {
    loop {
        let (settings, config_file) = with_settings(|manager| {
            (*manager.settings(), manager.config_file().to_string())
        });
        println!("\n=== Settings ({}) ===", config_file);
        println!("1. Strict formula parsing: {}", settings.strict);
        println!("2. Merge repeated elements: {}", settings.merge_duplicates);
        println!("3. Decimal places: {}", settings.decimal_places);
        println!("4. Reset to defaults");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        let Some(choice) = get_user_input() else {
            break;
        };
        let result = match choice.trim() {
            "1" => with_settings_mut(|manager| manager.set_strict(!settings.strict)),
            "2" => with_settings_mut(|manager| {
                manager.set_merge_duplicates(!settings.merge_duplicates)
            }),
            "3" => {
                let Some(places) = prompt("Decimal places: ") else {
                    break;
                };
                match places.parse::<usize>() {
                    Ok(places) => with_settings_mut(|manager| manager.set_decimal_places(places)),
                    Err(_) => Err(format!("Invalid number: {}", places).into()),
                }
            }
            "4" => with_settings_mut(|manager| manager.reset_to_defaults()),
            "0" => break,
            _ => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };
        if let Err(e) = result {
            println!("\x1b[31m{}\x1b[0m", e);
        }
    }
}
