use super::cli_calculators::{
    atomic_structure_menu, electron_configuration_menu, ionic_character_menu, molar_mass_menu,
    ph_menu, print_molar_mass,
};
use super::cli_settings::settings_menu;
use super::get_user_input;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let Some(choice) = get_user_input() else {
            println!();
            break;
        };

        match choice.trim() {
            "1" => molar_mass_menu(),
            "2" => electron_configuration_menu(),
            "3" => atomic_structure_menu(),
            "4" => ionic_character_menu(),
            "5" => ph_menu(),
            "6" => settings_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// Non-interactive mode: one molar mass table per formula. Returns the number of formulas
/// that failed to parse.
pub fn run_formulas(formulas: &[String]) -> usize {
    formulas
        .iter()
        .filter(|formula| !print_molar_mass(formula))
        .count()
}

/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - "Enter your choice:" prompt

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to ChemCalc: molar mass, electron configuration,\n
    atomic structure, ionic character and pH calculators \n \x1b[0m"
    );
    println!("\x1b[33m1. Molar mass\x1b[0m");
    println!("\x1b[33m2. Electron configuration\x1b[0m");
    println!("\x1b[33m3. Atomic structure\x1b[0m");
    println!("\x1b[33m4. Ionic character\x1b[0m");
    println!("\x1b[33m5. pH\x1b[0m");
    println!("\x1b[33m6. Settings\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    let _ = io::stdout().flush();
}
