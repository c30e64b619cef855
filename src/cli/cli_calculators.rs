use super::prompt;
use crate::Chemistry::atomic_structure::atomic_structure;
use crate::Chemistry::electron_config::{electron_configuration, format_configuration};
use crate::Chemistry::elements::ElementTable;
use crate::Chemistry::ionic_character::ionic_character;
use crate::Chemistry::molmass::parse_and_compute_with;
use crate::Chemistry::ph::{PhInput, solve_ph};
use crate::settings::with_settings;
use prettytable::{Table, row};

fn decimal_places() -> usize {
    with_settings(|manager| manager.settings().decimal_places)
}

/// Prints the molar mass table of one formula with the current settings, false on error
pub fn print_molar_mass(formula: &str) -> bool {
    let settings = with_settings(|manager| *manager.settings());
    match parse_and_compute_with(ElementTable::global(), settings, formula) {
        Ok(result) => {
            println!("\nMolar mass of {}:", result.formula);
            result.pretty_print(settings.decimal_places);
            true
        }
        Err(e) => {
            println!("\x1b[31mError in formula '{}': {}\x1b[0m", formula, e);
            false
        }
    }
}

pub fn molar_mass_menu() {
    loop {
        let formula = match prompt("\nEnter a formula (e.g. C6H12O6), empty line to go back: ") {
            Some(formula) if !formula.is_empty() => formula,
            _ => break,
        };
        print_molar_mass(&formula);
    }
}

pub fn electron_configuration_menu() {
    let Some(input) = prompt("\nEnter an element symbol or atomic number: ") else {
        return;
    };
    let atomic_number = match input.parse::<u32>() {
        Ok(z) => z,
        Err(_) => match ElementTable::global().lookup(&input) {
            Ok(element) => element.atomic_number,
            Err(e) => {
                println!("\x1b[31m{}\x1b[0m", e);
                return;
            }
        },
    };
    match electron_configuration(atomic_number) {
        Ok(configuration) => {
            let mut table = Table::new();
            table.add_row(row!["Subshell", "Electrons"]);
            for subshell in configuration.iter() {
                table.add_row(row![subshell.label, subshell.electrons]);
            }
            table.printstd();
            println!("{}", format_configuration(&configuration));
        }
        Err(e) => println!("\x1b[31m{}\x1b[0m", e),
    }
}

pub fn atomic_structure_menu() {
    let Some(symbol) = prompt("\nEnter an element symbol: ") else {
        return;
    };
    let Some(mass_number) = prompt("Mass number (empty for the most common): ") else {
        return;
    };
    let mass_number = if mass_number.is_empty() {
        None
    } else {
        match mass_number.parse::<u32>() {
            Ok(a) => Some(a),
            Err(_) => {
                println!("\x1b[31mInvalid mass number: {}\x1b[0m", mass_number);
                return;
            }
        }
    };
    let Some(charge) = prompt("Charge (empty for a neutral atom): ") else {
        return;
    };
    let charge = if charge.is_empty() {
        0
    } else {
        match charge.trim_start_matches('+').parse::<i32>() {
            Ok(q) => q,
            Err(_) => {
                println!("\x1b[31mInvalid charge: {}\x1b[0m", charge);
                return;
            }
        }
    };
    match atomic_structure(&symbol, mass_number, charge) {
        Ok(structure) => {
            let mut table = Table::new();
            table.add_row(row!["Element", structure.element.name]);
            table.add_row(row!["Protons", structure.protons]);
            table.add_row(row!["Neutrons", structure.neutrons]);
            table.add_row(row!["Electrons", structure.electrons]);
            table.add_row(row!["Mass number", structure.mass_number]);
            table.add_row(row!["Charge", structure.charge]);
            let configuration = structure
                .configuration
                .as_deref()
                .map(format_configuration)
                .unwrap_or_else(|| "-".to_string());
            table.add_row(row!["Configuration", configuration]);
            table.printstd();
        }
        Err(e) => println!("\x1b[31m{}\x1b[0m", e),
    }
}

pub fn ionic_character_menu() {
    let (Some(first), Some(second)) = (
        prompt("\nFirst element symbol: "),
        prompt("Second element symbol: "),
    ) else {
        return;
    };
    let places = decimal_places();
    match ionic_character(&first, &second) {
        Ok(result) => {
            let mut table = Table::new();
            table.add_row(row!["Electronegativity difference", format!("{:.*}", places, result.delta_en)]);
            table.add_row(row!["Ionic character, %", format!("{:.*}", places, result.ionic_percent)]);
            table.add_row(row!["Covalent character, %", format!("{:.*}", places, result.covalent_percent)]);
            table.add_row(row!["Bond type", result.bond_type.as_str()]);
            table.printstd();
        }
        Err(e) => println!("\x1b[31m{}\x1b[0m", e),
    }
}

pub fn ph_menu() {
    println!("\n=== pH ===");
    println!("1. From [H+], mol/L");
    println!("2. From [OH-], mol/L");
    println!("3. From pH");
    println!("4. From pOH");
    let Some(choice) = prompt("Enter your choice: ") else {
        return;
    };
    let Some(value) = prompt("Value: ") else {
        return;
    };
    let value = match value.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            println!("\x1b[31mInvalid number: {}\x1b[0m", value);
            return;
        }
    };
    let input = match choice.as_str() {
        "1" => PhInput::HydrogenIon(value),
        "2" => PhInput::HydroxideIon(value),
        "3" => PhInput::Ph(value),
        "4" => PhInput::Poh(value),
        _ => {
            println!("Invalid choice.");
            return;
        }
    };
    let places = decimal_places();
    match solve_ph(input) {
        Ok(result) => {
            let mut table = Table::new();
            table.add_row(row!["pH", format!("{:.*}", places, result.ph)]);
            table.add_row(row!["pOH", format!("{:.*}", places, result.poh)]);
            table.add_row(row!["[H+], mol/L", format!("{:.*e}", places, result.hydrogen_ion)]);
            table.add_row(row!["[OH-], mol/L", format!("{:.*e}", places, result.hydroxide_ion)]);
            table.add_row(row!["Solution", format!("{:?}", result.acidity)]);
            table.printstd();
        }
        Err(e) => println!("\x1b[31m{}\x1b[0m", e),
    }
}
