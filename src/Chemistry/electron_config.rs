//! Electron configuration by filling subshells in a fixed order.
//!
//! Subshells are filled in the literal order `1s 2s 2p 3s 3p 4s 3d 4p 5s 4d 5p 6s`, each up to
//! its capacity (s: 2, p: 6, d: 10), until the electrons are used up. This is not the full
//! Aufbau sequence and the exceptions of real atoms (Cr, Cu, ...) are not applied. The listed
//! subshells hold 58 electrons, larger atomic numbers are rejected.
use log::debug;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub const FILLING_ORDER: [&str; 12] = [
    "1s", "2s", "2p", "3s", "3p", "4s", "3d", "4p", "5s", "4d", "5p", "6s",
];

/// Electrons the listed subshells can hold in total
pub const MAX_SUPPORTED_ATOMIC_NUMBER: u32 = 58;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElectronConfigError {
    #[error("Unsupported atomic number: {0} (supported range is 1..=58)")]
    UnsupportedAtomicNumber(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subshell {
    pub label: &'static str,
    pub electrons: u32,
}

impl fmt::Display for Subshell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label, self.electrons)
    }
}

/// capacity from the subshell letter
pub fn subshell_capacity(label: &str) -> u32 {
    match label.chars().last() {
        Some('s') => 2,
        Some('p') => 6,
        Some('d') => 10,
        _ => 0,
    }
}

pub fn electron_configuration(atomic_number: u32) -> Result<Vec<Subshell>, ElectronConfigError> {
    if atomic_number == 0 || atomic_number > MAX_SUPPORTED_ATOMIC_NUMBER {
        return Err(ElectronConfigError::UnsupportedAtomicNumber(atomic_number));
    }
    let mut remaining = atomic_number;
    let mut configuration = Vec::new();
    for label in FILLING_ORDER {
        if remaining == 0 {
            break;
        }
        let electrons = remaining.min(subshell_capacity(label));
        debug!("subshell {} takes {} electrons", label, electrons);
        configuration.push(Subshell { label, electrons });
        remaining -= electrons;
    }
    Ok(configuration)
}

/// "1s2 2s2 2p6"
pub fn format_configuration(configuration: &[Subshell]) -> String {
    configuration
        .iter()
        .map(|subshell| subshell.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
