//! Protons, neutrons and electrons of an atom, isotope or monatomic ion.
use crate::Chemistry::electron_config::{
    MAX_SUPPORTED_ATOMIC_NUMBER, Subshell, electron_configuration,
};
use crate::Chemistry::elements::{ElementRecord, ElementTable};
use crate::Chemistry::formula_parser::ParseError;
use log::info;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error(transparent)]
    Element(#[from] ParseError),
    #[error("Mass number {mass_number} is smaller than the number of protons {protons}")]
    InvalidMassNumber { mass_number: u32, protons: u32 },
    #[error("Charge {0} leaves a negative number of electrons")]
    InvalidCharge(i32),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomicStructure {
    pub element: &'static ElementRecord,
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
    pub mass_number: u32,
    pub charge: i32,
    /// configuration of the neutral atom, None past the supported atomic numbers
    pub configuration: Option<Vec<Subshell>>,
}

/// # Arguments
/// * `symbol` - element symbol, case sensitive
/// * `mass_number` - protons + neutrons; the rounded standard atomic mass when None
/// * `charge` - ion charge, 0 for a neutral atom
///
/// # Examples
/// ```
/// use ChemCalc::Chemistry::atomic_structure::atomic_structure;
/// let carbon14 = atomic_structure("C", Some(14), 0).unwrap();
/// assert_eq!(carbon14.neutrons, 8);
/// ```
pub fn atomic_structure(
    symbol: &str,
    mass_number: Option<u32>,
    charge: i32,
) -> Result<AtomicStructure, StructureError> {
    let element = ElementTable::global().lookup(symbol.trim())?;
    let protons = element.atomic_number;
    let mass_number = mass_number.unwrap_or_else(|| element.atomic_mass.round() as u32);
    if mass_number < protons {
        return Err(StructureError::InvalidMassNumber {
            mass_number,
            protons,
        });
    }
    let electrons = protons as i64 - charge as i64;
    if electrons < 0 {
        return Err(StructureError::InvalidCharge(charge));
    }
    let configuration = if protons <= MAX_SUPPORTED_ATOMIC_NUMBER {
        electron_configuration(protons).ok()
    } else {
        None
    };
    info!(
        "{}-{} charge {}: {} p, {} n, {} e",
        element.symbol,
        mass_number,
        charge,
        protons,
        mass_number - protons,
        electrons
    );
    Ok(AtomicStructure {
        element,
        protons,
        neutrons: mass_number - protons,
        electrons: electrons as u32,
        mass_number,
        charge,
        configuration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_atom_with_default_mass_number() {
        let sodium = atomic_structure("Na", None, 0).unwrap();
        assert_eq!(sodium.protons, 11);
        assert_eq!(sodium.electrons, 11);
        assert_eq!(sodium.mass_number, 23);
        assert_eq!(sodium.neutrons, 12);
        assert_eq!(sodium.configuration.unwrap().len(), 4);
    }

    #[test]
    fn test_isotope_and_ions() {
        let carbon14 = atomic_structure("C", Some(14), 0).unwrap();
        assert_eq!(carbon14.neutrons, 8);

        let chloride = atomic_structure("Cl", Some(35), -1).unwrap();
        assert_eq!(chloride.electrons, 18);
        assert_eq!(chloride.neutrons, 18);

        let calcium = atomic_structure("Ca", None, 2).unwrap();
        assert_eq!(calcium.electrons, 18);
    }

    #[test]
    fn test_heavy_element_has_no_configuration() {
        let uranium = atomic_structure("U", Some(235), 0).unwrap();
        assert_eq!(uranium.neutrons, 143);
        assert!(uranium.configuration.is_none());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            atomic_structure("Xx", None, 0),
            Err(StructureError::Element(ParseError::UnknownElement(
                "Xx".to_string()
            )))
        );
        assert_eq!(
            atomic_structure("O", Some(7), 0),
            Err(StructureError::InvalidMassNumber {
                mass_number: 7,
                protons: 8
            })
        );
        assert_eq!(
            atomic_structure("H", None, 2),
            Err(StructureError::InvalidCharge(2))
        );
    }
}
