//! Percent ionic character of a bond from the Pauling electronegativity difference:
//!
//! ionic character, % = (1 - exp(-ΔEN² / 4)) * 100
//!
//! Bond classification uses the usual thresholds: ΔEN < 0.4 nonpolar covalent,
//! ΔEN < 1.7 polar covalent, otherwise ionic.
use crate::Chemistry::elements::{ElementRecord, ElementTable};
use crate::Chemistry::formula_parser::ParseError;
use log::info;
use serde::Serialize;
use thiserror::Error;

const NONPOLAR_LIMIT: f64 = 0.4;
const IONIC_LIMIT: f64 = 1.7;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IonicError {
    #[error(transparent)]
    Element(#[from] ParseError),
    #[error("No Pauling electronegativity for {0}")]
    NoElectronegativity(String),
    #[error("Invalid electronegativity difference: {0}")]
    InvalidDelta(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BondType {
    NonpolarCovalent,
    PolarCovalent,
    Ionic,
}

impl BondType {
    pub fn from_delta(delta_en: f64) -> Self {
        if delta_en < NONPOLAR_LIMIT {
            BondType::NonpolarCovalent
        } else if delta_en < IONIC_LIMIT {
            BondType::PolarCovalent
        } else {
            BondType::Ionic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BondType::NonpolarCovalent => "nonpolar covalent",
            BondType::PolarCovalent => "polar covalent",
            BondType::Ionic => "ionic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IonicCharacter {
    pub delta_en: f64,
    /// %
    pub ionic_percent: f64,
    pub covalent_percent: f64,
    pub bond_type: BondType,
}

pub fn ionic_character_from_delta(delta_en: f64) -> Result<IonicCharacter, IonicError> {
    if !delta_en.is_finite() || delta_en < 0.0 {
        return Err(IonicError::InvalidDelta(delta_en));
    }
    let ionic_percent = (1.0 - (-delta_en * delta_en / 4.0).exp()) * 100.0;
    Ok(IonicCharacter {
        delta_en,
        ionic_percent,
        covalent_percent: 100.0 - ionic_percent,
        bond_type: BondType::from_delta(delta_en),
    })
}

fn electronegativity(element: &ElementRecord) -> Result<f64, IonicError> {
    element
        .electronegativity
        .ok_or_else(|| IonicError::NoElectronegativity(element.symbol.to_string()))
}

/// Ionic character of the bond between two elements given by symbol
/// # Examples
/// ```
/// use ChemCalc::Chemistry::ionic_character::{ionic_character, BondType};
/// let nacl = ionic_character("Na", "Cl").unwrap();
/// assert_eq!(nacl.bond_type, BondType::Ionic);
/// ```
pub fn ionic_character(first: &str, second: &str) -> Result<IonicCharacter, IonicError> {
    let table = ElementTable::global();
    let a = table.lookup(first.trim())?;
    let b = table.lookup(second.trim())?;
    let delta_en = (electronegativity(a)? - electronegativity(b)?).abs();
    let result = ionic_character_from_delta(delta_en)?;
    info!(
        "{}-{} bond: dEN = {}, ionic character {} %",
        a.symbol, b.symbol, delta_en, result.ionic_percent
    );
    Ok(result)
}
