//! pH, pOH, [H+] and [OH-] of an aqueous solution at 25 °C from any one of them.
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// -log10(Kw) at 25 °C
pub const PKW: f64 = 14.0;
const NEUTRAL_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhError {
    #[error("Concentration must be a positive number, got {0}")]
    InvalidConcentration(f64),
    #[error("Invalid pH/pOH value: {0}")]
    InvalidValue(f64),
}

/// the known quantity, concentrations in mol/L
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PhInput {
    HydrogenIon(f64),
    HydroxideIon(f64),
    Ph(f64),
    Poh(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Acidity {
    Acidic,
    Neutral,
    Basic,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhResult {
    pub ph: f64,
    pub poh: f64,
    pub hydrogen_ion: f64,
    pub hydroxide_ion: f64,
    pub acidity: Acidity,
}

fn concentration_to_p(concentration: f64) -> Result<f64, PhError> {
    if !concentration.is_finite() || concentration <= 0.0 {
        return Err(PhError::InvalidConcentration(concentration));
    }
    Ok(-concentration.log10())
}

fn checked_value(value: f64) -> Result<f64, PhError> {
    if !value.is_finite() {
        return Err(PhError::InvalidValue(value));
    }
    Ok(value)
}

/// # Examples
/// ```
/// use ChemCalc::Chemistry::ph::{solve_ph, Acidity, PhInput};
/// let result = solve_ph(PhInput::HydrogenIon(1e-3)).unwrap();
/// assert!((result.ph - 3.0).abs() < 1e-9);
/// assert_eq!(result.acidity, Acidity::Acidic);
/// ```
pub fn solve_ph(input: PhInput) -> Result<PhResult, PhError> {
    let ph = match input {
        PhInput::HydrogenIon(c) => concentration_to_p(c)?,
        PhInput::HydroxideIon(c) => PKW - concentration_to_p(c)?,
        PhInput::Ph(value) => checked_value(value)?,
        PhInput::Poh(value) => PKW - checked_value(value)?,
    };
    let poh = PKW - ph;
    let acidity = if (ph - 7.0).abs() < NEUTRAL_TOLERANCE {
        Acidity::Neutral
    } else if ph < 7.0 {
        Acidity::Acidic
    } else {
        Acidity::Basic
    };
    info!("{:?}: pH = {}, pOH = {}", input, ph, poh);
    Ok(PhResult {
        ph,
        poh,
        hydrogen_ion: 10f64.powf(-ph),
        hydroxide_ion: 10f64.powf(-poh),
        acidity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_hydrogen_ion() {
        let result = solve_ph(PhInput::HydrogenIon(1e-3)).unwrap();
        assert_relative_eq!(result.ph, 3.0, epsilon = 1e-9);
        assert_relative_eq!(result.poh, 11.0, epsilon = 1e-9);
        assert_relative_eq!(result.hydroxide_ion, 1e-11, max_relative = 1e-9);
        assert_eq!(result.acidity, Acidity::Acidic);
    }

    #[test]
    fn test_from_hydroxide_ion() {
        let result = solve_ph(PhInput::HydroxideIon(0.01)).unwrap();
        assert_relative_eq!(result.ph, 12.0, epsilon = 1e-9);
        assert_relative_eq!(result.hydrogen_ion, 1e-12, max_relative = 1e-9);
        assert_eq!(result.acidity, Acidity::Basic);
    }

    #[test]
    fn test_from_ph_and_poh() {
        let neutral = solve_ph(PhInput::Ph(7.0)).unwrap();
        assert_eq!(neutral.acidity, Acidity::Neutral);
        assert_relative_eq!(neutral.hydrogen_ion, 1e-7, max_relative = 1e-9);

        let result = solve_ph(PhInput::Poh(4.5)).unwrap();
        assert_relative_eq!(result.ph, 9.5, epsilon = 1e-12);
        assert_relative_eq!(
            result.hydrogen_ion * result.hydroxide_ion,
            1e-14,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            solve_ph(PhInput::HydrogenIon(0.0)),
            Err(PhError::InvalidConcentration(0.0))
        );
        assert_eq!(
            solve_ph(PhInput::HydroxideIon(-1.0)),
            Err(PhError::InvalidConcentration(-1.0))
        );
        assert_eq!(
            solve_ph(PhInput::Ph(f64::INFINITY)),
            Err(PhError::InvalidValue(f64::INFINITY))
        );
    }
}
