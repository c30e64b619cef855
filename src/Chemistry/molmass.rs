use crate::Chemistry::elements::{ElementRecord, ElementTable};
use crate::Chemistry::formula_parser::{FormulaParser, FormulaToken, ParseError};
use crate::settings::ParserSettings;
use log::{debug, info};
use nalgebra::DMatrix;
use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// mass contribution of one element of a formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementContribution<'a> {
    pub element: &'a ElementRecord,
    pub count: u32,
    /// g/mol
    pub mass_contribution: f64,
    /// share of the total molar mass, %
    pub percentage: f64,
}

/// molar mass of a formula and per-element breakdown in the order elements were parsed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MolarMassResult<'a> {
    pub formula: String,
    /// g/mol
    pub total_mass: f64,
    pub contributions: Vec<ElementContribution<'a>>,
}

impl<'a> MolarMassResult<'a> {
    /// element symbols and atom counts
    pub fn element_counts(&self) -> Vec<(String, u32)> {
        self.contributions
            .iter()
            .map(|c| (c.element.symbol.to_string(), c.count))
            .collect()
    }

    pub fn contribution(&self, symbol: &str) -> Option<&ElementContribution<'a>> {
        self.contributions
            .iter()
            .find(|c| c.element.symbol == symbol)
    }

    /// table with one row per element and a total row, values rounded to `decimal_places`
    pub fn as_table(&self, decimal_places: usize) -> Table {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Element"),
            Cell::new("Symbol"),
            Cell::new("Atoms"),
            Cell::new("Atomic mass, g/mol"),
            Cell::new("Mass, g/mol"),
            Cell::new("Mass, %"),
        ]));
        for c in self.contributions.iter() {
            table.add_row(Row::new(vec![
                Cell::new(c.element.name),
                Cell::new(c.element.symbol),
                Cell::new(&c.count.to_string()),
                Cell::new(&format!("{:.*}", decimal_places, c.element.atomic_mass)),
                Cell::new(&format!("{:.*}", decimal_places, c.mass_contribution)),
                Cell::new(&format!("{:.*}", decimal_places, c.percentage)),
            ]));
        }
        table.add_row(Row::new(vec![
            Cell::new(&self.formula),
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
            Cell::new(&format!("{:.*}", decimal_places, self.total_mass)),
            Cell::new(&format!("{:.*}", decimal_places, 100.0)),
        ]));
        table
    }

    pub fn pretty_print(&self, decimal_places: usize) {
        self.as_table(decimal_places).printstd();
    }
}

/// Turns parsed tokens into a molar mass result. Percentages need the total, so contributions
/// are computed first and normalised in a second pass.
pub fn aggregate<'a>(
    formula: &str,
    tokens: &[FormulaToken<'a>],
) -> Result<MolarMassResult<'a>, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyFormula);
    }
    let mut contributions: Vec<ElementContribution<'a>> = tokens
        .iter()
        .map(|token| ElementContribution {
            element: token.element,
            count: token.count,
            mass_contribution: token.element.atomic_mass * token.count as f64,
            percentage: 0.0,
        })
        .collect();
    let total_mass: f64 = contributions.iter().map(|c| c.mass_contribution).sum();
    for c in contributions.iter_mut() {
        c.percentage = c.mass_contribution / total_mass * 100.0;
        debug!(
            "{}: {} atoms, {} g/mol, {} %",
            c.element.symbol, c.count, c.mass_contribution, c.percentage
        );
    }
    info!("molar mass of {}: {} g/mol", formula, total_mass);
    Ok(MolarMassResult {
        formula: formula.trim().to_string(),
        total_mass,
        contributions,
    })
}

/// Parses a formula and computes its molar mass against the given table and settings
pub fn parse_and_compute_with<'a>(
    table: &'a ElementTable,
    settings: ParserSettings,
    formula: &str,
) -> Result<MolarMassResult<'a>, ParseError> {
    let tokens = FormulaParser::new(table, settings).parse(formula)?;
    aggregate(formula, &tokens)
}

/// Parses a formula and computes its molar mass with the global element table and default settings
/// # Examples
/// ```
/// use ChemCalc::Chemistry::molmass::parse_and_compute;
/// let result = parse_and_compute("H2O").unwrap();
/// assert!((result.total_mass - 18.015).abs() < 1e-9);
/// ```
pub fn parse_and_compute(formula: &str) -> Result<MolarMassResult<'static>, ParseError> {
    parse_and_compute_with(ElementTable::global(), ParserSettings::default(), formula)
}

// Function to calculate the molar mass of a vector of chemical formulas
pub fn calculate_molar_mass_of_vector_of_subs(
    vec_of_formulae: &[&str],
) -> Result<Vec<f64>, ParseError> {
    info!("calculating molar masses of {} substances", vec_of_formulae.len());
    vec_of_formulae
        .iter()
        .map(|formula| parse_and_compute(formula).map(|result| result.total_mass))
        .collect()
}

/// Matrix of atom counts: one row per substance, one column per element. Columns follow atomic
/// number order and are listed in the returned vector of symbols.
pub fn create_elem_composition_matrix(
    vec_of_formulae: &[&str],
) -> Result<(DMatrix<f64>, Vec<String>), ParseError> {
    let parser = FormulaParser::with_defaults();
    let mut vec_of_compositions = Vec::with_capacity(vec_of_formulae.len());
    let mut elements: Vec<&ElementRecord> = Vec::new();
    for formula in vec_of_formulae.iter() {
        let tokens = parser.parse(formula)?;
        for token in tokens.iter() {
            if !elements.iter().any(|e| e.symbol == token.element.symbol) {
                elements.push(token.element);
            }
        }
        vec_of_compositions.push(tokens);
    }
    elements.sort_by_key(|e| e.atomic_number);

    let mut matrix = DMatrix::zeros(vec_of_formulae.len(), elements.len());
    for (substance_i, tokens) in vec_of_compositions.iter().enumerate() {
        for token in tokens.iter() {
            if let Some(j) = elements
                .iter()
                .position(|e| e.symbol == token.element.symbol)
            {
                matrix[(substance_i, j)] += token.count as f64;
            }
        }
    }
    let symbols = elements.iter().map(|e| e.symbol.to_string()).collect();
    Ok((matrix, symbols))
}
