//! # Formula Parser
//!
//! ## Aim
//! Turns a flat chemical formula like `C6H12O6` into an ordered list of (element, count) tokens.
//!
//! ## Main Data Structures and Logic
//! - `FormulaToken`: element record reference plus a positive atom count
//! - `FormulaParser`: borrows the element table and the parser settings
//! - the formula is scanned left to right with the pattern `([A-Z][a-z]?)(\d*)`; an empty digit
//!   run means one atom
//! - every symbol is validated against the element table, the first unknown symbol stops parsing
//! - characters not covered by the pattern are an error in strict mode and are skipped with a
//!   warning in lenient mode
//! - repeated symbols are summed into the token of their first appearance unless
//!   `merge_duplicates` is switched off
//!
//! Parentheses, hydrate dots, isotopes and charges are not part of the grammar.
use crate::Chemistry::elements::{ElementRecord, ElementTable};
use crate::settings::ParserSettings;
use log::{debug, warn};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

/// error types of formula parsing and molar mass aggregation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Formula is empty")]
    EmptyFormula,
    #[error("Unknown element: {0}")]
    UnknownElement(String),
    #[error("Malformed formula at position {0}")]
    MalformedFormula(usize),
    #[error("Invalid atom count")]
    InvalidCount,
}

/// (element, count) pair in order of first appearance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormulaToken<'a> {
    pub element: &'a ElementRecord,
    pub count: u32,
}

static FORMULA_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    FORMULA_TOKEN_REGEX.get_or_init(|| Regex::new(r"([A-Z][a-z]?)([0-9]*)").unwrap())
}

fn parse_count(digits: &str) -> Result<u32, ParseError> {
    if digits.is_empty() {
        return Ok(1);
    }
    let count: u32 = digits.parse().map_err(|_| ParseError::InvalidCount)?;
    if count == 0 {
        return Err(ParseError::InvalidCount);
    }
    Ok(count)
}

pub struct FormulaParser<'a> {
    table: &'a ElementTable,
    settings: ParserSettings,
}

impl<'a> FormulaParser<'a> {
    pub fn new(table: &'a ElementTable, settings: ParserSettings) -> Self {
        FormulaParser { table, settings }
    }

    /// Parser over the global element table with default settings
    pub fn with_defaults() -> FormulaParser<'static> {
        FormulaParser::new(ElementTable::global(), ParserSettings::default())
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    pub fn parse(&self, formula: &str) -> Result<Vec<FormulaToken<'a>>, ParseError> {
        let formula = formula.trim();
        if formula.is_empty() {
            return Err(ParseError::EmptyFormula);
        }
        debug!("parsing formula {}", formula);

        let mut tokens: Vec<FormulaToken<'a>> = Vec::new();
        // byte offset of the first character not yet covered by a match
        let mut cursor = 0;
        for captures in token_regex().captures_iter(formula) {
            let (Some(whole), Some(symbol), Some(digits)) =
                (captures.get(0), captures.get(1), captures.get(2))
            else {
                continue;
            };
            if whole.start() > cursor {
                self.unconsumed(formula, cursor, whole.start())?;
            }
            let element = self.table.lookup(symbol.as_str())?;
            let count = parse_count(digits.as_str())?;
            debug!("element found: {}, number of atoms {}", element.symbol, count);
            self.push_token(&mut tokens, element, count)?;
            cursor = whole.end();
        }
        if cursor < formula.len() {
            self.unconsumed(formula, cursor, formula.len())?;
        }
        if tokens.is_empty() {
            // lenient mode over input like "123"
            return Err(ParseError::MalformedFormula(0));
        }
        Ok(tokens)
    }

    fn unconsumed(&self, formula: &str, from: usize, to: usize) -> Result<(), ParseError> {
        let position = formula[..from].chars().count();
        if self.settings.strict {
            return Err(ParseError::MalformedFormula(position));
        }
        warn!(
            "skipping '{}' at position {} of formula {}",
            &formula[from..to],
            position,
            formula
        );
        Ok(())
    }

    fn push_token(
        &self,
        tokens: &mut Vec<FormulaToken<'a>>,
        element: &'a ElementRecord,
        count: u32,
    ) -> Result<(), ParseError> {
        if self.settings.merge_duplicates {
            if let Some(existing) = tokens
                .iter_mut()
                .find(|token| token.element.symbol == element.symbol)
            {
                existing.count = existing
                    .count
                    .checked_add(count)
                    .ok_or(ParseError::InvalidCount)?;
                return Ok(());
            }
        }
        tokens.push(FormulaToken { element, count });
        Ok(())
    }
}

/// Parses with the global element table and default settings
pub fn parse_formula(formula: &str) -> Result<Vec<FormulaToken<'static>>, ParseError> {
    FormulaParser::with_defaults().parse(formula)
}
