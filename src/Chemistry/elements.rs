//! # Element Reference Table
//!
//! ## Aim
//! Fixed periodic-table dataset used by every calculator of the crate: symbol, name,
//! atomic number, standard atomic mass (g/mol) and Pauling electronegativity.
//!
//! ## Main Data Structures and Logic
//! - `ElementRecord`: immutable row of the table
//! - `ElementTable`: symbol -> record `HashMap` plus atomic-number ordered rows
//! - `ElementTable::global()`: process-wide instance built once (`OnceLock`) and shared by
//!   reference, never mutated afterwards, so it may be read from any thread without locking
//!
//! ## Usage
//! ```rust
//! use ChemCalc::Chemistry::elements::ElementTable;
//! let table = ElementTable::global();
//! let oxygen = table.lookup("O").unwrap();
//! assert_eq!(oxygen.atomic_number, 8);
//! assert!(table.lookup("CO").is_err());
//! ```
use crate::Chemistry::formula_parser::ParseError;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// One element of the periodic table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementRecord {
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_number: u32,
    /// standard atomic mass, g/mol
    pub atomic_mass: f64,
    /// Pauling scale, None for noble gases without a tabulated value and superheavy elements
    pub electronegativity: Option<f64>,
}

const fn el(
    atomic_number: u32,
    symbol: &'static str,
    name: &'static str,
    atomic_mass: f64,
    electronegativity: Option<f64>,
) -> ElementRecord {
    ElementRecord {
        symbol,
        name,
        atomic_number,
        atomic_mass,
        electronegativity,
    }
}

// Elements 1-118 in atomic-number order
static ELEMENTS: [ElementRecord; 118] = [
    el(1, "H", "Hydrogen", 1.008, Some(2.20)),
    el(2, "He", "Helium", 4.0026, None),
    el(3, "Li", "Lithium", 6.94, Some(0.98)),
    el(4, "Be", "Beryllium", 9.0122, Some(1.57)),
    el(5, "B", "Boron", 10.81, Some(2.04)),
    el(6, "C", "Carbon", 12.011, Some(2.55)),
    el(7, "N", "Nitrogen", 14.007, Some(3.04)),
    el(8, "O", "Oxygen", 15.999, Some(3.44)),
    el(9, "F", "Fluorine", 18.998, Some(3.98)),
    el(10, "Ne", "Neon", 20.180, None),
    el(11, "Na", "Sodium", 22.990, Some(0.93)),
    el(12, "Mg", "Magnesium", 24.305, Some(1.31)),
    el(13, "Al", "Aluminium", 26.982, Some(1.61)),
    el(14, "Si", "Silicon", 28.085, Some(1.90)),
    el(15, "P", "Phosphorus", 30.974, Some(2.19)),
    el(16, "S", "Sulfur", 32.06, Some(2.58)),
    el(17, "Cl", "Chlorine", 35.453, Some(3.16)),
    el(18, "Ar", "Argon", 39.948, None),
    el(19, "K", "Potassium", 39.098, Some(0.82)),
    el(20, "Ca", "Calcium", 40.078, Some(1.00)),
    el(21, "Sc", "Scandium", 44.956, Some(1.36)),
    el(22, "Ti", "Titanium", 47.867, Some(1.54)),
    el(23, "V", "Vanadium", 50.942, Some(1.63)),
    el(24, "Cr", "Chromium", 51.996, Some(1.66)),
    el(25, "Mn", "Manganese", 54.938, Some(1.55)),
    el(26, "Fe", "Iron", 55.845, Some(1.83)),
    el(27, "Co", "Cobalt", 58.933, Some(1.88)),
    el(28, "Ni", "Nickel", 58.693, Some(1.91)),
    el(29, "Cu", "Copper", 63.546, Some(1.90)),
    el(30, "Zn", "Zinc", 65.38, Some(1.65)),
    el(31, "Ga", "Gallium", 69.723, Some(1.81)),
    el(32, "Ge", "Germanium", 72.630, Some(2.01)),
    el(33, "As", "Arsenic", 74.922, Some(2.18)),
    el(34, "Se", "Selenium", 78.971, Some(2.55)),
    el(35, "Br", "Bromine", 79.904, Some(2.96)),
    el(36, "Kr", "Krypton", 83.798, Some(3.00)),
    el(37, "Rb", "Rubidium", 85.468, Some(0.82)),
    el(38, "Sr", "Strontium", 87.62, Some(0.95)),
    el(39, "Y", "Yttrium", 88.906, Some(1.22)),
    el(40, "Zr", "Zirconium", 91.224, Some(1.33)),
    el(41, "Nb", "Niobium", 92.906, Some(1.6)),
    el(42, "Mo", "Molybdenum", 95.95, Some(2.16)),
    el(43, "Tc", "Technetium", 98.0, Some(1.9)),
    el(44, "Ru", "Ruthenium", 101.07, Some(2.2)),
    el(45, "Rh", "Rhodium", 102.91, Some(2.28)),
    el(46, "Pd", "Palladium", 106.42, Some(2.20)),
    el(47, "Ag", "Silver", 107.87, Some(1.93)),
    el(48, "Cd", "Cadmium", 112.41, Some(1.69)),
    el(49, "In", "Indium", 114.82, Some(1.78)),
    el(50, "Sn", "Tin", 118.71, Some(1.96)),
    el(51, "Sb", "Antimony", 121.76, Some(2.05)),
    el(52, "Te", "Tellurium", 127.60, Some(2.1)),
    el(53, "I", "Iodine", 126.90, Some(2.66)),
    el(54, "Xe", "Xenon", 131.29, Some(2.6)),
    el(55, "Cs", "Caesium", 132.91, Some(0.79)),
    el(56, "Ba", "Barium", 137.33, Some(0.89)),
    el(57, "La", "Lanthanum", 138.91, Some(1.10)),
    el(58, "Ce", "Cerium", 140.12, Some(1.12)),
    el(59, "Pr", "Praseodymium", 140.91, Some(1.13)),
    el(60, "Nd", "Neodymium", 144.24, Some(1.14)),
    el(61, "Pm", "Promethium", 145.0, Some(1.13)),
    el(62, "Sm", "Samarium", 150.36, Some(1.17)),
    el(63, "Eu", "Europium", 151.96, Some(1.2)),
    el(64, "Gd", "Gadolinium", 157.25, Some(1.2)),
    el(65, "Tb", "Terbium", 158.93, Some(1.1)),
    el(66, "Dy", "Dysprosium", 162.50, Some(1.22)),
    el(67, "Ho", "Holmium", 164.93, Some(1.23)),
    el(68, "Er", "Erbium", 167.26, Some(1.24)),
    el(69, "Tm", "Thulium", 168.93, Some(1.25)),
    el(70, "Yb", "Ytterbium", 173.05, Some(1.1)),
    el(71, "Lu", "Lutetium", 174.97, Some(1.27)),
    el(72, "Hf", "Hafnium", 178.49, Some(1.3)),
    el(73, "Ta", "Tantalum", 180.95, Some(1.5)),
    el(74, "W", "Tungsten", 183.84, Some(2.36)),
    el(75, "Re", "Rhenium", 186.21, Some(1.9)),
    el(76, "Os", "Osmium", 190.23, Some(2.2)),
    el(77, "Ir", "Iridium", 192.22, Some(2.20)),
    el(78, "Pt", "Platinum", 195.08, Some(2.28)),
    el(79, "Au", "Gold", 196.97, Some(2.54)),
    el(80, "Hg", "Mercury", 200.59, Some(2.00)),
    el(81, "Tl", "Thallium", 204.38, Some(1.62)),
    el(82, "Pb", "Lead", 207.2, Some(2.33)),
    el(83, "Bi", "Bismuth", 208.98, Some(2.02)),
    el(84, "Po", "Polonium", 209.0, Some(2.0)),
    el(85, "At", "Astatine", 210.0, Some(2.2)),
    el(86, "Rn", "Radon", 222.0, Some(2.2)),
    el(87, "Fr", "Francium", 223.0, Some(0.7)),
    el(88, "Ra", "Radium", 226.0, Some(0.9)),
    el(89, "Ac", "Actinium", 227.0, Some(1.1)),
    el(90, "Th", "Thorium", 232.04, Some(1.3)),
    el(91, "Pa", "Protactinium", 231.04, Some(1.5)),
    el(92, "U", "Uranium", 238.03, Some(1.38)),
    el(93, "Np", "Neptunium", 237.0, Some(1.36)),
    el(94, "Pu", "Plutonium", 244.0, Some(1.28)),
    el(95, "Am", "Americium", 243.0, Some(1.3)),
    el(96, "Cm", "Curium", 247.0, Some(1.3)),
    el(97, "Bk", "Berkelium", 247.0, Some(1.3)),
    el(98, "Cf", "Californium", 251.0, Some(1.3)),
    el(99, "Es", "Einsteinium", 252.0, Some(1.3)),
    el(100, "Fm", "Fermium", 257.0, Some(1.3)),
    el(101, "Md", "Mendelevium", 258.0, Some(1.3)),
    el(102, "No", "Nobelium", 259.0, Some(1.3)),
    el(103, "Lr", "Lawrencium", 266.0, Some(1.3)),
    el(104, "Rf", "Rutherfordium", 267.0, None),
    el(105, "Db", "Dubnium", 268.0, None),
    el(106, "Sg", "Seaborgium", 269.0, None),
    el(107, "Bh", "Bohrium", 270.0, None),
    el(108, "Hs", "Hassium", 277.0, None),
    el(109, "Mt", "Meitnerium", 278.0, None),
    el(110, "Ds", "Darmstadtium", 281.0, None),
    el(111, "Rg", "Roentgenium", 282.0, None),
    el(112, "Cn", "Copernicium", 285.0, None),
    el(113, "Nh", "Nihonium", 286.0, None),
    el(114, "Fl", "Flerovium", 289.0, None),
    el(115, "Mc", "Moscovium", 290.0, None),
    el(116, "Lv", "Livermorium", 293.0, None),
    el(117, "Ts", "Tennessine", 294.0, None),
    el(118, "Og", "Oganesson", 294.0, None),
];

/// Read-only symbol -> element map
#[derive(Debug)]
pub struct ElementTable {
    by_symbol: HashMap<&'static str, ElementRecord>,
    ordered: &'static [ElementRecord],
}

static GLOBAL_ELEMENT_TABLE: OnceLock<ElementTable> = OnceLock::new();

impl ElementTable {
    fn build() -> Self {
        let by_symbol = ELEMENTS
            .iter()
            .map(|element| (element.symbol, *element))
            .collect::<HashMap<_, _>>();
        ElementTable {
            by_symbol,
            ordered: &ELEMENTS,
        }
    }

    /// Process-wide table, built on first access
    pub fn global() -> &'static ElementTable {
        GLOBAL_ELEMENT_TABLE.get_or_init(ElementTable::build)
    }

    /// Case-sensitive exact lookup
    pub fn get(&self, symbol: &str) -> Option<&ElementRecord> {
        self.by_symbol.get(symbol)
    }

    /// Same as `get` but reports an unknown symbol as `ParseError::UnknownElement`
    pub fn lookup(&self, symbol: &str) -> Result<&ElementRecord, ParseError> {
        self.get(symbol)
            .ok_or_else(|| ParseError::UnknownElement(symbol.to_string()))
    }

    pub fn by_atomic_number(&self, atomic_number: u32) -> Option<&ElementRecord> {
        if atomic_number == 0 {
            return None;
        }
        self.ordered.get(atomic_number as usize - 1)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// rows in atomic-number order
    pub fn iter(&self) -> impl Iterator<Item = &ElementRecord> {
        self.ordered.iter()
    }
}
