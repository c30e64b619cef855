/// fixed periodic table: symbol, name, atomic number, atomic mass, Pauling electronegativity.
/// Built once per process and shared read-only
pub mod elements;
/// Lexes a flat chemical formula like "C6H12O6" into ordered (element, count) tokens
///
///  # Examples
/// ```
/// use ChemCalc::Chemistry::formula_parser::parse_formula;
/// let tokens = parse_formula("H2O").unwrap();
/// assert_eq!(tokens[0].element.symbol, "H");
/// assert_eq!(tokens[0].count, 2);
/// ```
pub mod formula_parser;
/// Module to calculate the molar mass of a chemical formula, the mass contribution and mass
/// percentage of every element, molar masses of a vector of substances and the elemental
/// composition matrix
///
///  # Examples
/// ```
/// use ChemCalc::Chemistry::molmass::parse_and_compute;
/// let result = parse_and_compute("C6H12O6").unwrap();
/// println!("Molar mass: {:?} g/mol", result.total_mass);
/// for c in result.contributions.iter() {
///     println!("{}: {} atoms, {:.3} %", c.element.symbol, c.count, c.percentage);
/// }
/// ```
pub mod molmass;
/// tests
pub mod molmass_tests;
/// electron configuration in a fixed subshell filling order (up to Z = 58)
pub mod electron_config;
/// protons, neutrons, electrons of an element, isotope or ion
pub mod atomic_structure;
/// Pauling percent ionic character of a bond
pub mod ionic_character;
/// pH, pOH and ion concentrations
pub mod ph;
