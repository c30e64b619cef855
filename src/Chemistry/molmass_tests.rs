/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Chemistry::elements::ElementTable;
    use crate::Chemistry::formula_parser::{FormulaParser, ParseError, parse_formula};
    use crate::Chemistry::molmass::{
        aggregate, calculate_molar_mass_of_vector_of_subs, create_elem_composition_matrix,
        parse_and_compute, parse_and_compute_with,
    };
    use crate::settings::ParserSettings;
    use approx::assert_relative_eq;

    fn assert_consistent(formula: &str) {
        let result = parse_and_compute(formula).unwrap();
        let sum_of_masses: f64 = result.contributions.iter().map(|c| c.mass_contribution).sum();
        let sum_of_percentages: f64 = result.contributions.iter().map(|c| c.percentage).sum();
        assert_relative_eq!(sum_of_masses, result.total_mass, epsilon = 1e-9);
        assert_relative_eq!(sum_of_percentages, 100.0, epsilon = 1e-6);
        assert!(result.contributions.iter().all(|c| c.count >= 1));
    }

    #[test]
    fn test_water() {
        let result = parse_and_compute("H2O").unwrap();
        assert_relative_eq!(result.total_mass, 18.015, epsilon = 1e-9);
        assert_eq!(result.contributions.len(), 2);

        let h = &result.contributions[0];
        assert_eq!(h.element.symbol, "H");
        assert_eq!(h.count, 2);
        assert_relative_eq!(h.mass_contribution, 2.016, epsilon = 1e-9);

        let o = &result.contributions[1];
        assert_eq!(o.element.symbol, "O");
        assert_eq!(o.count, 1);
        assert_relative_eq!(o.mass_contribution, 15.999, epsilon = 1e-9);
        assert_relative_eq!(h.percentage, 2.016 / 18.015 * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_calculate_molar_mass() {
        let result = parse_and_compute("NaCl").unwrap();
        assert_relative_eq!(result.total_mass, 58.443, epsilon = 1e-9);

        let result = parse_and_compute("C6H12O6").unwrap();
        assert_relative_eq!(result.total_mass, 180.156, epsilon = 1e-9);

        let result = parse_and_compute("C6H8O6").unwrap();
        assert_relative_eq!(result.total_mass, 176.124, epsilon = 1e-9);

        let result = parse_and_compute("Ca3P2O8").unwrap();
        assert_relative_eq!(result.total_mass, 310.174, epsilon = 1e-9);
    }

    #[test]
    fn test_sums_are_consistent() {
        for formula in [
            "H2O", "NaCl", "C6H12O6", "KMnO4", "UF6", "C8H10N4O2", "Fe3O4", "He", "CH3COOH",
        ] {
            assert_consistent(formula);
        }
    }

    #[test]
    fn test_errors_surface_without_result() {
        assert_eq!(parse_and_compute(""), Err(ParseError::EmptyFormula));
        assert_eq!(
            parse_and_compute("Xx2"),
            Err(ParseError::UnknownElement("Xx".to_string()))
        );
        assert_eq!(
            parse_and_compute("H2O!"),
            Err(ParseError::MalformedFormula(3))
        );
        assert_eq!(parse_and_compute("H0"), Err(ParseError::InvalidCount));
    }

    #[test]
    fn test_aggregate_rejects_empty_tokens() {
        assert_eq!(aggregate("", &[]), Err(ParseError::EmptyFormula));
    }

    #[test]
    fn test_idempotent() {
        let first = parse_and_compute("C6H12O6").unwrap();
        let second = parse_and_compute("C6H12O6").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_order_follows_formula() {
        let result = parse_and_compute("OH2").unwrap();
        assert_eq!(
            result.element_counts(),
            vec![("O".to_string(), 1), ("H".to_string(), 2)]
        );
        assert_eq!(result.contribution("H").unwrap().count, 2);
        assert!(result.contribution("C").is_none());
    }

    #[test]
    fn test_unmerged_duplicates_give_same_total() {
        let settings = ParserSettings {
            merge_duplicates: false,
            ..ParserSettings::default()
        };
        let unmerged = parse_and_compute_with(ElementTable::global(), settings, "CH3COOH").unwrap();
        let merged = parse_and_compute("CH3COOH").unwrap();
        assert_eq!(unmerged.contributions.len(), 6);
        assert_eq!(merged.contributions.len(), 3);
        assert_relative_eq!(unmerged.total_mass, merged.total_mass, epsilon = 1e-9);
        assert_relative_eq!(merged.total_mass, 60.052, epsilon = 1e-9);
    }

    #[test]
    fn test_lenient_settings() {
        let settings = ParserSettings {
            strict: false,
            ..ParserSettings::default()
        };
        let result = parse_and_compute_with(ElementTable::global(), settings, "H2O(g)").unwrap();
        assert_relative_eq!(result.total_mass, 18.015, epsilon = 1e-9);
    }

    #[test]
    fn test_aggregate_of_parsed_tokens() {
        let tokens = parse_formula("CO2").unwrap();
        let result = aggregate("CO2", &tokens).unwrap();
        assert_relative_eq!(result.total_mass, 44.009, epsilon = 1e-9);
        let parser = FormulaParser::with_defaults();
        assert!(parser.settings().strict);
    }

    #[test]
    fn test_calculate_molar_mass_of_vector_of_substances() {
        let vec_of_formulae = vec!["H2O", "NaCl", "C6H8O6"];
        let expected_molar_masses = vec![18.015, 58.443, 176.124];

        let calculated_molar_masses =
            calculate_molar_mass_of_vector_of_subs(&vec_of_formulae).unwrap();

        for (i, &expected_molar_mass) in expected_molar_masses.iter().enumerate() {
            assert_relative_eq!(calculated_molar_masses[i], expected_molar_mass, epsilon = 1e-9);
        }
        assert_eq!(
            calculate_molar_mass_of_vector_of_subs(&["H2O", "Qq"]),
            Err(ParseError::UnknownElement("Qq".to_string()))
        );
    }

    #[test]
    fn test_element_matrix() {
        let vec_of_formulae = vec!["H2O", "NaCl", "C3H8", "CH4"]; // 5 elements
        let (matrix, elements) = create_elem_composition_matrix(&vec_of_formulae).unwrap();
        assert_eq!(matrix.nrows(), 4);
        assert_eq!(matrix.ncols(), 5);
        assert_eq!(elements, vec!["H", "C", "O", "Na", "Cl"]);
        assert_eq!(matrix[(0, 0)], 2.0);
        assert_eq!(matrix[(0, 2)], 1.0);
        assert_eq!(matrix[(2, 0)], 8.0);
        assert_eq!(matrix[(2, 1)], 3.0);
        assert_eq!(matrix[(1, 1)], 0.0);
    }

    #[test]
    fn test_table_rendering() {
        let result = parse_and_compute("H2O").unwrap();
        let rendered = result.as_table(3).to_string();
        assert!(rendered.contains("Hydrogen"));
        assert!(rendered.contains("18.015"));
        assert!(rendered.contains("15.999"));
    }
}
