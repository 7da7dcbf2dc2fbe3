// src/model/oxides.rs

use std::collections::HashMap;
use std::sync::OnceLock;

/// Stoichiometric conversion from an element to its reporting oxide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    /// Conventional oxide formula, e.g. "Fe2O3".
    pub oxide: &'static str,
    /// Gravimetric factor: oxide mass per unit mass of the element.
    pub factor: f64,
}

/// Element -> reporting oxide, in atomic-number order.
/// Factors are the standard gravimetric values (molar mass of the oxide
/// divided by the molar mass of the element atoms it contains).
const CONVERSIONS: &[(&str, &str, f64)] = &[
    ("Na", "Na2O", 1.348),
    ("Mg", "MgO", 1.6583),
    ("Al", "Al2O3", 1.8895),
    ("Si", "SiO2", 2.1393),
    ("P", "P2O5", 2.291),
    ("S", "SO3", 2.499),
    ("Cl", "Cl2O7", 2.628),
    ("K", "K2O", 1.2047),
    ("Ca", "CaO", 1.3992),
    ("Sc", "Sc2O3", 1.533),
    ("Ti", "TiO2", 1.668),
    ("V", "V2O5", 1.785),
    ("Cr", "Cr2O3", 1.461),
    ("Mn", "MnO2", 1.582),
    ("Fe", "Fe2O3", 1.4297),
    ("Co", "CoO", 1.271),
    ("Ni", "NiO", 1.273),
    ("Cu", "CuO", 1.252),
    ("Zn", "ZnO", 1.245),
];

/// Symbols never offered for selection. Volatile or light elements the
/// method does not report against an oxide.
const EXCLUDED: &[&str] = &["H", "Li", "O", "Be", "C", "N"];

static INDEX: OnceLock<HashMap<&'static str, Conversion>> = OnceLock::new();

fn index() -> &'static HashMap<&'static str, Conversion> {
    INDEX.get_or_init(|| {
        CONVERSIONS
            .iter()
            .map(|&(element, oxide, factor)| (element, Conversion { oxide, factor }))
            .collect()
    })
}

/// Looks up the oxide conversion for an element symbol.
pub fn get_conversion(element: &str) -> Option<Conversion> {
    index().get(element).copied()
}

/// Every element offered in the selection grid, in table order.
pub fn selectable_elements() -> Vec<&'static str> {
    CONVERSIONS
        .iter()
        .map(|&(element, _, _)| element)
        .filter(|element| !EXCLUDED.contains(element))
        .collect()
}

/// True when the symbol has a conversion entry and is not excluded.
pub fn is_selectable(element: &str) -> bool {
    !EXCLUDED.contains(&element) && index().contains_key(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::elements::atomic_number;

    #[test]
    fn iron_and_silicon_use_standard_factors() {
        let fe = get_conversion("Fe").unwrap();
        assert_eq!(fe.oxide, "Fe2O3");
        assert!((fe.factor - 1.4297).abs() < 1e-9);

        let si = get_conversion("Si").unwrap();
        assert_eq!(si.oxide, "SiO2");
        assert!((si.factor - 2.1393).abs() < 1e-9);
    }

    #[test]
    fn unknown_symbol_has_no_conversion() {
        assert!(get_conversion("Xx").is_none());
        assert!(get_conversion("").is_none());
        assert!(!is_selectable("Xx"));
    }

    #[test]
    fn excluded_symbols_are_never_offered() {
        for symbol in EXCLUDED {
            assert!(!is_selectable(symbol), "{} should not be selectable", symbol);
            assert!(!selectable_elements().contains(symbol));
        }
        assert!(is_selectable("Fe"));
    }

    #[test]
    fn every_selectable_element_resolves() {
        let elements = selectable_elements();
        assert!(!elements.is_empty());
        for symbol in elements {
            let conv = get_conversion(symbol).unwrap();
            assert!(!conv.oxide.is_empty());
            // Oxides always weigh more than their metal content.
            assert!(conv.factor > 1.0, "{} factor {}", symbol, conv.factor);
        }
    }

    #[test]
    fn table_is_ordered_by_atomic_number() {
        let elements = selectable_elements();
        for pair in elements.windows(2) {
            let (a, b) = (atomic_number(pair[0]), atomic_number(pair[1]));
            assert!(a > 0 && b > 0);
            assert!(a < b, "{} should precede {}", pair[0], pair[1]);
        }
    }
}
