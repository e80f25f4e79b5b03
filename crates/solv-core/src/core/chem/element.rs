//! Element symbol lookup for the subset of the periodic table that occurs in
//! small-molecule SMILES.

use phf::phf_map;

/// Atomic numbers of elements the matcher dispatches on frequently.
pub const HYDROGEN: u8 = 1;
pub const CARBON: u8 = 6;
pub const NITROGEN: u8 = 7;
pub const OXYGEN: u8 = 8;
pub const FLUORINE: u8 = 9;
pub const SULFUR: u8 = 16;
pub const CHLORINE: u8 = 17;
pub const BROMINE: u8 = 35;
pub const IODINE: u8 = 53;

static SYMBOL_TO_ATOMIC_NUMBER: phf::Map<&'static str, u8> = phf_map! {
    "H" => 1,
    "B" => 5,
    "C" => 6,
    "N" => 7,
    "O" => 8,
    "F" => 9,
    "Na" => 11,
    "Mg" => 12,
    "Si" => 14,
    "P" => 15,
    "S" => 16,
    "Cl" => 17,
    "K" => 19,
    "Ca" => 20,
    "Zn" => 30,
    "Se" => 34,
    "Br" => 35,
    "I" => 53,
};

/// Looks up the atomic number for an element symbol.
///
/// Returns `None` for symbols outside the supported subset.
pub fn atomic_number(symbol: &str) -> Option<u8> {
    SYMBOL_TO_ATOMIC_NUMBER.get(symbol).copied()
}

/// Whether the atomic number is one of the four halogens the functional-group
/// taxonomy recognizes.
pub fn is_halogen(atomic_number: u8) -> bool {
    matches!(atomic_number, FLUORINE | CHLORINE | BROMINE | IODINE)
}

/// Standard valence used for implicit-hydrogen assignment, for elements of the
/// SMILES organic subset.
pub fn standard_valence(atomic_number: u8) -> Option<usize> {
    match atomic_number {
        5 => Some(3),
        6 => Some(4),
        7 => Some(3),
        8 => Some(2),
        15 => Some(3),
        16 => Some(2),
        9 | 17 | 35 | 53 => Some(1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_symbols_resolve() {
        assert_eq!(atomic_number("C"), Some(6));
        assert_eq!(atomic_number("Cl"), Some(17));
        assert_eq!(atomic_number("Br"), Some(35));
    }

    #[test]
    fn unknown_symbols_return_none() {
        assert_eq!(atomic_number("Xx"), None);
        assert_eq!(atomic_number(""), None);
        assert_eq!(atomic_number("c"), None);
    }

    #[test]
    fn halogen_predicate_covers_exactly_four_elements() {
        assert!(is_halogen(FLUORINE));
        assert!(is_halogen(CHLORINE));
        assert!(is_halogen(BROMINE));
        assert!(is_halogen(IODINE));
        assert!(!is_halogen(OXYGEN));
        assert!(!is_halogen(SULFUR));
    }

    #[test]
    fn standard_valences_match_the_organic_subset() {
        assert_eq!(standard_valence(CARBON), Some(4));
        assert_eq!(standard_valence(NITROGEN), Some(3));
        assert_eq!(standard_valence(OXYGEN), Some(2));
        assert_eq!(standard_valence(CHLORINE), Some(1));
        assert_eq!(standard_valence(30), None);
    }
}
