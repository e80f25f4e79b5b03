//! SMILES line-notation parser.
//!
//! Covers the organic subset, bracket atoms with charge and explicit hydrogen
//! counts, branches, ring-bond closures (including `%nn`), bond-order symbols,
//! aromatic lowercase atoms, and dot-separated fragments. Stereochemistry
//! markers are consumed and ignored. Malformed input yields a [`SmilesError`];
//! the parser never panics.

use super::element;
use super::molecule::{Bond, BondOrder, MolAtom, Molecule};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SmilesError {
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("Unknown element symbol '{0}'")]
    UnknownElement(String),

    #[error("Unexpected end of input")]
    UnexpectedEnd,

    #[error("Unmatched ring-bond closure(s): {0:?}")]
    UnclosedRing(Vec<u16>),

    #[error("{0} unmatched '(' in input")]
    UnbalancedBranch(usize),
}

/// Parses a SMILES string into a [`Molecule`].
pub fn parse_smiles(smiles: &str) -> Result<Molecule, SmilesError> {
    let mut parser = Parser::new(smiles);
    parser.run()?;
    parser.finish()
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    atoms: Vec<MolAtom>,
    bonds: Vec<Bond>,
    /// Atoms whose hydrogen count was given explicitly in brackets.
    explicit_h: Vec<bool>,
    /// ring_closures[digit] = (atom_idx, pending bond order at the opening)
    ring_closures: BTreeMap<u16, (usize, Option<BondOrder>)>,
    branch_stack: Vec<usize>,
    prev_atom: Option<usize>,
    pending_bond: Option<BondOrder>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            atoms: Vec::new(),
            bonds: Vec::new(),
            explicit_h: Vec::new(),
            ring_closures: BTreeMap::new(),
            branch_stack: Vec::new(),
            prev_atom: None,
            pending_bond: None,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn run(&mut self) -> Result<(), SmilesError> {
        while let Some(ch) = self.peek() {
            match ch {
                b'(' => {
                    self.advance();
                    if let Some(prev) = self.prev_atom {
                        self.branch_stack.push(prev);
                    }
                }
                b')' => {
                    self.advance();
                    self.prev_atom = self.branch_stack.pop();
                    self.pending_bond = None;
                }
                b'-' => {
                    self.advance();
                    self.pending_bond = Some(BondOrder::Single);
                }
                b'=' => {
                    self.advance();
                    self.pending_bond = Some(BondOrder::Double);
                }
                b'#' => {
                    self.advance();
                    self.pending_bond = Some(BondOrder::Triple);
                }
                b':' => {
                    self.advance();
                    self.pending_bond = Some(BondOrder::Aromatic);
                }
                b'/' | b'\\' => {
                    // cis/trans markers carry no connectivity
                    self.advance();
                }
                b'%' => {
                    self.advance();
                    let ring = self.two_digit_ring_number()?;
                    self.ring_closure(ring)?;
                }
                b'[' => self.bracket_atom()?,
                b'.' => {
                    self.advance();
                    self.prev_atom = None;
                    self.pending_bond = None;
                }
                ch if ch.is_ascii_digit() => {
                    self.advance();
                    self.ring_closure((ch - b'0') as u16)?;
                }
                ch if is_organic_subset_start(ch) => self.organic_atom()?,
                ch => {
                    return Err(SmilesError::UnexpectedCharacter {
                        character: ch as char,
                        position: self.pos,
                    });
                }
            }
        }
        Ok(())
    }

    fn organic_atom(&mut self) -> Result<(), SmilesError> {
        let start = self.pos;
        let first = self.advance().ok_or(SmilesError::UnexpectedEnd)?;
        let is_aromatic = first.is_ascii_lowercase();
        let upper = first.to_ascii_uppercase();

        // Two-letter organic-subset symbols are never aromatic.
        let symbol = match (upper, self.peek()) {
            (b'B', Some(b'r')) if !is_aromatic => {
                self.advance();
                "Br".to_string()
            }
            (b'C', Some(b'l')) if !is_aromatic => {
                self.advance();
                "Cl".to_string()
            }
            _ => (upper as char).to_string(),
        };

        let atomic_number = element::atomic_number(&symbol).ok_or_else(|| {
            SmilesError::UnexpectedCharacter {
                character: first as char,
                position: start,
            }
        })?;

        self.push_atom(
            MolAtom {
                atomic_number,
                formal_charge: 0,
                is_aromatic,
                implicit_hydrogens: 0, // assigned in finish()
            },
            false,
        );
        Ok(())
    }

    fn bracket_atom(&mut self) -> Result<(), SmilesError> {
        self.advance(); // consume '['

        // Isotope labels are accepted and discarded.
        let _ = self.number();

        let first = self.advance().ok_or(SmilesError::UnexpectedEnd)?;
        if !first.is_ascii_alphabetic() {
            return Err(SmilesError::UnexpectedCharacter {
                character: first as char,
                position: self.pos - 1,
            });
        }
        let is_aromatic = first.is_ascii_lowercase();
        let upper = first.to_ascii_uppercase();

        let symbol = match self.peek() {
            Some(next) if next.is_ascii_lowercase() => {
                let two_letter = format!("{}{}", upper as char, next as char);
                if element::atomic_number(&two_letter).is_some() {
                    self.advance();
                    two_letter
                } else {
                    (upper as char).to_string()
                }
            }
            _ => (upper as char).to_string(),
        };

        let atomic_number = element::atomic_number(&symbol)
            .ok_or(SmilesError::UnknownElement(symbol))?;

        while self.peek() == Some(b'@') {
            self.advance();
        }

        let mut hydrogens = 0u8;
        if self.peek() == Some(b'H') {
            self.advance();
            hydrogens = match self.peek() {
                Some(d) if d.is_ascii_digit() => {
                    self.advance();
                    d - b'0'
                }
                _ => 1,
            };
        }

        let charge = self.charge();

        if self.advance() != Some(b']') {
            return Err(SmilesError::UnexpectedEnd);
        }

        self.push_atom(
            MolAtom {
                atomic_number,
                formal_charge: charge,
                is_aromatic,
                implicit_hydrogens: hydrogens,
            },
            true,
        );
        Ok(())
    }

    fn charge(&mut self) -> i8 {
        let sign: i8 = match self.peek() {
            Some(b'+') => 1,
            Some(b'-') => -1,
            _ => return 0,
        };
        self.advance();

        match self.peek() {
            Some(d) if d.is_ascii_digit() => {
                self.advance();
                sign * (d - b'0') as i8
            }
            Some(s) if s == b'+' || s == b'-' => {
                // ++ / -- shorthand
                let mut magnitude = 1i8;
                while self.peek() == Some(s) {
                    self.advance();
                    magnitude += 1;
                }
                sign * magnitude
            }
            _ => sign,
        }
    }

    fn number(&mut self) -> Option<u32> {
        let mut value = 0u32;
        let mut found = false;
        while let Some(d) = self.peek() {
            if d.is_ascii_digit() {
                self.advance();
                value = value * 10 + (d - b'0') as u32;
                found = true;
            } else {
                break;
            }
        }
        found.then_some(value)
    }

    fn two_digit_ring_number(&mut self) -> Result<u16, SmilesError> {
        let d1 = self.advance().ok_or(SmilesError::UnexpectedEnd)?;
        let d2 = self.advance().ok_or(SmilesError::UnexpectedEnd)?;
        if !d1.is_ascii_digit() || !d2.is_ascii_digit() {
            return Err(SmilesError::UnexpectedCharacter {
                character: d1 as char,
                position: self.pos - 2,
            });
        }
        Ok((d1 - b'0') as u16 * 10 + (d2 - b'0') as u16)
    }

    fn ring_closure(&mut self, ring: u16) -> Result<(), SmilesError> {
        let current = self.prev_atom.ok_or(SmilesError::UnexpectedEnd)?;

        if let Some((open_atom, open_bond)) = self.ring_closures.remove(&ring) {
            let both_aromatic =
                self.atoms[open_atom].is_aromatic && self.atoms[current].is_aromatic;
            let order = self
                .pending_bond
                .take()
                .or(open_bond)
                .unwrap_or(if both_aromatic {
                    BondOrder::Aromatic
                } else {
                    BondOrder::Single
                });
            self.bonds.push(Bond {
                atom1: open_atom,
                atom2: current,
                order,
            });
        } else {
            self.ring_closures
                .insert(ring, (current, self.pending_bond.take()));
        }
        Ok(())
    }

    fn push_atom(&mut self, atom: MolAtom, explicit_h: bool) {
        let idx = self.atoms.len();
        let is_aromatic = atom.is_aromatic;
        self.atoms.push(atom);
        self.explicit_h.push(explicit_h);

        if let Some(prev) = self.prev_atom {
            let both_aromatic = self.atoms[prev].is_aromatic && is_aromatic;
            let order = self.pending_bond.take().unwrap_or(if both_aromatic {
                BondOrder::Aromatic
            } else {
                BondOrder::Single
            });
            self.bonds.push(Bond {
                atom1: prev,
                atom2: idx,
                order,
            });
        }
        self.pending_bond = None;
        self.prev_atom = Some(idx);
    }

    fn finish(mut self) -> Result<Molecule, SmilesError> {
        if !self.ring_closures.is_empty() {
            return Err(SmilesError::UnclosedRing(
                self.ring_closures.keys().copied().collect(),
            ));
        }
        if !self.branch_stack.is_empty() {
            return Err(SmilesError::UnbalancedBranch(self.branch_stack.len()));
        }
        self.assign_implicit_hydrogens();
        Ok(Molecule::new(self.atoms, self.bonds))
    }

    /// Fills hydrogen counts for organic-subset atoms from standard valences.
    ///
    /// Bracket atoms state their hydrogen count explicitly and are skipped.
    /// Aromatic atoms donate one electron to the pi system, leaving one less
    /// slot for sigma bonds.
    fn assign_implicit_hydrogens(&mut self) {
        for idx in 0..self.atoms.len() {
            if self.explicit_h[idx] {
                continue;
            }
            let atom = &self.atoms[idx];
            let Some(valence) = element::standard_valence(atom.atomic_number) else {
                continue;
            };

            let available = if atom.is_aromatic {
                valence.saturating_sub(1)
            } else {
                valence
            };
            let used: usize = self
                .bonds
                .iter()
                .filter(|b| b.atom1 == idx || b.atom2 == idx)
                .map(|b| b.order.valence_contribution())
                .sum();

            if available > used {
                self.atoms[idx].implicit_hydrogens = (available - used) as u8;
            }
        }
    }
}

fn is_organic_subset_start(ch: u8) -> bool {
    matches!(
        ch,
        b'B' | b'C' | b'N' | b'O' | b'P' | b'S' | b'F' | b'I'
            | b'b' | b'c' | b'n' | b'o' | b'p' | b's'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chem::element::{CARBON, NITROGEN, OXYGEN};

    #[test]
    fn parses_water() {
        let mol = parse_smiles("O").unwrap();
        assert_eq!(mol.atom_count(), 1);
        assert_eq!(mol.atom(0).atomic_number, OXYGEN);
        assert_eq!(mol.atom(0).implicit_hydrogens, 2);
    }

    #[test]
    fn parses_ethanol_with_implicit_hydrogens() {
        let mol = parse_smiles("CCO").unwrap();
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.bond_count(), 2);
        assert_eq!(mol.atom(0).implicit_hydrogens, 3);
        assert_eq!(mol.atom(1).implicit_hydrogens, 2);
        assert_eq!(mol.atom(2).implicit_hydrogens, 1);
    }

    #[test]
    fn parses_acetic_acid_carbonyl() {
        let mol = parse_smiles("CC(=O)O").unwrap();
        assert_eq!(mol.atom_count(), 4);
        assert_eq!(mol.bond_between(1, 2).unwrap().order, BondOrder::Double);
        assert_eq!(mol.bond_between(1, 3).unwrap().order, BondOrder::Single);
        assert_eq!(mol.atom(1).implicit_hydrogens, 0);
        assert_eq!(mol.atom(3).implicit_hydrogens, 1);
    }

    #[test]
    fn parses_branches() {
        let mol = parse_smiles("CC(C)C").unwrap();
        assert_eq!(mol.atom_count(), 4);
        assert_eq!(mol.degree(1), 3);
    }

    #[test]
    fn parses_benzene_ring() {
        let mol = parse_smiles("c1ccccc1").unwrap();
        assert_eq!(mol.atom_count(), 6);
        assert_eq!(mol.bond_count(), 6);
        for idx in 0..6 {
            assert!(mol.atom(idx).is_aromatic);
            assert_eq!(mol.atom(idx).implicit_hydrogens, 1);
        }
    }

    #[test]
    fn parses_two_digit_ring_closures() {
        let mol = parse_smiles("C%12CCCCC%12").unwrap();
        assert_eq!(mol.atom_count(), 6);
        assert_eq!(mol.bond_count(), 6);
    }

    #[test]
    fn parses_two_letter_organic_symbols() {
        let mol = parse_smiles("CCCl").unwrap();
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.atom(2).atomic_number, 17);
        assert_eq!(mol.atom(2).implicit_hydrogens, 0);
    }

    #[test]
    fn parses_bracket_atom_with_charge_and_hydrogens() {
        let mol = parse_smiles("[NH4+]").unwrap();
        assert_eq!(mol.atom_count(), 1);
        assert_eq!(mol.atom(0).atomic_number, NITROGEN);
        assert_eq!(mol.atom(0).formal_charge, 1);
        assert_eq!(mol.atom(0).implicit_hydrogens, 4);
    }

    #[test]
    fn parses_nitro_group_charges() {
        let mol = parse_smiles("C[N+](=O)[O-]").unwrap();
        assert_eq!(mol.atom_count(), 4);
        assert_eq!(mol.atom(1).formal_charge, 1);
        assert_eq!(mol.atom(3).formal_charge, -1);
    }

    #[test]
    fn parses_triple_bond() {
        let mol = parse_smiles("CC#C").unwrap();
        assert_eq!(mol.bond_between(1, 2).unwrap().order, BondOrder::Triple);
        assert_eq!(mol.atom(2).implicit_hydrogens, 1);
    }

    #[test]
    fn dot_separates_fragments() {
        let mol = parse_smiles("C.C").unwrap();
        assert_eq!(mol.atom_count(), 2);
        assert_eq!(mol.bond_count(), 0);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            parse_smiles("C("),
            Err(SmilesError::UnbalancedBranch(1))
        ));
        assert!(matches!(
            parse_smiles("C1CC"),
            Err(SmilesError::UnclosedRing(_))
        ));
        assert!(matches!(parse_smiles("["), Err(SmilesError::UnexpectedEnd)));
        assert!(matches!(
            parse_smiles("C$C"),
            Err(SmilesError::UnexpectedCharacter { character: '$', .. })
        ));
        assert!(matches!(
            parse_smiles("[Xx]"),
            Err(SmilesError::UnknownElement(_))
        ));
    }

    #[test]
    fn carbon_atom_constant_sanity() {
        let mol = parse_smiles("C").unwrap();
        assert_eq!(mol.atom(0).atomic_number, CARBON);
        assert_eq!(mol.atom(0).implicit_hydrogens, 4);
    }
}
