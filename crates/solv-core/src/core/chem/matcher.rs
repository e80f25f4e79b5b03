//! Functional-group matching over the molecular graph.
//!
//! The classifier consumes matchers only through the [`FunctionalGroupMatcher`]
//! trait; [`GroupCatalog`] is the built-in implementation, detecting groups by
//! local atom-neighborhood inspection rather than full substructure search.

use super::element::{self, CARBON, CHLORINE, NITROGEN, OXYGEN, SULFUR};
use super::groups::{GroupLabel, GroupMatch};
use super::molecule::{BondOrder, Molecule};

/// A source of functional-group match records for parsed structures.
pub trait FunctionalGroupMatcher {
    /// Returns every functional-group occurrence found in the molecule.
    ///
    /// An empty result means the molecule carries none of the groups this
    /// matcher knows about.
    fn find_matches(&self, molecule: &Molecule) -> Vec<GroupMatch>;
}

/// The built-in functional-group catalog.
///
/// Detects, one record per occurrence: alcohols, aldehydes, amines,
/// carboxylic acids, carbon-bound halogens, nitro groups, sulfonyl chlorides,
/// and terminal alkynes.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupCatalog;

impl GroupCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl FunctionalGroupMatcher for GroupCatalog {
    fn find_matches(&self, molecule: &Molecule) -> Vec<GroupMatch> {
        let mut matches = Vec::new();
        for idx in 0..molecule.atom_count() {
            match_alcohol(molecule, idx, &mut matches);
            match_carbon_groups(molecule, idx, &mut matches);
            match_amine(molecule, idx, &mut matches);
            match_nitro(molecule, idx, &mut matches);
            match_sulfonyl_chloride(molecule, idx, &mut matches);
            match_halogen(molecule, idx, &mut matches);
            match_terminal_alkyne(molecule, idx, &mut matches);
        }
        matches
    }
}

/// Whether the atom is a carbon with a double bond to a heteroatom (O, N, S).
fn is_carbonyl_like(molecule: &Molecule, idx: usize) -> bool {
    let atom = molecule.atom(idx);
    if atom.atomic_number != CARBON {
        return false;
    }
    molecule.neighbors(idx).iter().any(|&(neighbor, bond_idx)| {
        let n = molecule.atom(neighbor).atomic_number;
        matches!(n, OXYGEN | NITROGEN | SULFUR)
            && molecule.bond(bond_idx).order == BondOrder::Double
    })
}

fn has_double_bonded_oxygen(molecule: &Molecule, idx: usize) -> bool {
    molecule.neighbors(idx).iter().any(|&(neighbor, bond_idx)| {
        molecule.atom(neighbor).atomic_number == OXYGEN
            && molecule.bond(bond_idx).order == BondOrder::Double
    })
}

/// Hydroxyl oxygen on a non-carbonyl carbon.
fn match_alcohol(molecule: &Molecule, idx: usize, out: &mut Vec<GroupMatch>) {
    let atom = molecule.atom(idx);
    if atom.atomic_number != OXYGEN
        || atom.is_aromatic
        || atom.formal_charge != 0
        || atom.implicit_hydrogens == 0
        || molecule.degree(idx) != 1
    {
        return;
    }
    let (carbon, bond_idx) = molecule.neighbors(idx)[0];
    if molecule.atom(carbon).atomic_number == CARBON
        && molecule.bond(bond_idx).order == BondOrder::Single
        && !is_carbonyl_like(molecule, carbon)
    {
        out.push(GroupMatch::new(GroupLabel::Alcohol, vec![idx, carbon]));
    }
}

/// Carbonyl-centered groups: carboxylic acids and aldehydes.
fn match_carbon_groups(molecule: &Molecule, idx: usize, out: &mut Vec<GroupMatch>) {
    let atom = molecule.atom(idx);
    if atom.atomic_number != CARBON || atom.is_aromatic {
        return;
    }

    let mut double_oxygen = None;
    let mut single_oxygen = None;
    let mut single_nitrogen = false;
    for &(neighbor, bond_idx) in molecule.neighbors(idx) {
        let n = molecule.atom(neighbor).atomic_number;
        match (n, molecule.bond(bond_idx).order) {
            (OXYGEN, BondOrder::Double) => double_oxygen = Some(neighbor),
            (OXYGEN, BondOrder::Single) => single_oxygen = Some(neighbor),
            (NITROGEN, BondOrder::Single) => single_nitrogen = true,
            _ => {}
        }
    }

    let Some(double_oxygen) = double_oxygen else {
        return;
    };

    if let Some(hydroxyl) = single_oxygen {
        // C(=O)O-H is an acid; C(=O)O-C (ester) is not in the taxonomy.
        if molecule.atom(hydroxyl).implicit_hydrogens > 0 {
            out.push(GroupMatch::new(
                GroupLabel::CarboxylicAcid,
                vec![idx, double_oxygen, hydroxyl],
            ));
        }
        return;
    }

    // Terminal carbonyl with a hydrogen and no O/N substituent.
    if atom.implicit_hydrogens > 0 && !single_nitrogen {
        out.push(GroupMatch::new(
            GroupLabel::Aldehyde,
            vec![idx, double_oxygen],
        ));
    }
}

/// Neutral, non-aromatic nitrogen with only single bonds, excluding amides and
/// sulfonamides.
fn match_amine(molecule: &Molecule, idx: usize, out: &mut Vec<GroupMatch>) {
    let atom = molecule.atom(idx);
    if atom.atomic_number != NITROGEN || atom.is_aromatic || atom.formal_charge != 0 {
        return;
    }

    let all_single = molecule
        .neighbors(idx)
        .iter()
        .all(|&(_, bond_idx)| molecule.bond(bond_idx).order == BondOrder::Single);
    if !all_single {
        return;
    }

    for &(neighbor, _) in molecule.neighbors(idx) {
        let n = molecule.atom(neighbor).atomic_number;
        if (n == CARBON && is_carbonyl_like(molecule, neighbor))
            || (n == SULFUR && has_double_bonded_oxygen(molecule, neighbor))
        {
            return;
        }
    }

    out.push(GroupMatch::new(GroupLabel::Amine, vec![idx]));
}

/// Nitrogen bearing two terminal oxygens, in either the charge-separated or
/// the pentavalent drawing.
fn match_nitro(molecule: &Molecule, idx: usize, out: &mut Vec<GroupMatch>) {
    let atom = molecule.atom(idx);
    if atom.atomic_number != NITROGEN {
        return;
    }

    let mut terminal_oxygens = Vec::new();
    let mut has_double = false;
    for &(neighbor, bond_idx) in molecule.neighbors(idx) {
        if molecule.atom(neighbor).atomic_number == OXYGEN && molecule.degree(neighbor) == 1 {
            terminal_oxygens.push(neighbor);
            if molecule.bond(bond_idx).order == BondOrder::Double {
                has_double = true;
            }
        }
    }

    if terminal_oxygens.len() >= 2 && (has_double || atom.formal_charge == 1) {
        let mut atoms = vec![idx];
        atoms.extend(&terminal_oxygens[..2]);
        out.push(GroupMatch::new(GroupLabel::Nitro, atoms));
    }
}

/// S(=O)(=O)-Cl.
fn match_sulfonyl_chloride(molecule: &Molecule, idx: usize, out: &mut Vec<GroupMatch>) {
    if molecule.atom(idx).atomic_number != SULFUR {
        return;
    }

    let mut double_oxygens = 0;
    let mut chlorine = None;
    for &(neighbor, bond_idx) in molecule.neighbors(idx) {
        let n = molecule.atom(neighbor).atomic_number;
        let order = molecule.bond(bond_idx).order;
        if n == OXYGEN && order == BondOrder::Double {
            double_oxygens += 1;
        } else if n == CHLORINE && order == BondOrder::Single {
            chlorine = Some(neighbor);
        }
    }

    if double_oxygens >= 2 {
        if let Some(chlorine) = chlorine {
            out.push(GroupMatch::new(
                GroupLabel::SulfonylChloride,
                vec![idx, chlorine],
            ));
        }
    }
}

/// Halogen on a non-carbonyl carbon; halogens on sulfur (sulfonyl halides)
/// and on acyl carbons are not reported as plain halogens.
fn match_halogen(molecule: &Molecule, idx: usize, out: &mut Vec<GroupMatch>) {
    let atom = molecule.atom(idx);
    if !element::is_halogen(atom.atomic_number)
        || atom.formal_charge != 0
        || molecule.degree(idx) != 1
    {
        return;
    }
    let (carbon, bond_idx) = molecule.neighbors(idx)[0];
    if molecule.atom(carbon).atomic_number == CARBON
        && molecule.bond(bond_idx).order == BondOrder::Single
        && !is_carbonyl_like(molecule, carbon)
    {
        out.push(GroupMatch::new(GroupLabel::Halogen, vec![idx, carbon]));
    }
}

/// C#C where this end carries a hydrogen.
fn match_terminal_alkyne(molecule: &Molecule, idx: usize, out: &mut Vec<GroupMatch>) {
    let atom = molecule.atom(idx);
    if atom.atomic_number != CARBON || atom.implicit_hydrogens == 0 {
        return;
    }
    for &(neighbor, bond_idx) in molecule.neighbors(idx) {
        if molecule.atom(neighbor).atomic_number == CARBON
            && molecule.bond(bond_idx).order == BondOrder::Triple
        {
            out.push(GroupMatch::new(
                GroupLabel::TerminalAlkyne,
                vec![idx, neighbor],
            ));
        }
    }
}
