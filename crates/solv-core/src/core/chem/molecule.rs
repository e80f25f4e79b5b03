/// Bond order classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Integer contribution of this bond to an atom's valence.
    ///
    /// Aromatic bonds count as one sigma bond here; the aromatic pi system is
    /// accounted for separately during implicit-hydrogen assignment.
    pub fn valence_contribution(self) -> usize {
        match self {
            BondOrder::Single | BondOrder::Aromatic => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }
}

/// An atom node in the molecular graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MolAtom {
    pub atomic_number: u8,
    pub formal_charge: i8,
    pub is_aromatic: bool,
    /// Hydrogens not represented as explicit graph nodes.
    pub implicit_hydrogens: u8,
}

/// An edge between two atoms, indexed into the molecule's atom list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1: usize,
    pub atom2: usize,
    pub order: BondOrder,
}

/// An in-memory structural graph derived from a component identifier.
///
/// The graph is read-only after construction: atoms and bonds are fixed, and
/// the adjacency list is built once in [`Molecule::new`]. All functional-group
/// matching walks this structure without mutating it.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    atoms: Vec<MolAtom>,
    bonds: Vec<Bond>,
    /// adjacency[atom_idx] = (neighbor_atom_idx, bond_idx) pairs
    adjacency: Vec<Vec<(usize, usize)>>,
}

impl Molecule {
    /// Builds a molecule from its atoms and bonds, constructing the adjacency
    /// list eagerly.
    pub fn new(atoms: Vec<MolAtom>, bonds: Vec<Bond>) -> Self {
        let mut adjacency = vec![Vec::new(); atoms.len()];
        for (bond_idx, bond) in bonds.iter().enumerate() {
            adjacency[bond.atom1].push((bond.atom2, bond_idx));
            adjacency[bond.atom2].push((bond.atom1, bond_idx));
        }
        Self {
            atoms,
            bonds,
            adjacency,
        }
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn atom(&self, idx: usize) -> &MolAtom {
        &self.atoms[idx]
    }

    pub fn atoms(&self) -> &[MolAtom] {
        &self.atoms
    }

    pub fn bond(&self, idx: usize) -> &Bond {
        &self.bonds[idx]
    }

    /// `(neighbor_atom_idx, bond_idx)` pairs for an atom.
    pub fn neighbors(&self, atom_idx: usize) -> &[(usize, usize)] {
        &self.adjacency[atom_idx]
    }

    /// Number of explicit bonds on an atom.
    pub fn degree(&self, atom_idx: usize) -> usize {
        self.adjacency[atom_idx].len()
    }

    /// The bond connecting two atoms, if one exists.
    pub fn bond_between(&self, a: usize, b: usize) -> Option<&Bond> {
        self.adjacency[a]
            .iter()
            .find(|&&(neighbor, _)| neighbor == b)
            .map(|&(_, bond_idx)| &self.bonds[bond_idx])
    }

    /// Number of atoms heavier than hydrogen.
    pub fn heavy_atom_count(&self) -> usize {
        self.atoms
            .iter()
            .filter(|a| a.atomic_number != crate::core::chem::element::HYDROGEN)
            .count()
    }
}
