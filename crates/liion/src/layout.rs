//! Layout of the flat state vector and the per-node classification of the grid.

use std::ops::Range;

use nalgebra::{Dyn, Matrix, Storage, U1};

use crate::region::Region;

/// The five physical fields stored in the state vector, in storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Electrolyte concentration `c`
    Electrolyte,
    /// Solid-phase potential `phi1`
    SolidPotential,
    /// Electrolyte potential `phi2`
    ElectrolytePotential,
    /// Interfacial current density `j`
    CurrentDensity,
    /// Particle-surface solid concentration `c_s`
    SurfaceConcentration,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Electrolyte,
        Field::SolidPotential,
        Field::ElectrolytePotential,
        Field::CurrentDensity,
        Field::SurfaceConcentration,
    ];

    /// Position of the field's block in the state vector.
    pub fn block(self) -> usize {
        self as usize
    }

    pub fn from_block(block: usize) -> Option<Field> {
        Self::ALL.get(block).copied()
    }

    /// Whether the field's equations carry a time derivative.
    pub fn is_differential(self) -> bool {
        matches!(self, Field::Electrolyte | Field::SurfaceConcentration)
    }

    /// Whether the field must stay non-negative.
    pub fn is_non_negative(self) -> bool {
        matches!(self, Field::Electrolyte | Field::SurfaceConcentration)
    }
}

/// Maps `(field, position)` pairs to flat indices: five contiguous blocks of `grid` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateLayout {
    pub grid: usize,
}

impl StateLayout {
    pub fn new(grid: usize) -> Self {
        Self { grid }
    }

    pub fn len(&self) -> usize {
        Field::ALL.len() * self.grid
    }

    pub fn is_empty(&self) -> bool {
        self.grid == 0
    }

    #[inline]
    pub fn index(&self, field: Field, p: usize) -> usize {
        debug_assert!(p < self.grid);
        field.block() * self.grid + p
    }

    /// Inverse of [`StateLayout::index`]; `None` past the end of the vector.
    pub fn locate(&self, i: usize) -> Option<(Field, usize)> {
        if self.grid == 0 {
            return None;
        }
        Field::from_block(i / self.grid).map(|field| (field, i % self.grid))
    }

    pub fn field_range(&self, field: Field) -> Range<usize> {
        let start = field.block() * self.grid;
        start..start + self.grid
    }
}

/// Read-only field accessor over a state (or derivative) vector.
pub struct StateView<'a, S> {
    data: &'a Matrix<f64, Dyn, U1, S>,
    layout: StateLayout,
}

impl<'a, S> StateView<'a, S>
where
    S: Storage<f64, Dyn>,
{
    pub fn new(data: &'a Matrix<f64, Dyn, U1, S>, layout: StateLayout) -> Self {
        debug_assert_eq!(data.len(), layout.len());
        Self { data, layout }
    }

    #[inline]
    pub fn get(&self, field: Field, p: usize) -> f64 {
        self.data[self.layout.index(field, p)]
    }

    #[inline]
    pub fn c(&self, p: usize) -> f64 {
        self.get(Field::Electrolyte, p)
    }

    #[inline]
    pub fn phi1(&self, p: usize) -> f64 {
        self.get(Field::SolidPotential, p)
    }

    #[inline]
    pub fn phi2(&self, p: usize) -> f64 {
        self.get(Field::ElectrolytePotential, p)
    }

    #[inline]
    pub fn j(&self, p: usize) -> f64 {
        self.get(Field::CurrentDensity, p)
    }

    #[inline]
    pub fn c_s(&self, p: usize) -> f64 {
        self.get(Field::SurfaceConcentration, p)
    }
}

/// Position class of a grid node, fixed once the region boundaries are known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    /// `p == 0`
    AnodeCollector,
    /// `0 < p < sep_index`
    Anode,
    /// `p == sep_index`
    AnodeSeparator,
    /// `sep_index < p < cath_index`
    Separator,
    /// `p == cath_index`
    SeparatorCathode,
    /// `cath_index < p < grid - 1`
    Cathode,
    /// `p == grid - 1`
    CathodeCollector,
}

impl Node {
    /// The electrode whose solid phase is present at this node. Both interface nodes belong to
    /// their electrode; only the separator interior has no solid phase.
    pub fn electrode(self) -> Option<Region> {
        match self {
            Node::AnodeCollector | Node::Anode | Node::AnodeSeparator => Some(Region::Anode),
            Node::Separator => None,
            Node::SeparatorCathode | Node::Cathode | Node::CathodeCollector => {
                Some(Region::Cathode)
            }
        }
    }
}

/// Classify every node of a grid with the given boundary indices.
///
/// Expects `0 < sep_index < cath_index < grid - 1`, which [`crate::CellParams::new`] checks.
pub fn classify(grid: usize, sep_index: usize, cath_index: usize) -> Vec<Node> {
    (0..grid)
        .map(|p| match p {
            0 => Node::AnodeCollector,
            p if p < sep_index => Node::Anode,
            p if p == sep_index => Node::AnodeSeparator,
            p if p < cath_index => Node::Separator,
            p if p == cath_index => Node::SeparatorCathode,
            p if p + 1 < grid => Node::Cathode,
            _ => Node::CathodeCollector,
        })
        .collect()
}
