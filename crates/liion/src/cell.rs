use crate::{
    constants::PhysicalConstants,
    error::Error,
    layout::{classify, Node, StateLayout},
    region::{Material, Region, RegionParams},
};

/// Smallest grid that can hold both collectors and two distinct interface nodes.
pub const MIN_GRID: usize = 4;

/// Grid nodes closest to the anode/separator and separator/cathode boundaries.
///
/// Each index is `floor(fraction * grid)`, where `fraction` is the cumulative length up to the
/// boundary divided by the total cell length. Fails unless `0 < sep_index < cath_index < grid - 1`.
pub fn boundary_indices(
    l_a: f64,
    l_s: f64,
    l_c: f64,
    grid: usize,
) -> Result<(usize, usize), Error> {
    if grid < MIN_GRID {
        return Err(Error::GridTooSmall { grid });
    }
    for (region, length) in [
        (Region::Anode, l_a),
        (Region::Separator, l_s),
        (Region::Cathode, l_c),
    ] {
        // also rejects NaN
        if !(length > 0.0) {
            return Err(Error::NonPositiveLength { region, length });
        }
    }

    let total = l_a + l_s + l_c;
    let sep_index = (l_a / total * grid as f64).floor() as usize;
    let cath_index = ((l_a + l_s) / total * grid as f64).floor() as usize;

    if sep_index == 0 || sep_index >= cath_index || cath_index >= grid - 1 {
        return Err(Error::DegenerateBoundaries {
            sep_index,
            cath_index,
            grid,
        });
    }
    Ok((sep_index, cath_index))
}

/// Everything the residual needs: the three regions, the physical constants, and the grid
/// layout with its precomputed node classes. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct CellParams {
    pub anode: RegionParams,
    pub separator: RegionParams,
    pub cathode: RegionParams,
    pub consts: PhysicalConstants,
    pub layout: StateLayout,
    pub sep_index: usize,
    pub cath_index: usize,
    nodes: Vec<Node>,
}

impl CellParams {
    /// Assemble a cell from three regions derived for the same grid.
    ///
    /// The regions must be passed in cell order; their `region` tags are not required to match
    /// (a symmetric cell uses anode material on both sides). Porosity must lie in `(0, 1]`, and
    /// strictly below `1` in the electrodes. Electrodes also need a positive conductivity, solid
    /// diffusivity, capacity and particle radius, plus an open-circuit fit.
    pub fn new(
        anode: RegionParams,
        separator: RegionParams,
        cathode: RegionParams,
        consts: PhysicalConstants,
    ) -> Result<Self, Error> {
        let grid = anode.grid;
        if grid < MIN_GRID {
            return Err(Error::GridTooSmall { grid });
        }

        let slots = [
            (Region::Anode, &anode),
            (Region::Separator, &separator),
            (Region::Cathode, &cathode),
        ];
        for (region, params) in slots {
            if params.grid != grid {
                return Err(Error::RegionMismatch {
                    region,
                    expected: grid,
                    found: params.grid,
                });
            }
            if !(params.eps > 0.0 && params.eps <= 1.0) {
                return Err(Error::InvalidPorosity {
                    region,
                    eps: params.eps,
                });
            }
            if region == Region::Separator {
                continue;
            }
            // a fully porous electrode has no solid left to conduct
            if params.eps >= 1.0 {
                return Err(Error::InvalidPorosity {
                    region,
                    eps: params.eps,
                });
            }
            if !(params.sigma > 0.0) {
                return Err(Error::NonPositiveConductivity { region });
            }
            if !(params.diff_coeff_solid > 0.0) {
                return Err(Error::NonPositiveSolidDiffusivity { region });
            }
            if !(params.c_s_max > 0.0) {
                return Err(Error::ZeroSolidCapacity { region });
            }
            if !(params.radius > 0.0) {
                return Err(Error::NonPositiveRadius { region });
            }
            if params.ocp.is_none() {
                return Err(Error::MissingOpenCircuit { region });
            }
        }

        let (sep_index, cath_index) = boundary_indices(anode.l, separator.l, cathode.l, grid)?;
        log::debug!(
            "cell assembled on {grid} nodes: sep_index={sep_index}, cath_index={cath_index}, I={}",
            consts.applied_current
        );

        Ok(Self {
            anode,
            separator,
            cathode,
            consts,
            layout: StateLayout::new(grid),
            sep_index,
            cath_index,
            nodes: classify(grid, sep_index, cath_index),
        })
    }

    /// Derive the three regions from raw materials and assemble the cell.
    pub fn from_materials(
        anode: &Material,
        separator: &Material,
        cathode: &Material,
        grid: usize,
        consts: PhysicalConstants,
    ) -> Result<Self, Error> {
        Self::new(
            RegionParams::new(Region::Anode, anode, grid, &consts),
            RegionParams::new(Region::Separator, separator, grid, &consts),
            RegionParams::new(Region::Cathode, cathode, grid, &consts),
            consts,
        )
    }

    /// The literature cell: graphite-like anode, polymer separator, oxide cathode.
    pub fn standard(grid: usize, consts: PhysicalConstants) -> Result<Self, Error> {
        Self::from_materials(
            &Material::anode(),
            &Material::separator(),
            &Material::cathode(),
            grid,
            consts,
        )
    }

    pub fn grid(&self) -> usize {
        self.layout.grid
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn region(&self, region: Region) -> &RegionParams {
        match region {
            Region::Anode => &self.anode,
            Region::Separator => &self.separator,
            Region::Cathode => &self.cathode,
        }
    }

    /// Parameters of the electrode owning the solid phase at node `p`, if any.
    pub fn electrode_at(&self, p: usize) -> Option<&RegionParams> {
        self.nodes[p].electrode().map(|region| self.region(region))
    }
}
