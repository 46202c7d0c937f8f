use ndarray::Array2;
use rand::prelude::*;

use crate::*;

/// Seam between board construction and placement strategy; tests construct
/// boards directly via [`Board::from_hazard_coords`] instead.
pub trait HazardGenerator {
    fn generate(self, config: BoardConfig) -> Board;
}

/// Bernoulli placement: every cell draws an independent uniform value in
/// `[0, 1)` and becomes hazardous when the draw falls below the configured
/// scarcity. The realized hazard count varies run to run and is only known
/// once the sweep finishes; nothing targets a fixed count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScarcityGenerator {
    seed: u64,
}

impl ScarcityGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl HazardGenerator for ScarcityGenerator {
    fn generate(self, config: BoardConfig) -> Board {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let scarcity = config.scarcity();

        let mut hazard_count: CellCount = 0;
        let mask = Array2::from_shape_simple_fn(config.size().to_nd_index(), || {
            let hazardous = rng.random::<f64>() < scarcity;
            if hazardous {
                hazard_count += 1;
            }
            hazardous
        });

        log::debug!(
            "generated {}x{} board, {} hazards at scarcity {}",
            config.size().0,
            config.size().1,
            hazard_count,
            scarcity
        );
        Board::from_parts(mask, hazard_count)
    }
}
