use islet_blocks::Block;
use islet_chunk::VoxelGrid;
use islet_structures::TreePlacer;

use crate::random::RandomSource;
use crate::worldgen::{TREE_ATTEMPTS, TREE_MARGIN};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub attempts: usize,
    /// Roots handed to the placer, as (x, y, z) of the air voxel above ground.
    pub planted: Vec<(usize, usize, usize)>,
}

impl TreeStats {
    #[inline]
    pub fn skipped(&self) -> usize {
        self.attempts - self.planted.len()
    }
}

/// Attempts `TREE_ATTEMPTS` placements on random grass columns. A failed
/// attempt is dropped, not retried.
pub fn scatter_trees(
    grid: &mut VoxelGrid,
    rng: &mut impl RandomSource,
    placer: &mut impl TreePlacer,
) -> TreeStats {
    let mut stats = TreeStats {
        attempts: TREE_ATTEMPTS,
        planted: Vec::with_capacity(TREE_ATTEMPTS),
    };
    // Roots land in [margin, size - 1 - margin].
    let span = (grid.size() - 2 * TREE_MARGIN) as u32;
    for _ in 0..TREE_ATTEMPTS {
        let x = TREE_MARGIN + (rng.next_raw() % span) as usize;
        let z = TREE_MARGIN + (rng.next_raw() % span) as usize;
        if let Some(y) = plant_site(grid, x, z) {
            placer.add_tree(grid, x, y + 1, z);
            // the trunk claims the ground it stands on
            grid.set(y, x, z, Block::Dirt);
            stats.planted.push((x, y + 1, z));
        }
    }
    stats
}

/// Height of the grass voxel a tree can stand on in column (x, z), if any.
///
/// Scans down from `height - 2` through air, stopping at height 1.
pub fn plant_site(grid: &VoxelGrid, x: usize, z: usize) -> Option<usize> {
    let mut y = grid.height() - 2;
    while y > 1 && grid.get(y, x, z) == Block::Air {
        y -= 1;
    }
    if grid.get(y, x, z) != Block::Grass {
        return None;
    }
    if grid.get(y + 1, x, z) != Block::Air {
        return None;
    }
    Some(y)
}
