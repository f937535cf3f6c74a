use islet_blocks::Block;
use islet_chunk::VoxelGrid;

use crate::random::RandomSource;
use crate::worldgen::{COAL_ROLL, IRON_ROLL, ORE_ROLL_MAX};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OreStats {
    pub stone_seen: usize,
    pub coal: usize,
    pub iron: usize,
}

/// Rolls once per stone voxel (y outer, then x, then z) and converts roughly
/// one in twenty to coal and one in twenty to iron.
pub fn seed_ores(grid: &mut VoxelGrid, rng: &mut impl RandomSource) -> OreStats {
    let mut stats = OreStats::default();
    let size = grid.size();
    for y in 1..grid.height() {
        for x in 0..size {
            for z in 0..size {
                if grid.get(y, x, z) != Block::Stone {
                    continue;
                }
                stats.stone_seen += 1;
                match rng.next_in_range(0, ORE_ROLL_MAX) {
                    COAL_ROLL => {
                        grid.set(y, x, z, Block::CoalOre);
                        stats.coal += 1;
                    }
                    IRON_ROLL => {
                        grid.set(y, x, z, Block::IronOre);
                        stats.iron += 1;
                    }
                    _ => {}
                }
            }
        }
    }
    stats
}
