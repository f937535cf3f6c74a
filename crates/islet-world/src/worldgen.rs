//! Fixed generation parameters.

/// Top of the water slab; heights 1..=WATER_LEVEL start out as water.
pub const WATER_LEVEL: usize = 5;

/// Spacing, in voxels, between coarse heightmap samples.
pub const GRID_STEP: usize = 6;

/// Number of tree placements attempted per world.
pub const TREE_ATTEMPTS: usize = 14;

/// Inclusive range of the base term of a coarse sample.
pub const COARSE_LOW: (i32, i32) = (3, 10);
/// Inclusive range of the variation term of a coarse sample.
pub const COARSE_HIGH: (i32, i32) = (0, 4);

/// Ore roll is drawn from 0..=ORE_ROLL_MAX per stone voxel.
pub const ORE_ROLL_MAX: i32 = 19;
pub const COAL_ROLL: i32 = 0;
pub const IRON_ROLL: i32 = 1;

/// Distance (in x and z) the shoreline pass looks for water.
pub const SHORE_RADIUS: i32 = 2;

/// Keeps tree roots away from the world edge.
pub const TREE_MARGIN: usize = 2;

/// Coarse lattice side length for a world `world_size` voxels wide. Two extra
/// samples guarantee every column has a right/bottom neighbour to blend with.
#[inline]
pub const fn coarse_grid_size(world_size: usize) -> usize {
    world_size / GRID_STEP + 2
}

/// Coarse lattice side length for the default world.
pub const GRID_SIZE: usize = coarse_grid_size(islet_chunk::WORLD_SIZE);
