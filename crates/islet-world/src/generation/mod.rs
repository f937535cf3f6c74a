mod base;
mod heightmap;
mod layering;
mod ores;
mod shoreline;
mod spawn;
mod trees;

use islet_chunk::VoxelGrid;
use islet_structures::TreePlacer;

use crate::player::Player;
use crate::profile::{GenStage, GenerationReport, StageTimings};
use crate::random::RandomSource;

pub use self::base::write_base_layers;
pub use self::heightmap::{CoarseHeightmap, HeightField, bilinear};
pub use self::layering::{layer_column, write_terrain};
pub use self::ores::{OreStats, seed_ores};
pub use self::shoreline::apply_shoreline;
pub use self::spawn::{SpawnPoint, resolve_spawn};
pub use self::trees::{TreeStats, plant_site, scatter_trees};

/// Builds a natural world into `grid` and places `player` on it.
///
/// Stages run once, in order, each reading what the previous ones wrote.
/// The grid is expected to be all air; running this twice on the same grid
/// compounds sand, trees, and ores.
pub fn generate_natural(
    grid: &mut VoxelGrid,
    player: &mut Player,
    rng: &mut impl RandomSource,
    trees: &mut impl TreePlacer,
) -> GenerationReport {
    let mut timings = StageTimings::default();

    timings.time(GenStage::BaseLayers, || write_base_layers(grid));

    let coarse = timings.time(GenStage::Heightmap, || {
        CoarseHeightmap::generate(grid.size(), rng)
    });
    log::debug!("coarse heightmap {0}x{0}", coarse.size());

    let field = HeightField::new(&coarse, grid.height());
    let grass_columns = timings.time(GenStage::Terrain, || write_terrain(grid, &field));
    log::debug!("terrain layered, {} grass columns", grass_columns);

    let sand_converted = timings.time(GenStage::Shoreline, || apply_shoreline(grid));
    log::debug!("shoreline converted {} voxels to sand", sand_converted);

    let tree_stats = timings.time(GenStage::Trees, || scatter_trees(grid, rng, trees));
    log::debug!(
        "trees planted {} of {} attempts",
        tree_stats.planted.len(),
        tree_stats.attempts
    );

    let ore_stats = timings.time(GenStage::Ores, || seed_ores(grid, rng));
    log::debug!(
        "ores: {} coal, {} iron from {} stone",
        ore_stats.coal,
        ore_stats.iron,
        ore_stats.stone_seen
    );

    let spawn = timings.time(GenStage::Spawn, || resolve_spawn(grid, player));

    GenerationReport {
        seed: None,
        timings,
        grass_columns,
        sand_converted,
        trees: tree_stats,
        ores: ore_stats,
        spawn,
    }
}
