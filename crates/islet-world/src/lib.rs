//! Natural world generation: terrain, shoreline, trees, ores, and spawn.
#![forbid(unsafe_code)]

pub mod generation;
pub mod overview;
pub mod player;
pub mod profile;
pub mod random;
pub mod worldgen;

pub use generation::{
    CoarseHeightmap, HeightField, OreStats, SpawnPoint, TreeStats, bilinear, generate_natural,
};
pub use overview::{OverviewError, OverviewImage, OverviewMode, render_overview};
pub use player::Player;
pub use profile::{BlockHistogram, GenStage, GenerationReport, StageTimings};
pub use random::RandomSource;
