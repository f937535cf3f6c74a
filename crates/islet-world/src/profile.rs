use std::time::{Duration, Instant};

use hashbrown::HashMap;
use islet_blocks::Block;
use islet_chunk::VoxelGrid;

use crate::generation::{OreStats, SpawnPoint, TreeStats};

pub const GEN_STAGE_COUNT: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenStage {
    BaseLayers,
    Heightmap,
    Terrain,
    Shoreline,
    Trees,
    Ores,
    Spawn,
}

impl GenStage {
    pub const ALL: [GenStage; GEN_STAGE_COUNT] = [
        GenStage::BaseLayers,
        GenStage::Heightmap,
        GenStage::Terrain,
        GenStage::Shoreline,
        GenStage::Trees,
        GenStage::Ores,
        GenStage::Spawn,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            GenStage::BaseLayers => "base",
            GenStage::Heightmap => "heightmap",
            GenStage::Terrain => "terrain",
            GenStage::Shoreline => "shoreline",
            GenStage::Trees => "trees",
            GenStage::Ores => "ores",
            GenStage::Spawn => "spawn",
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageTimings {
    durations: [Duration; GEN_STAGE_COUNT],
}

impl StageTimings {
    #[inline]
    pub fn record(&mut self, stage: GenStage, elapsed: Duration) {
        self.durations[stage.index()] += elapsed;
    }

    /// Runs `f` and charges its wall time to `stage`.
    pub fn time<T>(&mut self, stage: GenStage, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.record(stage, start.elapsed());
        out
    }

    #[inline]
    pub fn get(&self, stage: GenStage) -> Duration {
        self.durations[stage.index()]
    }

    pub fn total(&self) -> Duration {
        self.durations.iter().sum()
    }
}

/// What one generation run did.
#[derive(Clone, Debug)]
pub struct GenerationReport {
    /// Filled in by callers that seeded the run themselves.
    pub seed: Option<u64>,
    pub timings: StageTimings,
    pub grass_columns: usize,
    pub sand_converted: usize,
    pub trees: TreeStats,
    pub ores: OreStats,
    pub spawn: SpawnPoint,
}

impl GenerationReport {
    pub fn log_summary(&self) {
        match self.seed {
            Some(seed) => log::info!("world generated (seed {})", seed),
            None => log::info!("world generated"),
        }
        log::info!(
            "trees {}/{} planted, {} sand, {} coal + {} iron in {} stone",
            self.trees.planted.len(),
            self.trees.attempts,
            self.sand_converted,
            self.ores.coal,
            self.ores.iron,
            self.ores.stone_seen,
        );
        log::info!(
            "spawn at ({}, {}, {}){}",
            self.spawn.x,
            self.spawn.y,
            self.spawn.z,
            if self.spawn.buried { " [buried]" } else { "" }
        );
        for stage in GenStage::ALL {
            log::debug!(
                target: "perf",
                "stage={} us={}",
                stage.label(),
                self.timings.get(stage).as_micros()
            );
        }
        log::info!(target: "perf", "total_us={}", self.timings.total().as_micros());
    }
}

/// Voxel count per material.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockHistogram {
    counts: HashMap<Block, usize>,
}

impl BlockHistogram {
    pub fn from_grid(grid: &VoxelGrid) -> Self {
        let mut counts = HashMap::new();
        for &b in grid.blocks() {
            *counts.entry(b).or_insert(0) += 1;
        }
        Self { counts }
    }

    #[inline]
    pub fn get(&self, block: Block) -> usize {
        self.counts.get(&block).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Non-zero entries in block id order.
    pub fn entries(&self) -> Vec<(Block, usize)> {
        let mut out: Vec<(Block, usize)> = self.counts.iter().map(|(b, n)| (*b, *n)).collect();
        out.sort_unstable_by_key(|(b, _)| *b);
        out
    }
}
