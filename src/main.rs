mod config;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use islet_chunk::VoxelGrid;
use islet_structures::OakTree;
use islet_world::{BlockHistogram, Player, generate_natural, render_overview};

use crate::config::{IsletConfig, ModeName, load_config};

#[derive(Parser, Debug)]
#[command(name = "islet", about = "Generates a small voxel island world")]
struct Args {
    /// Config file (defaults to islet.toml in the working directory when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// World seed; a random one is picked and logged when absent
    #[arg(long)]
    seed: Option<u64>,
    /// Write a top-down overview PNG to this path
    #[arg(long)]
    overview: Option<PathBuf>,
    #[arg(long, value_enum)]
    overview_mode: Option<ModeName>,
    /// Pixels per column in the overview
    #[arg(long)]
    scale: Option<usize>,
    /// Log filter, e.g. "debug" or "info,perf=debug"
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn apply(&self, cfg: &mut IsletConfig) {
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if let Some(path) = &self.overview {
            cfg.overview.enable = true;
            cfg.overview.path = path.clone();
        }
        if let Some(mode) = self.overview_mode {
            cfg.overview.mode = mode;
        }
        if let Some(scale) = self.scale {
            cfg.overview.scale = scale;
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(filter) = &args.log_level {
        logger.parse_filters(filter);
    }
    logger.init();

    let mut cfg = load_config(args.config.as_deref())?;
    args.apply(&mut cfg);

    let seed = match cfg.seed {
        Some(s) => s,
        None => {
            let s = rand::rngs::OsRng.next_u64();
            log::info!("no seed given; using {}", s);
            s
        }
    };
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    let mut grid = VoxelGrid::new();
    let mut player = Player::default();
    let mut report = generate_natural(&mut grid, &mut player, &mut rng, &mut OakTree::default());
    report.seed = Some(seed);
    report.log_summary();

    let hist = BlockHistogram::from_grid(&grid);
    for (block, n) in hist.entries() {
        log::debug!("{:>9}: {}", block.name(), n);
    }

    if cfg.overview.enable {
        let image = render_overview(&grid, cfg.overview.mode.into()).upscale(cfg.overview.scale)?;
        let (w, h) = (image.width as u32, image.height as u32);
        let png = image::RgbImage::from_raw(w, h, image.data)
            .ok_or("overview buffer does not match its dimensions")?;
        png.save(&cfg.overview.path)?;
        log::info!("overview written to {} ({}x{})", cfg.overview.path.display(), w, h);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_file() {
        let args = Args::parse_from([
            "islet", "--seed", "9", "--overview", "map.png", "--overview-mode", "height",
            "--scale", "2",
        ]);
        let mut cfg = IsletConfig::default();
        cfg.seed = Some(1);
        args.apply(&mut cfg);
        assert_eq!(cfg.seed, Some(9));
        assert!(cfg.overview.enable);
        assert_eq!(cfg.overview.path, PathBuf::from("map.png"));
        assert_eq!(cfg.overview.mode, ModeName::Height);
        assert_eq!(cfg.overview.scale, 2);
    }

    #[test]
    fn absent_flags_keep_file_values() {
        let args = Args::parse_from(["islet"]);
        let mut cfg = IsletConfig::default();
        cfg.seed = Some(5);
        cfg.overview.scale = 3;
        args.apply(&mut cfg);
        assert_eq!(cfg.seed, Some(5));
        assert_eq!(cfg.overview.scale, 3);
        assert!(!cfg.overview.enable);
    }
}
