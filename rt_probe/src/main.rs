use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use indicatif::{ParallelProgressIterator, ProgressStyle};
use rayon::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use parse_scene::parse_scene;
use ray_geometry::{Geometries, Geometry, Ray};

/// Fire probe rays at the shapes of a scene and report where they hit.
#[derive(Debug, Parser)]
#[command(name = "rt_probe")]
struct Cli {
    /// Path to the YAML scene file.
    scene: PathBuf,

    #[arg(short, long, default_value_t = 0)]
    /// Number of worker threads (0 lets rayon decide).
    threads: usize,
}

fn describe_probe(geometries: &Geometries, index: usize, ray: &Ray) -> String {
    let hits = geometries.hits(ray);
    let Some(&(closest, shape)) = hits.first() else {
        return format!("probe {index}: no intersections");
    };

    let points = hits
        .iter()
        .map(|(point, _)| point.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let normal = match shape.normal_at(&closest) {
        Ok(normal) => format!("normal {normal} on {}", shape.shape_type()),
        Err(e) => {
            warn!(point = %closest, "no normal at closest hit: {e}");
            format!("no normal on {}", shape.shape_type())
        }
    };

    format!("probe {index}: {points}; {normal}")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let input = fs::read_to_string(&cli.scene)
        .with_context(|| format!("Could not read scene file {}", cli.scene.display()))?;
    let scene = parse_scene(&input)
        .with_context(|| format!("Could not parse scene file {}", cli.scene.display()))?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(cli.threads)
        .build()
        .context("Could not build the worker pool")?;
    info!(threads = pool.current_num_threads(), "probing scene");

    let style = ProgressStyle::with_template(
        "{msg} {elapsed:>5} -- {eta:5} {bar:40.cyan/blue} {pos:>7}/{len:7} {percent}%",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar());

    let lines: Vec<String> = pool.install(|| {
        scene
            .probes
            .par_iter()
            .enumerate()
            .progress_with_style(style)
            .with_message("Probing...")
            .map(|(index, ray)| describe_probe(&scene.geometries, index, ray))
            .collect()
    });

    for line in lines {
        println!("{line}");
    }

    Ok(())
}
