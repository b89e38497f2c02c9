use std::{fs::File, io::BufWriter, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

use args::Args;
use slicer::{format::SvgFile, model::Model};

mod args;

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::TRACE
    } else {
        LevelFilter::INFO
    };
    let filter = filter::Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target("slicer", level)
        .with_target("mesh_format", level)
        .with_target("common", level);
    let format = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();

    let slice_config = args.slice_config()?;
    if let Some(path) = &args.save_config {
        slice_config
            .save(path)
            .with_context(|| format!("Saving config to `{}`", path.display()))?;
    }

    let now = Instant::now();

    let mut model = Model::new();
    model.open(&args.mesh)?;
    let layers = model.slice(&slice_config)?;

    println!("Sliced into {} layers", layers.len());
    for (idx, layer) in layers.iter().enumerate() {
        println!(" {idx:>4}: z = {:<10} {} lines", layer.height(), layer.len());
    }

    if let Some(bounds) = model.dimension() {
        let size = bounds.size();
        println!("Dimension: {} x {} x {}", size.x, size.y, size.z);
    }

    if let Some(path) = &args.svg {
        let file = File::create(path)
            .with_context(|| format!("Creating `{}`", path.display()))?;
        SvgFile::new(model.layers()).write(BufWriter::new(file))?;
        println!("Wrote preview to `{}`", path.display());
    }

    println!("Done. Elapsed: {:.1}s", now.elapsed().as_secs_f32());

    Ok(())
}
