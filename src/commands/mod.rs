pub mod generate;
pub mod stats;

use crate::args::Args;
use crate::assets::{self, AssetSource};
use crate::error::FlagGenError;
use crate::records;
use crate::render::TemplateEngine;
use crate::visuals;
use stats::GenerationStats;
use std::path::Path;
use std::time::Instant;

/// Embeds the assets, then renders every selected package.
pub fn run(args: &Args) -> Result<GenerationStats, FlagGenError> {
    let tree = assets::load_assets(&args.assets)?;
    if args.assets.list_assets {
        visuals::print_assets(&tree);
    }
    generate_all(&tree, args)
}

pub fn generate_all(
    assets: &dyn AssetSource,
    args: &Args,
) -> Result<GenerationStats, FlagGenError> {
    let start = Instant::now();

    let records = records::load_records(assets, &args.records.source)?;
    let engine = TemplateEngine::new()?;
    let out_dir = Path::new(&args.output.out);

    let mut stats = GenerationStats::new(records.len());
    for package in args.output.selected_packages() {
        let stat = generate::generate_package(assets, &engine, package, &records, out_dir)
            .map_err(|e| FlagGenError::InPackage {
                package: package.to_string(),
                source: Box::new(e),
            })?;
        stats.add_package(stat);
    }

    stats.total_duration = start.elapsed();
    Ok(stats)
}
