mod formatters;

use crate::assets::AssetTree;
use crate::commands::stats::GenerationStats;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use formatters::{format_bytes, format_modtime};
use log::warn;
use std::fmt::Display;
use std::io::{self, Write};

/// Writes one line to stdout. A reader that went away (`| head`) is not an error.
fn emit(text: impl Display) {
    let mut out = io::stdout().lock();
    if let Err(e) = write_line(&mut out, &text) {
        warn!("Failed to write report: {e}");
    }
}

fn write_line(out: &mut dyn Write, text: &dyn Display) -> io::Result<()> {
    match writeln!(out, "{text}").and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

pub fn print_summary(stats: &GenerationStats) {
    emit(format_args!(
        "✓ Generated {} packages from {} flag types in {}ms",
        stats.packages_generated,
        stats.flag_types,
        stats.total_duration.as_millis(),
    ));
}

pub fn print_detailed(stats: &GenerationStats) {
    let mut summary_table = Table::new();
    summary_table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Generation Summary")
                .add_attribute(Attribute::Bold)
                .set_alignment(comfy_table::CellAlignment::Left),
            Cell::new(""),
        ]);

    summary_table.add_row(vec![
        "Generation Time",
        &format!("{}ms", stats.total_duration.as_millis()),
    ]);
    summary_table.add_row(vec![
        "Packages Generated",
        &format!("{}", stats.packages_generated),
    ]);
    summary_table.add_row(vec!["Flag Types", &format!("{}", stats.flag_types)]);
    summary_table.add_row(vec!["Total Written", &format_bytes(stats.total_bytes)]);

    emit(format_args!("{summary_table}\n"));

    let mut detail_table = Table::new();
    detail_table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Package").add_attribute(Attribute::Bold),
            Cell::new("Template").add_attribute(Attribute::Bold),
            Cell::new("Output").add_attribute(Attribute::Bold),
            Cell::new("Size").add_attribute(Attribute::Bold),
            Cell::new("CRC Value").add_attribute(Attribute::Bold),
        ]);

    for package in &stats.package_stats {
        detail_table.add_row(vec![
            Cell::new(package.package),
            Cell::new(&package.template),
            Cell::new(package.output.display()),
            Cell::new(format_bytes(package.bytes)),
            Cell::new(format!("0x{:08X}", package.crc_value)),
        ]);
    }

    emit(&detail_table);
}

pub fn print_assets(tree: &AssetTree) {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Asset").add_attribute(Attribute::Bold),
            Cell::new("Size").add_attribute(Attribute::Bold),
            Cell::new("Modified").add_attribute(Attribute::Bold),
        ]);

    for (path, asset) in tree.iter() {
        table.add_row(vec![
            Cell::new(path),
            Cell::new(format_bytes(asset.len())),
            Cell::new(format_modtime(asset.modified())),
        ]);
    }

    emit(format_args!("{table}\n"));
}
