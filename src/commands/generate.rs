use crate::assets::AssetSource;
use crate::commands::stats::PackageStat;
use crate::error::FlagGenError;
use crate::output;
use crate::records::FlagTypeRecord;
use crate::render::{GenerationRequest, Package, TemplateEngine};
use log::info;
use std::path::Path;

pub fn generate_package(
    assets: &dyn AssetSource,
    engine: &TemplateEngine,
    package: Package,
    records: &[FlagTypeRecord],
    out_dir: &Path,
) -> Result<PackageStat, FlagGenError> {
    let request = GenerationRequest::new(package, records);

    // Template must load and parse before the output file is touched.
    let template_path = package.template_path();
    let template = engine.parse(&template_path, assets.open(&template_path)?.contents())?;

    let path = output::output_path(out_dir, package);
    let mut writer = output::create_output(&path)?;
    template.render_to(&request, &mut writer)?;
    let written = output::finish_output(&path, writer)?;

    info!("Wrote {} ({} bytes)", written.path.display(), written.bytes);

    Ok(PackageStat {
        package,
        template: template_path,
        output: written.path,
        bytes: written.bytes,
        crc_value: written.crc,
    })
}
