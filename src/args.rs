use crate::assets::args::AssetArgs;
use crate::output::args::OutputArgs;
use crate::records::args::RecordArgs;
use clap::Parser;

// Top-level CLI parser. Sub-sections are flattened from sub-Args structs.
#[derive(Parser, Debug)]
#[command(
    name = "flaggen",
    author,
    version,
    about = "Generate Go flag types from a flag-type list and Liquid templates"
)]
pub struct Args {
    #[command(flatten)]
    pub assets: AssetArgs,

    #[command(flatten)]
    pub records: RecordArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}
