use clap::Args;

use crate::records::DEFAULT_SOURCE;

#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    #[arg(
        short = 's',
        long,
        value_name = "PATH",
        default_value = DEFAULT_SOURCE,
        help = "Virtual path of the flag-type list inside the asset tree (json/yaml)",
    )]
    pub source: String,
}

impl Default for RecordArgs {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}
