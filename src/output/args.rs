use crate::render::Package;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        default_value = ".",
        help = "Root directory the generated Go packages are written under",
    )]
    pub out: String,

    #[arg(
        short = 'p',
        long = "package",
        value_name = "NAME",
        value_enum,
        help = "Only generate the given package (repeatable; defaults to all)",
    )]
    pub packages: Vec<Package>,

    #[arg(long, help = "Show detailed per-package statistics")]
    pub stats: bool,

    #[arg(short = 'q', long, help = "Suppress the summary line")]
    pub quiet: bool,
}

impl Default for OutputArgs {
    fn default() -> Self {
        Self {
            out: ".".to_string(),
            packages: Vec::new(),
            stats: false,
            quiet: false,
        }
    }
}

impl OutputArgs {
    /// Requested packages in generation order, independent of flag order.
    pub fn selected_packages(&self) -> Vec<Package> {
        Package::ALL
            .into_iter()
            .filter(|p| self.packages.is_empty() || self.packages.contains(p))
            .collect()
    }
}
