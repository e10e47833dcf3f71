use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct AssetArgs {
    #[arg(
        long,
        value_name = "DIR",
        help = "Embed templates/ and source/ from DIR at runtime instead of the compiled-in copies"
    )]
    pub assets_root: Option<String>,

    #[arg(
        long,
        help = "Keep real modification times of files read from --assets-root (compiled-in files always report the Unix epoch)",
        default_value_t = false
    )]
    pub keep_modtime: bool,

    #[arg(long, help = "Print the embedded asset tree before generating")]
    pub list_assets: bool,
}
