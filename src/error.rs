use thiserror::Error;

use crate::assets::errors::AssetError;
use crate::output::errors::OutputError;
use crate::records::errors::RecordError;
use crate::render::errors::RenderError;

#[derive(Debug, Error)]
pub enum FlagGenError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("While generating package '{package}': {source}")]
    InPackage {
        package: String,
        #[source]
        source: Box<FlagGenError>,
    },
}
