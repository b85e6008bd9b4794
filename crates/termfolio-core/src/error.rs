use thiserror::Error;

use crate::motion::layout::SectionId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid trigger: section {section:?} is not present in the page layout")]
    InvalidTrigger { section: SectionId },

    #[error("Stale region: offsets for section {section:?} predate the current layout")]
    StaleRegion { section: SectionId },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
