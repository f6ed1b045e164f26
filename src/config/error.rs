use std::fmt::{self, Display};
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io { path: PathBuf, error: std::io::Error },
    Toml(toml::de::Error),
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Toml(error)
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io { path, error } => {
                write!(f, "could not read config {}: {error}", path.display())
            }
            Self::Toml(error) => write!(f, "invalid config: {error}"),
        }
    }
}
