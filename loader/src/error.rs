//! Everything that can go wrong reading a system file.

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Couldn't parse the system file: {0}")]
    Json5(#[from] json5::Error),
    #[error("No prefab body named {0}")]
    UnknownPrefab(String),
    #[error("{name} has eccentricity {eccentricity}, which isn't in [0, 1)")]
    BadEccentricity { name: String, eccentricity: f64 },
    #[error("Bad setting {name}: {reason}")]
    BadSetting { name: &'static str, reason: String },
    #[error("The system has no bodies in it")]
    Empty,
}

pub type LoadResult<T> = Result<T, LoadError>;
