use std::path::PathBuf;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum GeneratorError {
    #[error("invalid command path: {0:?}")]
    InvalidPath(String),

    #[error("invalid property name: {0:?}")]
    InvalidProperty(String),

    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("config: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl GeneratorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<figment::Error> for GeneratorError {
    fn from(err: figment::Error) -> Self {
        GeneratorError::Config(Box::new(err))
    }
}
