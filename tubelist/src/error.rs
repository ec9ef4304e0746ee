use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}: {1}")]
    Context(String, Box<Error>),

    #[error("{0}")]
    InvalidUrl(String),

    #[error("a video with the same id already exists")]
    DuplicateVideo,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Database error: {0}")]
    DbError(String),

    #[error("Template rendering error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Config parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Url parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

pub trait Context<T, E> {
    fn context(self, context: &'static str) -> Result<T>;
}

impl<T, E> Context<T, E> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e.into())))
    }
}
