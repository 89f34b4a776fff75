use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch the data over HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("The server answered {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to parse the fetched data: {0}")]
    Parse(#[from] parser::ParseError),
}
