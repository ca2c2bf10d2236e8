use std::net::SocketAddr;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not load the Leptos configuration: {0}")]
    Configuration(String),

    #[error("Could not listen on `{addr}': {error}")]
    Bind {
        error: std::io::Error,
        addr: SocketAddr,
    },

    #[error("Server stopped: {0}")]
    Serve(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
