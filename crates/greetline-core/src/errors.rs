use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum GreetlineError {
    /// The sink reported a negative byte count.
    #[error("invalid write result")]
    #[diagnostic(code(greetline::invalid_write_result))]
    InvalidWriteResult,

    /// An error reported by the sink itself, passed through untouched.
    #[error(transparent)]
    #[diagnostic(code(greetline::sink))]
    Sink(std::io::Error),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(greetline::config),
        help("Check ~/.config/greetline/config.toml or the file passed with --config")
    )]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GreetlineError>;
