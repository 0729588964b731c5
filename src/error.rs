use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("Invalid value for {keyword} at line {line}: {value:?}")]
    Value {
        keyword: String,
        value: String,
        line: usize,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
