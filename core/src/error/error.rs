use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("engine failed: {0}")]
    Engine(#[from] EngineError),
    #[error("command failed: {0}")]
    Command(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("config error: {0}")]
    Config(String),
    #[error("bundled data error: {0}")]
    Data(String),
    #[error("plugin error: {0}")]
    Plugin(#[from] anyhow::Error),
}
