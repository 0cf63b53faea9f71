#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("label index {index} out of range for alphabet of {len}")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("label alphabet is empty")]
    EmptyAlphabet,

    #[error("duplicate label character: {0:?}")]
    DuplicateLabel(char),
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("highlight render failed: {0}")]
    Render(String),

    #[error("highlight clear failed: {0}")]
    Clear(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HopError {
    #[error(transparent)]
    Label(#[from] LabelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),
}
