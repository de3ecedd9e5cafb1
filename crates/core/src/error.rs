#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid renderer configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to read renderer configuration: {0}")]
    ConfigRead(std::io::Error),
    #[error("failed to parse renderer configuration: {0}")]
    ConfigParse(serde_yaml::Error),
    #[error("render pass `{pass}` failed: {reason}")]
    Pass { pass: &'static str, reason: String },
    #[error("rendered output of {actual} bytes exceeds limit of {limit} bytes")]
    OutputTooLarge { limit: usize, actual: usize },
    #[error("invalid date `{0}`")]
    InvalidDate(String),
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;
