//! Error types shared across Toasty crates.

/// Top-level error type for Toasty operations.
#[derive(Debug, thiserror::Error)]
pub enum ToastyError {
    #[error("Input error: {message}")]
    Input { message: String },

    #[error("Tween error: {message}")]
    Tween { message: String },

    #[error("Surface error: {message}")]
    Surface { message: String },

    #[error("Audio error: {message}")]
    Audio { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Property '{property}' on surface {surface_id} is owned by an active tween")]
    PropertyBusy { surface_id: u64, property: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ToastyError.
pub type ToastyResult<T> = Result<T, ToastyError>;

impl ToastyError {
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input {
            message: msg.into(),
        }
    }

    pub fn tween(msg: impl Into<String>) -> Self {
        Self::Tween {
            message: msg.into(),
        }
    }

    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface {
            message: msg.into(),
        }
    }

    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn property_busy(surface_id: u64, property: impl Into<String>) -> Self {
        Self::PropertyBusy {
            surface_id,
            property: property.into(),
        }
    }
}
