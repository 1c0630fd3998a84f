use thiserror::Error;

/// Errors raised while loading themes or resolving definitions.
///
/// Load-time variants describe broken theme data and are meant to abort
/// startup. `UnknownControlType` and `InvalidWindowId` are lookup failures
/// handed back to the widget/window construction layer.
#[derive(Debug, Error)]
pub enum GuiError {
    #[error("Mandatory key '{key}' missing in section '[{section}]'.")]
    MissingMandatoryKey { section: String, key: String },

    #[error("Invalid value '{value}' for key '{key}' in section '[{section}]'.")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },

    #[error("No state or draw section defined.")]
    MissingDraw,

    #[error("No resolution defined for '{id}' in section '[{section}]'.")]
    NoResolution { section: String, id: String },

    #[error("Widget definition '{definition_type}' doesn't contain the definition for '{id}'.")]
    MissingWidgetDefinition { definition_type: String, id: String },

    #[error(
        "Window not defined: '{0}'. Perhaps a mismatch between data and source versions. \
         Try --data-dir <trunk-dir>"
    )]
    WindowNotDefined(String),

    #[error("No default gui defined.")]
    NoDefaultTheme,

    #[error("No gui has been activated.")]
    NoActiveTheme,

    #[error("Type '{0}' is unknown.")]
    UnknownControlType(String),

    #[error("Window type '{0}' is not defined in the active gui.")]
    InvalidWindowId(String),

    #[error("XML parse error at position {position}: {message}")]
    Xml { position: u64, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GuiError {
    pub fn missing_key(section: &str, key: &str) -> Self {
        Self::MissingMandatoryKey {
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    /// True for errors caused by the theme data itself rather than a lookup.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::UnknownControlType(_) | Self::InvalidWindowId(_) | Self::NoActiveTheme
        )
    }
}

pub type Result<T> = std::result::Result<T, GuiError>;
