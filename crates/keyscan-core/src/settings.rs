// Keyscan Settings Module
// Optional user settings that change how scripts are translated and printed

use std::path::{Path, PathBuf};

use crate::translate::TranslateOptions;

/// Settings for keyscan
///
/// Loaded from a TOML file (default: ~/.config/keyscan/settings.toml):
///
/// ```toml
/// [translate]
/// millisecond_expressions = true
/// expand_macros = true
///
/// [output]
/// separator = " "
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Translate `<DDD>` into `sleep:DDD`
    millisecond_expressions: bool,

    /// Expand `<Multiply(...)>` macros before translating
    expand_macros: bool,

    /// Text placed between output tokens
    separator: String,

    /// Path to the settings file (for reload)
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    translate: Option<TranslateSettings>,

    #[serde(default)]
    output: Option<OutputSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TranslateSettings {
    #[serde(default)]
    millisecond_expressions: Option<bool>,

    #[serde(default)]
    expand_macros: Option<bool>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct OutputSettings {
    #[serde(default)]
    separator: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Create settings with the built-in defaults
    pub fn new() -> Self {
        let options = TranslateOptions::default();
        Self {
            millisecond_expressions: options.millisecond_expressions,
            expand_macros: options.expand_macros,
            separator: " ".to_string(),
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        log::debug!("loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(translate) = toml_settings.translate {
            if let Some(value) = translate.millisecond_expressions {
                settings.millisecond_expressions = value;
            }
            if let Some(value) = translate.expand_macros {
                settings.expand_macros = value;
            }
        }

        if let Some(output) = toml_settings.output {
            if let Some(separator) = output.separator {
                settings.set_separator(separator)?;
            }
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("keyscan").join("settings.toml"))
    }

    /// Load from default location (~/.config/keyscan/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        // Return default settings if file doesn't exist
        Ok(Self::new())
    }

    /// Reload settings from the original file
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        if let Some(ref path) = self.source_path {
            *self = Self::from_file(path)?;
            Ok(())
        } else {
            Err(SettingsError::InvalidValue("No source path set".to_string()))
        }
    }

    pub fn millisecond_expressions(&self) -> bool {
        self.millisecond_expressions
    }

    pub fn set_millisecond_expressions(&mut self, value: bool) {
        self.millisecond_expressions = value;
    }

    pub fn expand_macros(&self) -> bool {
        self.expand_macros
    }

    pub fn set_expand_macros(&mut self, value: bool) {
        self.expand_macros = value;
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Set the output separator; it must not be empty
    pub fn set_separator(&mut self, separator: impl Into<String>) -> Result<(), SettingsError> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(SettingsError::InvalidValue(
                "separator cannot be empty".to_string(),
            ));
        }
        self.separator = separator;
        Ok(())
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Translation options described by these settings
    pub fn translate_options(&self) -> TranslateOptions {
        TranslateOptions {
            millisecond_expressions: self.millisecond_expressions,
            expand_macros: self.expand_macros,
        }
    }
}
