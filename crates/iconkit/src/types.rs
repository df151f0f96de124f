//! Core data types for icon requests, customization, and errors.

use serde::{Deserialize, Serialize};

/// Default icon width and height in pixels.
pub const DEFAULT_SIZE: u32 = 24;

/// Default stroke width.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Visual and accessibility parameters applied to fetched markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomizationOptions {
    pub width: u32,
    pub height: u32,
    pub stroke_width: f64,
    pub class_name: Option<String>,
    pub aria_hidden: bool,
}

impl Default for CustomizationOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            class_name: None,
            aria_hidden: true,
        }
    }
}

impl CustomizationOptions {
    /// Set width and height to the same value.
    pub fn with_size(mut self, size: u32) -> Self {
        self.width = size;
        self.height = size;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_aria_hidden(mut self, aria_hidden: bool) -> Self {
        self.aria_hidden = aria_hidden;
        self
    }

    /// Check that all numeric fields are positive.
    pub fn validate(&self) -> IconResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(IconError::InvalidOptions(format!(
                "width and height must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(IconError::InvalidOptions(format!(
                "stroke width must be a positive number, got {}",
                self.stroke_width
            )));
        }
        Ok(())
    }
}

/// A request for one icon: its name plus customization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconRequest {
    pub name: String,
    #[serde(default)]
    pub options: CustomizationOptions,
}

impl IconRequest {
    pub fn new(name: impl Into<String>, options: CustomizationOptions) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

/// Options for [`crate::IconResolver::to_html`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HtmlOptions {
    /// Wrapper tag name. `None` returns the bare markup.
    pub wrapper: Option<String>,
    pub wrapper_class: Option<String>,
    /// Overrides both width and height of `icon`.
    pub size: u32,
    pub icon: CustomizationOptions,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            wrapper: Some("div".to_string()),
            wrapper_class: None,
            size: DEFAULT_SIZE,
            icon: CustomizationOptions::default(),
        }
    }
}

impl HtmlOptions {
    /// The customization actually applied to the icon.
    pub fn icon_options(&self) -> CustomizationOptions {
        self.icon.clone().with_size(self.size)
    }
}

/// Cache address: icon name plus serialized customization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    pub name: String,
    pub options: String,
}

impl ResourceKey {
    pub fn new(name: &str, options: &CustomizationOptions) -> Self {
        // Serializing a plain struct of numbers, strings and bools cannot fail.
        let options = serde_json::to_string(options).unwrap_or_default();
        Self {
            name: name.to_string(),
            options,
        }
    }
}

/// Errors that can occur while obtaining an icon.
#[derive(thiserror::Error, Debug)]
pub enum IconError {
    /// Network failure or non-success response.
    #[error("Icon \"{name}\" unavailable: {reason}")]
    ResourceUnavailable { name: String, reason: String },

    #[error("Invalid icon name: {0:?}")]
    InvalidName(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IconError {
    pub fn unavailable(name: &str, reason: impl Into<String>) -> Self {
        IconError::ResourceUnavailable {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience result type.
pub type IconResult<T> = Result<T, IconError>;
