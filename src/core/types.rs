//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`ImageRef`] - Validated container image reference (no tag)
//! - [`ImageTag`] - Validated image tag
//! - [`ContainerName`] - Validated container name
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, so a malformed `--docker-image` flag and a
//! malformed config-file value are rejected through the same path.
//!
//! # Examples
//!
//! ```
//! use mudctl::core::types::{ContainerName, ImageRef, ImageTag};
//!
//! // Valid constructions
//! let image = ImageRef::new("osmud/mud-manager").unwrap();
//! let tag = ImageTag::new("1.4.2").unwrap();
//! let name = ContainerName::new("mud-manager").unwrap();
//!
//! // Invalid constructions fail at creation time
//! assert!(ImageRef::new("osmud/mud-manager:latest").is_err());
//! assert!(ImageTag::new("").is_err());
//! assert!(ContainerName::new("-leading-dash").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid image reference: {0}")]
    InvalidImageRef(String),

    #[error("invalid image tag: {0}")]
    InvalidImageTag(String),

    #[error("invalid container name: {0}")]
    InvalidContainerName(String),
}

/// A validated container image reference, without a tag.
///
/// Image references follow the registry path grammar:
/// - Cannot be empty
/// - Must be lowercase; path components use `a-z`, `0-9`, `.`, `_`, `-`
/// - Components are separated by `/`; no component may be empty
/// - The first component may carry a numeric registry port (`host:5000`)
/// - Must not embed a tag (`image:tag`) or a digest (`image@sha256:...`);
///   the tag travels separately as [`ImageTag`]
///
/// # Example
///
/// ```
/// use mudctl::core::types::ImageRef;
///
/// let image = ImageRef::new("localhost:5000/osmud/mud-manager").unwrap();
/// assert_eq!(image.as_str(), "localhost:5000/osmud/mud-manager");
///
/// assert!(ImageRef::new("").is_err());
/// assert!(ImageRef::new("UPPER/case").is_err());
/// assert!(ImageRef::new("osmud//mud-manager").is_err());
/// assert!(ImageRef::new("image@sha256:abcd").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageRef(String);

impl ImageRef {
    /// Create a new validated image reference.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidImageRef` if the reference violates the
    /// grammar above.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// The reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidImageRef(
                "image reference cannot be empty".into(),
            ));
        }

        if name.contains('@') {
            return Err(TypeError::InvalidImageRef(
                "digest references are not supported".into(),
            ));
        }

        let components: Vec<&str> = name.split('/').collect();
        for (idx, component) in components.iter().enumerate() {
            if component.is_empty() {
                return Err(TypeError::InvalidImageRef(
                    "image reference has an empty path component".into(),
                ));
            }

            // Only a leading registry component may carry a `:port`; a
            // colon anywhere else is a smuggled tag.
            let (base, port) = match component.split_once(':') {
                Some((base, port)) if idx == 0 && components.len() > 1 => (base, Some(port)),
                Some(_) => {
                    return Err(TypeError::InvalidImageRef(
                        "image reference must not embed a tag; pass the tag separately".into(),
                    ));
                }
                None => (*component, None),
            };

            if let Some(port) = port {
                if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(TypeError::InvalidImageRef(format!(
                        "invalid registry port '{}'",
                        port
                    )));
                }
            }

            if base.is_empty() {
                return Err(TypeError::InvalidImageRef(
                    "image reference has an empty path component".into(),
                ));
            }

            for c in base.chars() {
                if !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'))
                {
                    return Err(TypeError::InvalidImageRef(format!(
                        "character '{}' is not allowed in an image reference",
                        c
                    )));
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ImageRef {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        value.0
    }
}

/// A validated image tag.
///
/// Tags must be 1-128 characters, starting with an ASCII letter, digit, or
/// underscore, followed by letters, digits, `.`, `_`, or `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageTag(String);

impl ImageTag {
    /// Create a new validated image tag.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidImageTag` if the tag is empty, too long,
    /// or contains a character outside the tag grammar.
    pub fn new(tag: impl Into<String>) -> Result<Self, TypeError> {
        let tag = tag.into();
        Self::validate(&tag)?;
        Ok(Self(tag))
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(tag: &str) -> Result<(), TypeError> {
        if tag.is_empty() {
            return Err(TypeError::InvalidImageTag("tag cannot be empty".into()));
        }
        if tag.len() > 128 {
            return Err(TypeError::InvalidImageTag(
                "tag cannot exceed 128 characters".into(),
            ));
        }

        let mut chars = tag.chars();
        let first = chars.next().unwrap_or_default();
        if !(first.is_ascii_alphanumeric() || first == '_') {
            return Err(TypeError::InvalidImageTag(
                "tag must start with a letter, digit, or underscore".into(),
            ));
        }
        for c in chars {
            if !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')) {
                return Err(TypeError::InvalidImageTag(format!(
                    "character '{}' is not allowed in a tag",
                    c
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Display for ImageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ImageTag {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageTag> for String {
    fn from(value: ImageTag) -> Self {
        value.0
    }
}

/// A validated container name.
///
/// Container names must start with an ASCII letter or digit, followed by
/// letters, digits, `.`, `_`, or `-` (the runtime's own naming rule).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContainerName(String);

impl ContainerName {
    /// Create a new validated container name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidContainerName` if the name is empty or
    /// violates the naming rule.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidContainerName(
                "container name cannot be empty".into(),
            ));
        }

        let mut chars = name.chars();
        let first = chars.next().unwrap_or_default();
        if !first.is_ascii_alphanumeric() {
            return Err(TypeError::InvalidContainerName(
                "container name must start with a letter or digit".into(),
            ));
        }
        for c in chars {
            if !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')) {
                return Err(TypeError::InvalidContainerName(format!(
                    "character '{}' is not allowed in a container name",
                    c
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Display for ContainerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ContainerName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContainerName> for String {
    fn from(value: ContainerName) -> Self {
        value.0
    }
}
