/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Container selectors.
//!
//! Every configuration object lives in exactly one folder, snippet or device.
//! A [`ContainerSelector`] is what callers pass; [`ContainerSelector::resolve`]
//! turns it into a validated [`Container`] before any request is sent.

use crate::error::{AppError, AppResult};
use std::fmt;

/// The three kinds of container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Folder
    Folder,
    /// Snippet
    Snippet,
    /// Device
    Device,
}

impl ContainerKind {
    /// All kinds, in query-parameter order
    pub const ALL: [ContainerKind; 3] = [
        ContainerKind::Folder,
        ContainerKind::Snippet,
        ContainerKind::Device,
    ];

    /// Query parameter and object field name
    #[must_use]
    pub fn param(self) -> &'static str {
        match self {
            ContainerKind::Folder => "folder",
            ContainerKind::Snippet => "snippet",
            ContainerKind::Device => "device",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param())
    }
}

/// A validated container: exactly one kind with a non-empty name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Container {
    kind: ContainerKind,
    value: String,
}

impl Container {
    /// Container kind
    #[must_use]
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Container name
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// `(param, value)` query pair
    #[must_use]
    pub fn query_pair(&self) -> (String, String) {
        (self.kind.param().to_string(), self.value.clone())
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.value)
    }
}

/// Caller-supplied container choice; may be invalid until resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerSelector {
    /// Folder name
    pub folder: Option<String>,
    /// Snippet name
    pub snippet: Option<String>,
    /// Device name
    pub device: Option<String>,
}

impl ContainerSelector {
    /// Selector naming a folder
    pub fn folder(name: &str) -> Self {
        Self::default().with_folder(name)
    }

    /// Selector naming a snippet
    pub fn snippet(name: &str) -> Self {
        Self::default().with_snippet(name)
    }

    /// Selector naming a device
    pub fn device(name: &str) -> Self {
        Self::default().with_device(name)
    }

    /// Sets the folder
    #[must_use]
    pub fn with_folder(mut self, name: &str) -> Self {
        self.folder = Some(name.to_string());
        self
    }

    /// Sets the snippet
    #[must_use]
    pub fn with_snippet(mut self, name: &str) -> Self {
        self.snippet = Some(name.to_string());
        self
    }

    /// Sets the device
    #[must_use]
    pub fn with_device(mut self, name: &str) -> Self {
        self.device = Some(name.to_string());
        self
    }

    fn get(&self, kind: ContainerKind) -> Option<&String> {
        match kind {
            ContainerKind::Folder => self.folder.as_ref(),
            ContainerKind::Snippet => self.snippet.as_ref(),
            ContainerKind::Device => self.device.as_ref(),
        }
    }

    /// Validates the selector.
    ///
    /// # Returns
    /// * `Err(AppError::MissingParameter)` - a container was given as an empty string
    /// * `Err(AppError::InvalidContainer)` - zero or several containers were given
    pub fn resolve(&self) -> AppResult<Container> {
        for kind in ContainerKind::ALL {
            if self.get(kind).is_some_and(|v| v.is_empty()) {
                return Err(AppError::MissingParameter(format!(
                    "Field '{kind}' is not allowed to be empty"
                )));
            }
        }

        let mut provided = ContainerKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|v| (kind, v)));

        match (provided.next(), provided.next()) {
            (Some((kind, value)), None) => Ok(Container {
                kind,
                value: value.clone(),
            }),
            _ => Err(AppError::InvalidContainer(
                "Exactly one of 'folder', 'snippet', or 'device' must be provided.".to_string(),
            )),
        }
    }
}
