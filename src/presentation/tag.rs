/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::filter::{FilterRule, FilterSpec};
use crate::impl_resource;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Filters accepted when listing tags
pub const TAG_FILTERS: &[FilterSpec] = &[FilterSpec::new("colors", FilterRule::FieldIn(&["color"]))];

/// A tag that can be attached to other objects
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Tag {
    /// Object id, assigned by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Tag name
    pub name: String,
    /// Display color (e.g. "Red", "Azure Blue")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Free-form comments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Folder holding the tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// Snippet holding the tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Device holding the tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl_resource!(Tag, "/config/objects/v1/tags", 2500, TAG_FILTERS);
