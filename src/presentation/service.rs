/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::filter::{FilterRule, FilterSpec};
use crate::impl_resource;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Filters accepted when listing services.
///
/// `protocols` takes `"tcp"` and/or `"udp"`.
pub const SERVICE_FILTERS: &[FilterSpec] = &[
    FilterSpec::new("protocols", FilterRule::FieldPresent("/protocol")),
    FilterSpec::new("tags", FilterRule::Intersects("tag")),
];

/// Session timeout overrides for a port definition
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TimeoutOverride {
    /// Session timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    /// Half-closed session timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halfclose_timeout: Option<u32>,
    /// TIME_WAIT timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timewait_timeout: Option<u32>,
}

/// Destination and source ports for one protocol
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PortSpec {
    /// Destination ports (`"80,443"` or `"8000-8080"`)
    pub port: String,
    /// Source ports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_port: Option<String>,
    /// Timeout overrides
    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub timeout_override: Option<TimeoutOverride>,
}

impl PortSpec {
    /// Port definition without source ports or overrides
    #[must_use]
    pub fn new(port: &str) -> Self {
        Self {
            port: port.to_string(),
            ..Default::default()
        }
    }
}

/// Protocol block; one of `tcp` or `udp` is expected
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Protocol {
    /// TCP ports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp: Option<PortSpec>,
    /// UDP ports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp: Option<PortSpec>,
}

/// A service object describing a protocol and port set
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Service {
    /// Object id, assigned by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Service name
    pub name: String,
    /// Protocol and ports
    #[serde(default)]
    pub protocol: Protocol,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Attached tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<String>,
    /// Folder holding the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// Snippet holding the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Device holding the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl_resource!(Service, "/config/objects/v1/services", 2500, SERVICE_FILTERS);
