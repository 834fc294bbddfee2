/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::filter::{FilterRule, FilterSpec};
use crate::impl_resource;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Wire fields holding an address value
pub const ADDRESS_VALUE_FIELDS: &[&str] = &["ip_netmask", "ip_range", "ip_wildcard", "fqdn"];

/// Filters accepted when listing addresses.
///
/// `types` takes value field names (`["fqdn", "ip_netmask"]`), `values` takes
/// address values and `tags` takes tag names.
pub const ADDRESS_FILTERS: &[FilterSpec] = &[
    FilterSpec::new("types", FilterRule::FieldPresent("")),
    FilterSpec::new("values", FilterRule::FieldIn(ADDRESS_VALUE_FIELDS)),
    FilterSpec::new("tags", FilterRule::Intersects("tag")),
];

/// An address object. Exactly one value field is expected to be set.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Address {
    /// Object id, assigned by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Address name
    pub name: String,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Attached tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<String>,
    /// IPv4/IPv6 address with optional netmask
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_netmask: Option<String>,
    /// Address range (`10.0.0.1-10.0.0.9`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_range: Option<String>,
    /// Wildcard mask
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_wildcard: Option<String>,
    /// Fully qualified domain name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    /// Folder holding the address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// Snippet holding the address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Device holding the address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl Address {
    /// The value of whichever address field is set
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.ip_netmask
            .as_deref()
            .or(self.ip_range.as_deref())
            .or(self.ip_wildcard.as_deref())
            .or(self.fqdn.as_deref())
    }
}

impl_resource!(Address, "/config/objects/v1/addresses", 2500, ADDRESS_FILTERS);
