/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! In-memory list filtering.
//!
//! Filters never reach the server. They are checked against the resource's
//! declared [`FilterSpec`]s before the first page is requested and applied to
//! the fully materialised list afterwards.

use crate::application::container::{Container, ContainerKind};
use crate::error::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// How a declared filter matches an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRule {
    /// One of the item fields equals one of the listed values
    FieldIn(&'static [&'static str]),
    /// Item list field shares at least one value with the listed values
    Intersects(&'static str),
    /// The object at this JSON pointer (`""` for the item itself) has a
    /// non-null member named by one of the listed values
    FieldPresent(&'static str),
}

/// A filter a resource type accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    /// Filter key callers use
    pub key: &'static str,
    /// Match rule
    pub rule: FilterRule,
}

impl FilterSpec {
    /// Declares a filter
    pub const fn new(key: &'static str, rule: FilterRule) -> Self {
        Self { key, rule }
    }

    fn matches(&self, item: &Value, wanted: &[Value]) -> bool {
        match self.rule {
            FilterRule::FieldIn(fields) => fields
                .iter()
                .any(|field| item.get(field).is_some_and(|value| wanted.contains(value))),
            FilterRule::Intersects(field) => item
                .get(field)
                .and_then(Value::as_array)
                .is_some_and(|values| values.iter().any(|v| wanted.contains(v))),
            FilterRule::FieldPresent(pointer) => item.pointer(pointer).is_some_and(|parent| {
                wanted
                    .iter()
                    .filter_map(Value::as_str)
                    .any(|field| parent.get(field).is_some_and(|v| !v.is_null()))
            }),
        }
    }
}

/// Filter key to list of accepted values
pub type Filters = BTreeMap<String, Value>;

/// Options of a list call, applied after all pages are fetched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOptions {
    /// Keep only items whose container equals the requested one
    pub exact_match: bool,
    /// Drop items in these folders
    pub exclude_folders: Vec<String>,
    /// Drop items in these snippets
    pub exclude_snippets: Vec<String>,
    /// Drop items on these devices
    pub exclude_devices: Vec<String>,
    /// Declared filters
    pub filters: Filters,
}

impl ListOptions {
    /// Keep only items defined directly in the requested container
    #[must_use]
    pub fn exact_match(mut self) -> Self {
        self.exact_match = true;
        self
    }

    /// Drop items in these folders
    #[must_use]
    pub fn exclude_folders(mut self, folders: &[&str]) -> Self {
        self.exclude_folders = folders.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Drop items in these snippets
    #[must_use]
    pub fn exclude_snippets(mut self, snippets: &[&str]) -> Self {
        self.exclude_snippets = snippets.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Drop items on these devices
    #[must_use]
    pub fn exclude_devices(mut self, devices: &[&str]) -> Self {
        self.exclude_devices = devices.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Adds a filter. The value must be a JSON array for the list call to accept it.
    #[must_use]
    pub fn filter(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.filters.insert(key.to_string(), value.into());
        self
    }

    fn excluded(&self, kind: ContainerKind) -> &[String] {
        match kind {
            ContainerKind::Folder => &self.exclude_folders,
            ContainerKind::Snippet => &self.exclude_snippets,
            ContainerKind::Device => &self.exclude_devices,
        }
    }
}

/// Checks every filter key against `specs` and every value's type.
///
/// Returns the matching spec and value list for each filter.
pub fn validate_filters<'a>(
    filters: &'a Filters,
    specs: &[FilterSpec],
) -> AppResult<Vec<(FilterSpec, &'a [Value])>> {
    filters
        .iter()
        .map(|(key, value)| {
            let spec = specs
                .iter()
                .find(|spec| spec.key == key.as_str())
                .copied()
                .ok_or_else(|| AppError::InvalidFilter(format!("Unknown filter '{key}'")))?;
            let values = value.as_array().ok_or_else(|| {
                AppError::InvalidFilter(format!("'{key}' filter must be a list"))
            })?;
            if matches!(spec.rule, FilterRule::FieldPresent(_))
                && values.iter().any(|v| !v.is_string())
            {
                return Err(AppError::InvalidFilter(format!(
                    "'{key}' filter must be a list of strings"
                )));
            }
            Ok((spec, values.as_slice()))
        })
        .collect()
}

/// Reads the container field of a serialised item
fn container_field(item: &Value, kind: ContainerKind) -> Option<&str> {
    item.get(kind.param()).and_then(Value::as_str)
}

/// Applies validated filters, then `exact_match`, then the exclusion lists.
///
/// Items are compared through their JSON form so filter fields use wire names.
pub fn apply_filters<T: Serialize>(
    items: Vec<T>,
    filters: &[(FilterSpec, &[Value])],
    container: &Container,
    options: &ListOptions,
) -> AppResult<Vec<T>> {
    let mut kept = Vec::with_capacity(items.len());

    'items: for item in items {
        let json = serde_json::to_value(&item)?;

        for (spec, wanted) in filters {
            if !spec.matches(&json, wanted) {
                continue 'items;
            }
        }

        if options.exact_match && container_field(&json, container.kind()) != Some(container.value())
        {
            continue;
        }

        for kind in ContainerKind::ALL {
            let excluded = options.excluded(kind);
            if !excluded.is_empty()
                && container_field(&json, kind).is_some_and(|v| excluded.iter().any(|e| e == v))
            {
                continue 'items;
            }
        }

        kept.push(item);
    }

    Ok(kept)
}
