/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::filter::{FilterRule, FilterSpec};
use crate::impl_resource;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Filters accepted when listing schedules.
///
/// `schedule_type` takes `"recurring"` and/or `"non_recurring"`.
pub const SCHEDULE_FILTERS: &[FilterSpec] = &[FilterSpec::new(
    "schedule_type",
    FilterRule::FieldPresent("/schedule_type"),
)];

/// Time ranges per weekday, each formatted `hh:mm-hh:mm`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WeeklySchedule {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Sunday ranges
    pub sunday: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Monday ranges
    pub monday: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Tuesday ranges
    pub tuesday: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Wednesday ranges
    pub wednesday: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Thursday ranges
    pub thursday: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Friday ranges
    pub friday: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Saturday ranges
    pub saturday: Vec<String>,
}

/// Recurring schedule, either daily or weekly
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RecurringSchedule {
    /// Time ranges applied every day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<Vec<String>>,
    /// Time ranges per weekday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly: Option<WeeklySchedule>,
}

/// Schedule kind; exactly one member is expected
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScheduleType {
    /// Daily or weekly ranges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<RecurringSchedule>,
    /// Absolute ranges formatted `YYYY/MM/DD@hh:mm-YYYY/MM/DD@hh:mm`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_recurring: Option<Vec<String>>,
}

/// A schedule object
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Schedule {
    /// Object id, assigned by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Schedule name
    pub name: String,
    /// Schedule kind and ranges
    #[serde(default)]
    pub schedule_type: ScheduleType,
    /// Folder holding the schedule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// Snippet holding the schedule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Device holding the schedule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl Schedule {
    /// True for recurring schedules
    #[must_use]
    pub fn is_recurring(&self) -> bool {
        self.schedule_type.recurring.is_some()
    }
}

impl_resource!(Schedule, "/config/objects/v1/schedules", 200, SCHEDULE_FILTERS);
