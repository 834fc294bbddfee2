/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Address objects
pub mod address;
/// Schedule objects
pub mod schedule;
/// Service objects
pub mod service;
/// Tag objects
pub mod tag;

pub use address::Address;
pub use schedule::{RecurringSchedule, Schedule, ScheduleType, WeeklySchedule};
pub use service::{PortSpec, Protocol, Service, TimeoutOverride};
pub use tag::Tag;

/// Implements [`Resource`](crate::application::resource::Resource) for an
/// object model carrying `id`, `name`, `folder`, `snippet` and `device` fields.
///
/// ```ignore
/// impl_resource!(Tag, "/config/objects/v1/tags", 2500, TAG_FILTERS);
/// ```
#[macro_export]
macro_rules! impl_resource {
    ($ty:ty, $endpoint:expr, $max_limit:expr, $filters:expr) => {
        impl $crate::application::resource::Resource for $ty {
            const ENDPOINT: &'static str = $endpoint;
            const DEFAULT_MAX_LIMIT: usize = $max_limit;
            const FILTERS: &'static [$crate::application::filter::FilterSpec] = $filters;

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn folder(&self) -> Option<&str> {
                self.folder.as_deref()
            }

            fn snippet(&self) -> Option<&str> {
                self.snippet.as_deref()
            }

            fn device(&self) -> Option<&str> {
                self.device.as_deref()
            }
        }
    };
}
