/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Generic manager for configuration objects.
//!
//! Every object type (addresses, tags, services, ...) shares one protocol:
//! container validation, an offset/limit page loop, in-memory filtering and
//! fetch-by-name. [`ResourceManager`] implements it once; an object type only
//! declares its endpoint, page size and filters through [`Resource`].

use crate::application::client::Client;
use crate::application::container::{Container, ContainerKind, ContainerSelector};
use crate::application::filter::{FilterSpec, ListOptions, apply_filters, validate_filters};
use crate::application::interfaces::resource::ResourceService;
use crate::constants::{ABSOLUTE_MAX_LIMIT, DEFAULT_MAX_LIMIT};
use crate::error::{ApiErrorInfo, AppError, AppResult};
use crate::model::responses::ResourcePage;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A configuration object type served by one endpoint
pub trait Resource: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Endpoint path relative to the API base URL
    const ENDPOINT: &'static str;
    /// Page size used when the caller does not choose one
    const DEFAULT_MAX_LIMIT: usize = DEFAULT_MAX_LIMIT;
    /// Filters accepted by `list`
    const FILTERS: &'static [FilterSpec] = &[];

    /// Object id, `None` before creation
    fn id(&self) -> Option<&str>;
    /// Object name
    fn name(&self) -> &str;
    /// Folder holding the object
    fn folder(&self) -> Option<&str>;
    /// Snippet holding the object
    fn snippet(&self) -> Option<&str>;
    /// Device holding the object
    fn device(&self) -> Option<&str>;

    /// Container field for `kind`
    fn container_value(&self, kind: ContainerKind) -> Option<&str> {
        match kind {
            ContainerKind::Folder => self.folder(),
            ContainerKind::Snippet => self.snippet(),
            ContainerKind::Device => self.device(),
        }
    }
}

/// Checks that `max_limit` is within `1..=ABSOLUTE_MAX_LIMIT`
pub fn validate_max_limit(max_limit: usize) -> AppResult<usize> {
    if (1..=ABSOLUTE_MAX_LIMIT).contains(&max_limit) {
        Ok(max_limit)
    } else {
        Err(AppError::Configuration(format!(
            "max_limit must be between 1 and {ABSOLUTE_MAX_LIMIT}, got {max_limit}"
        )))
    }
}

/// Manager for one object type, built over a shared [`Client`]
pub struct ResourceManager<T: Resource> {
    client: Arc<Client>,
    max_limit: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> Clone for ResourceManager<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            max_limit: self.max_limit,
            _marker: PhantomData,
        }
    }
}

impl<T: Resource> ResourceManager<T> {
    /// Creates a manager using the type's default page size
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            client,
            max_limit: T::DEFAULT_MAX_LIMIT.clamp(1, ABSOLUTE_MAX_LIMIT),
            _marker: PhantomData,
        }
    }

    /// Creates a manager with an explicit page size
    ///
    /// # Returns
    /// * `Err(AppError::Configuration)` - `max_limit` is outside `1..=5000`
    pub fn with_max_limit(client: Arc<Client>, max_limit: usize) -> AppResult<Self> {
        let max_limit = validate_max_limit(max_limit)?;
        Ok(Self {
            client,
            max_limit,
            _marker: PhantomData,
        })
    }

    /// Current page size
    #[must_use]
    pub fn max_limit(&self) -> usize {
        self.max_limit
    }

    /// Changes the page size; rejected values leave the current one untouched
    pub fn set_max_limit(&mut self, max_limit: usize) -> AppResult<()> {
        self.max_limit = validate_max_limit(max_limit)?;
        Ok(())
    }

    /// Endpoint of this object type
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        T::ENDPOINT
    }

    fn item_path(id: &str) -> AppResult<String> {
        if id.is_empty() {
            return Err(AppError::MissingParameter(
                "Field 'id' is not allowed to be empty".to_string(),
            ));
        }
        if id.contains(['/', '?', '#']) {
            return Err(AppError::InvalidParameter(format!(
                "Field 'id' must not contain '/', '?' or '#', got '{id}'"
            )));
        }
        Ok(format!("{}/{}", T::ENDPOINT, id))
    }

    async fn fetch_page(
        &self,
        container: &Container,
        limit: usize,
        offset: usize,
    ) -> AppResult<ResourcePage<T>> {
        let params = vec![
            ("limit".to_string(), limit.to_string()),
            ("offset".to_string(), offset.to_string()),
            container.query_pair(),
        ];
        let body = self
            .client
            .get(T::ENDPOINT, &params)
            .await?
            .ok_or_else(|| AppError::api("Invalid response format: empty list response"))?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetches every page for `container`.
    ///
    /// Stops on a short page, or when a full page lands exactly on the
    /// reported `total`. A total already exceeded is ignored.
    async fn fetch_all(&self, container: &Container) -> AppResult<Vec<T>> {
        let limit = self.max_limit;
        let mut offset = 0;
        let mut items = Vec::new();

        loop {
            let page = self.fetch_page(container, limit, offset).await?;
            let count = page.data.len();
            let total = page.total;
            items.extend(page.data);
            debug!(
                "{}: page at offset {} returned {} items",
                T::ENDPOINT,
                offset,
                count
            );

            if count < limit {
                break;
            }
            if total > 0 {
                let seen = offset + count;
                if seen == total {
                    warn!(
                        "{}: full page reached the reported total of {}, stopping",
                        T::ENDPOINT,
                        total
                    );
                    break;
                }
                if seen > total {
                    warn!(
                        "{}: reported total {} is below the {} items received, paging on",
                        T::ENDPOINT,
                        total,
                        seen
                    );
                }
            }
            offset += limit;
        }

        Ok(items)
    }

    fn parse_item(value: Option<Value>) -> AppResult<T> {
        let value = value.ok_or_else(|| AppError::api("Invalid response format: empty response"))?;
        Ok(serde_json::from_value(value)?)
    }

    /// Serialises `item` for an update. The id travels in the path only.
    fn update_body(item: &T) -> AppResult<Value> {
        let mut body = serde_json::to_value(item)?;
        if let Some(map) = body.as_object_mut() {
            map.remove("id");
        }
        Ok(body)
    }
}

#[async_trait]
impl<T: Resource> ResourceService<T> for ResourceManager<T> {
    async fn list(&self, container: &ContainerSelector, options: &ListOptions) -> AppResult<Vec<T>> {
        let container = container.resolve()?;
        let filters = validate_filters(&options.filters, T::FILTERS)?;

        let items = self.fetch_all(&container).await?;
        let fetched = items.len();
        let items = apply_filters(items, &filters, &container, options)?;

        info!(
            "{}: listed {} items in {} ({} after filtering)",
            T::ENDPOINT,
            fetched,
            container,
            items.len()
        );
        Ok(items)
    }

    async fn fetch(&self, name: &str, container: &ContainerSelector) -> AppResult<T> {
        if name.is_empty() {
            return Err(AppError::MissingParameter(
                "Field 'name' is not allowed to be empty".to_string(),
            ));
        }
        let container = container.resolve()?;

        let params = vec![("name".to_string(), name.to_string()), container.query_pair()];
        let body = self
            .client
            .get(T::ENDPOINT, &params)
            .await?
            .ok_or_else(|| AppError::api("Invalid response format: empty response"))?;

        if body.get("id").is_some() {
            return Ok(serde_json::from_value(body)?);
        }

        let Some(data) = body.get("data").and_then(Value::as_array) else {
            return Err(AppError::api(
                "Invalid response format: expected an object with 'id' or a 'data' list",
            ));
        };

        match data.as_slice() {
            [] => Err(AppError::NotFound(ApiErrorInfo::new(format!(
                "{name} not found in {container}"
            )))),
            [only] => Ok(serde_json::from_value(only.clone())?),
            [first, ..] => {
                warn!(
                    "{}: {} objects named '{}' in {}, using the first",
                    T::ENDPOINT,
                    data.len(),
                    name,
                    container
                );
                Ok(serde_json::from_value(first.clone())?)
            }
        }
    }

    async fn get(&self, id: &str) -> AppResult<T> {
        let path = Self::item_path(id)?;
        Self::parse_item(self.client.get(&path, &[]).await?)
    }

    async fn create(&self, item: &T) -> AppResult<T> {
        let created = Self::parse_item(self.client.post(T::ENDPOINT, item).await?)?;
        info!("{}: created '{}'", T::ENDPOINT, created.name());
        Ok(created)
    }

    async fn update(&self, item: &T) -> AppResult<T> {
        let id = item.id().ok_or_else(|| {
            AppError::MissingParameter("Field 'id' is required for updates".to_string())
        })?;
        let path = Self::item_path(id)?;
        let body = Self::update_body(item)?;
        let updated = Self::parse_item(self.client.put(&path, &body).await?)?;
        info!("{}: updated '{}'", T::ENDPOINT, updated.name());
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let path = Self::item_path(id)?;
        self.client.delete(&path).await?;
        info!("{}: deleted {}", T::ENDPOINT, id);
        Ok(())
    }
}
