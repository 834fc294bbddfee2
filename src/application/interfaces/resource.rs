/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::container::ContainerSelector;
use crate::application::filter::ListOptions;
use crate::application::resource::Resource;
use crate::error::AppError;
use async_trait::async_trait;

/// Interface shared by every configuration object manager
#[async_trait]
pub trait ResourceService<T: Resource>: Send + Sync {
    /// Lists every object in a container.
    ///
    /// All pages are fetched before `options` is applied; filters are never
    /// sent to the server. Invalid containers and filters fail before the
    /// first request.
    async fn list(
        &self,
        container: &ContainerSelector,
        options: &ListOptions,
    ) -> Result<Vec<T>, AppError>;

    /// Gets one object by name.
    ///
    /// An empty match raises `NotFound`; several matches return the first one.
    async fn fetch(&self, name: &str, container: &ContainerSelector) -> Result<T, AppError>;

    /// Gets one object by id
    async fn get(&self, id: &str) -> Result<T, AppError>;

    /// Creates an object
    async fn create(&self, item: &T) -> Result<T, AppError>;

    /// Replaces an object; `item` must carry its id
    async fn update(&self, item: &T) -> Result<T, AppError>;

    /// Deletes an object by id
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
