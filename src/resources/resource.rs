//! The [`Resource`] trait: CRUD and querying for platform resources.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::ProjectClient;
use crate::commands::UpdateCommandBody;
use crate::queries::{PagedQueryResult, ResourceQuery};
use crate::resources::errors::ResourceError;

fn parse<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, ResourceError> {
    serde_json::from_value(body).map_err(|e| ResourceError::deserialization(&e))
}

/// A platform resource with the standard endpoint operations.
///
/// Implementors provide the endpoint path and the draft/update-action types;
/// the default methods cover fetch by ID or key, querying, creation,
/// updating and deletion, all with optimistic concurrency where the platform
/// requires it.
///
/// # Example
///
/// ```rust,ignore
/// use commercetools_api::resources::{Resource, category::Category};
///
/// let category = Category::by_id(&client, "category-id").await?;
/// let updated = Category::update(&client, &category.id, category.version, actions).await?;
/// ```
#[allow(async_fn_in_trait)]
pub trait Resource: DeserializeOwned + Sized {
    /// The endpoint path under the project, e.g. `categories`.
    const ENDPOINT: &'static str;

    /// The draft type posted to create this resource.
    type Draft: Serialize + Sync;

    /// The update action type for this resource.
    type UpdateAction: Serialize + Sync;

    /// Fetches a resource by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no resource has this ID.
    async fn by_id(client: &ProjectClient, id: &str) -> Result<Self, ResourceError> {
        let response = client
            .get(&format!("{}/{id}", Self::ENDPOINT), Vec::new())
            .await?;
        parse(response.body)
    }

    /// Fetches a resource by its user-defined key.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no resource has this key.
    async fn by_key(client: &ProjectClient, key: &str) -> Result<Self, ResourceError> {
        let response = client
            .get(&format!("{}/key={key}", Self::ENDPOINT), Vec::new())
            .await?;
        parse(response.body)
    }

    /// Runs a query against this resource's endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for malformed predicates (400) and
    /// transport failures.
    async fn query(
        client: &ProjectClient,
        query: &ResourceQuery,
    ) -> Result<PagedQueryResult<Self>, ResourceError> {
        let response = client.get(Self::ENDPOINT, query.to_query_params()).await?;
        parse(response.body)
    }

    /// Creates a resource from a draft.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::BadRequest`] when the draft violates a
    /// constraint (e.g. a duplicate slug).
    async fn create(client: &ProjectClient, draft: &Self::Draft) -> Result<Self, ResourceError> {
        let body =
            serde_json::to_value(draft).map_err(|e| ResourceError::deserialization(&e))?;
        let response = client.post(Self::ENDPOINT, body).await?;
        parse(response.body)
    }

    /// Applies update actions to a resource at the expected version.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ConcurrentModification`] when `version` no
    /// longer matches the server's; re-fetch and retry in that case.
    async fn update(
        client: &ProjectClient,
        id: &str,
        version: u64,
        actions: Vec<Self::UpdateAction>,
    ) -> Result<Self, ResourceError> {
        let command = UpdateCommandBody::new(version, actions);
        let body =
            serde_json::to_value(&command).map_err(|e| ResourceError::deserialization(&e))?;
        let response = client
            .post(&format!("{}/{id}", Self::ENDPOINT), body)
            .await?;
        parse(response.body)
    }

    /// Deletes a resource at the expected version.
    ///
    /// Returns the state of the resource as it was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ConcurrentModification`] when `version` no
    /// longer matches the server's.
    async fn delete(
        client: &ProjectClient,
        id: &str,
        version: u64,
    ) -> Result<Self, ResourceError> {
        let response = client
            .delete(
                &format!("{}/{id}", Self::ENDPOINT),
                vec![("version".to_string(), version.to_string())],
            )
            .await?;
        parse(response.body)
    }
}
