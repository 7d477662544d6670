//! Update command bodies.
//!
//! Updates on the platform are optimistic-concurrency commands: a POST to
//! the resource carrying the expected `version` and a list of update
//! actions. When the version does not match the server's current one, the
//! platform rejects the command with a 409 and the caller can re-fetch and
//! retry.

use serde::Serialize;

/// The body of an update command.
///
/// `A` is the resource's update action enum; each action serializes with an
/// `action` discriminator field, e.g. `{"action": "changeName", ...}`.
///
/// # Example
///
/// ```rust
/// use commercetools_api::commands::UpdateCommandBody;
/// use commercetools_api::resources::category::CategoryUpdateAction;
/// use commercetools_api::resources::LocalizedString;
///
/// let body = UpdateCommandBody::new(
///     4,
///     vec![CategoryUpdateAction::ChangeName {
///         name: LocalizedString::of("en", "Shoes"),
///     }],
/// );
///
/// let json = serde_json::to_value(&body).unwrap();
/// assert_eq!(json["version"], 4);
/// assert_eq!(json["actions"][0]["action"], "changeName");
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct UpdateCommandBody<A> {
    /// The expected current version of the resource.
    pub version: u64,
    /// The update actions to apply, in order.
    pub actions: Vec<A>,
}

impl<A> UpdateCommandBody<A> {
    /// Creates an update command body.
    #[must_use]
    pub fn new(version: u64, actions: Vec<A>) -> Self {
        Self { version, actions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
    enum TestAction {
        SetKey { key: String },
    }

    #[test]
    fn test_body_serializes_version_and_actions() {
        let body = UpdateCommandBody::new(
            7,
            vec![TestAction::SetKey {
                key: "new-key".to_string(),
            }],
        );

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["version"], 7);
        assert_eq!(json["actions"][0]["action"], "setKey");
        assert_eq!(json["actions"][0]["key"], "new-key");
    }

    #[test]
    fn test_empty_actions_serialize_as_empty_array() {
        let body: UpdateCommandBody<TestAction> = UpdateCommandBody::new(1, vec![]);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["actions"], serde_json::json!([]));
    }
}
