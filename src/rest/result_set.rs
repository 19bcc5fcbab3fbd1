//! Paginated result sets.
//!
//! A [`ResultSet`] wraps exactly one decoded API response. It exposes the
//! response's `data` items, remembers the resource that produced it, and can
//! fetch the next page by following the response's `pagination.next_url`.
//!
//! # Iteration
//!
//! Items can be walked two ways:
//!
//! - [`ResultSet::iter`] (or `for item in &result_set`): stateless and
//!   restartable
//! - the cursor methods [`advance`](ResultSet::advance),
//!   [`rewind`](ResultSet::rewind), [`valid`](ResultSet::valid),
//!   [`current`](ResultSet::current) and [`key`](ResultSet::key)
//!
//! Neither ever crosses a page boundary; use [`ResultSet::next_page`] for that.
//!
//! # Example
//!
//! ```rust,ignore
//! let users = client.users()?;
//! let mut page = users.recent_media(1_574_083, Some(20)).await?;
//!
//! loop {
//!     for item in &page {
//!         println!("{}", item["id"]);
//!     }
//!     match page.next_page(Some(20)).await? {
//!         Some(next) => page = next,
//!         None => break,
//!     }
//! }
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::RateLimit;
use crate::rest::url::{UrlParts, ACCESS_TOKEN_PARAM};
use crate::rest::{ResourceCore, ResourceError};

/// One page of results from the API.
///
/// # Data Normalization
///
/// - `data` is an array: its items, in server order
/// - `data` is any other non-null value (single-entity endpoints): one item
/// - `data` is missing or `null`: no items
///
/// [`count`](Self::count) is computed once at construction.
#[derive(Debug, Clone)]
pub struct ResultSet {
    response: Value,
    resource: Arc<ResourceCore>,
    count: usize,
    position: usize,
    rate_limit: Option<RateLimit>,
}

impl ResultSet {
    /// Wraps a decoded response produced by `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidResponse`] if `response` is not a JSON
    /// object.
    pub fn new(response: Value, resource: Arc<ResourceCore>) -> Result<Self, ResourceError> {
        if !response.is_object() {
            return Err(ResourceError::InvalidResponse {
                reason: format!(
                    "{} result set expects a response object, got {}",
                    resource.name(),
                    json_type_name(&response)
                ),
            });
        }

        let count = data_slice(&response).len();
        Ok(Self {
            response,
            resource,
            count,
            position: 0,
            rate_limit: None,
        })
    }

    pub(crate) fn with_rate_limit(mut self, rate_limit: Option<RateLimit>) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Returns the URL of the next page, if there is one.
    ///
    /// The `access_token` parameter of the server-provided `next_url` is
    /// removed (the resource attaches the current token when requesting it);
    /// every other parameter is kept verbatim and in order. Returns `None` when
    /// the response has no `pagination.next_url` or it does not parse.
    #[must_use]
    pub fn next_page_url(&self) -> Option<String> {
        let next_url = self
            .response
            .get("pagination")?
            .get("next_url")?
            .as_str()
            .filter(|url| !url.trim().is_empty())?;

        let mut parts = UrlParts::parse(next_url)?;
        parts.remove_query_param(ACCESS_TOKEN_PARAM);

        Some(self.resource.build_url(&parts))
    }

    /// Returns `true` if the response points at a further page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_page_url().is_some()
    }

    /// Fetches the next page through the resource that produced this one.
    ///
    /// Returns `Ok(None)` when there is no next page. Every call is a fresh
    /// request; pages are not cached.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the request.
    pub async fn next_page(&self, quantity: Option<u32>) -> Result<Option<Self>, ResourceError> {
        let Some(url) = self.next_page_url() else {
            return Ok(None);
        };

        tracing::debug!(resource = self.resource.name(), "Fetching next page");
        self.resource.request(&url, quantity).await.map(Some)
    }

    /// Moves the cursor to the next item.
    pub fn advance(&mut self) -> &mut Self {
        self.position += 1;
        self
    }

    /// Moves the cursor back to the first item of this page.
    pub fn rewind(&mut self) -> &mut Self {
        self.position = 0;
        self
    }

    /// Returns `true` if the cursor points at an item.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.position < self.data().len()
    }

    /// Returns the item under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&Value> {
        self.data().get(self.position)
    }

    /// Returns the cursor position.
    #[must_use]
    pub const fn key(&self) -> usize {
        self.position
    }

    /// Iterates over the items of this page from the start.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.data().iter()
    }

    /// Returns the items of this page.
    #[must_use]
    pub fn data(&self) -> &[Value] {
        data_slice(&self.response)
    }

    /// Returns the first item, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.data().first()
    }

    /// Returns the number of items, as counted at construction.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if this page has no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the whole decoded response.
    #[must_use]
    pub const fn response(&self) -> &Value {
        &self.response
    }

    /// Returns the resource that produced this page.
    #[must_use]
    pub const fn resource(&self) -> &Arc<ResourceCore> {
        &self.resource
    }

    /// Returns the response `meta` object, if present.
    #[must_use]
    pub fn meta(&self) -> Option<&Value> {
        self.response.get("meta")
    }

    /// Returns the response `pagination` object, if present.
    #[must_use]
    pub fn pagination(&self) -> Option<&Value> {
        self.response.get("pagination")
    }

    /// Returns the rate limit reported with this page, if any.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<RateLimit> {
        self.rate_limit
    }

    /// Deserializes the items of this page into a typed model.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Deserialize`] if any item does not match `T`.
    pub fn deserialize_data<T: DeserializeOwned>(&self) -> Result<Vec<T>, ResourceError> {
        self.iter()
            .map(|item| {
                serde_json::from_value(item.clone()).map_err(|source| ResourceError::Deserialize {
                    resource: self.resource.name(),
                    source,
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn data_slice(response: &Value) -> &[Value] {
    match response.get("data") {
        None | Some(Value::Null) => &[],
        Some(Value::Array(items)) => items,
        Some(single) => std::slice::from_ref(single),
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ClientContext;
    use crate::config::{AccessToken, TransportConfig};
    use crate::rest::ResourceKind;
    use serde::Deserialize;
    use serde_json::json;

    fn create_core() -> Arc<ResourceCore> {
        let context =
            ClientContext::new(AccessToken::new("TOKEN"), TransportConfig::default()).unwrap();
        Arc::new(ResourceCore::new(ResourceKind::User, Arc::new(context)))
    }

    fn result_set(response: Value) -> ResultSet {
        ResultSet::new(response, create_core()).unwrap()
    }

    #[test]
    fn test_count_and_cursor_iteration() {
        let mut set = result_set(json!({"data": ["a", "b", "c"]}));

        assert_eq!(set.count(), 3);
        let mut seen = Vec::new();
        while set.valid() {
            seen.push((set.key(), set.current().unwrap().clone()));
            set.advance();
        }

        assert_eq!(
            seen,
            vec![(0, json!("a")), (1, json!("b")), (2, json!("c"))]
        );
        assert!(!set.valid());
        assert!(set.current().is_none());
    }

    #[test]
    fn test_rewind_restarts_current_page() {
        let mut set = result_set(json!({"data": [1, 2]}));
        set.advance().advance();
        assert!(!set.valid());

        set.rewind();
        assert!(set.valid());
        assert_eq!(set.key(), 0);
        assert_eq!(set.current(), Some(&json!(1)));
    }

    #[test]
    fn test_iter_is_restartable_and_ignores_cursor() {
        let mut set = result_set(json!({"data": [1, 2, 3]}));
        set.advance();

        let first: Vec<_> = set.iter().cloned().collect();
        let second: Vec<_> = (&set).into_iter().cloned().collect();
        assert_eq!(first, vec![json!(1), json!(2), json!(3)]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_or_null_data_is_empty() {
        for response in [json!({}), json!({"data": null})] {
            let set = result_set(response);
            assert_eq!(set.count(), 0);
            assert!(set.is_empty());
            assert!(!set.valid());
            assert!(set.first().is_none());
        }
    }

    #[test]
    fn test_single_object_data_is_one_item() {
        let set = result_set(json!({"data": {"id": "3", "username": "kevin"}}));

        assert_eq!(set.count(), 1);
        assert_eq!(set.first().unwrap()["username"], "kevin");
    }

    #[test]
    fn test_non_object_response_is_rejected() {
        for response in [json!([1, 2]), json!("data"), json!(null), json!(3)] {
            let error = ResultSet::new(response, create_core()).unwrap_err();
            assert!(matches!(error, ResourceError::InvalidResponse { .. }));
        }
    }

    #[test]
    fn test_next_page_url_strips_token_only() {
        let set = result_set(json!({
            "data": [],
            "pagination": {"next_url": "https://x/y?cursor=42&access_token=OLD"}
        }));

        assert_eq!(set.next_page_url().as_deref(), Some("https://x/y?cursor=42"));
        assert!(set.has_next_page());
    }

    #[test]
    fn test_next_page_url_keeps_parameter_order_and_encoding() {
        let set = result_set(json!({
            "pagination": {
                "next_url": "https://api.instagram.com/v1/tags/cats/media/recent?access_token=OLD&max_tag_id=AQ%2Bz&count=20&cursor=1_2",
                "next_max_tag_id": "AQ+z"
            }
        }));

        assert_eq!(
            set.next_page_url().as_deref(),
            Some("https://api.instagram.com/v1/tags/cats/media/recent?max_tag_id=AQ%2Bz&count=20&cursor=1_2")
        );
    }

    #[test]
    fn test_next_page_url_does_not_reencode_cursor() {
        for (next_url, expected) in [
            (
                "https://x/y?cursor=a'b&access_token=OLD",
                "https://x/y?cursor=a'b",
            ),
            (
                "https://x/y?cursor=a\"b&access_token=OLD",
                "https://x/y?cursor=a\"b",
            ),
            (
                "https://X.Example/y?access_token=OLD&cursor=1",
                "https://X.Example/y?cursor=1",
            ),
            (
                "https://u:p@x:443/y?cursor=1&access_token=OLD",
                "https://u:p@x:443/y?cursor=1",
            ),
        ] {
            let set = result_set(json!({"pagination": {"next_url": next_url}}));
            assert_eq!(set.next_page_url().as_deref(), Some(expected), "{next_url}");
        }
    }

    #[test]
    fn test_next_page_url_absent_cases() {
        for response in [
            json!({"data": []}),
            json!({"pagination": {}}),
            json!({"pagination": {"next_url": ""}}),
            json!({"pagination": {"next_url": null}}),
            json!({"pagination": {"next_url": "not a url"}}),
        ] {
            let set = result_set(response);
            assert!(set.next_page_url().is_none());
            assert!(!set.has_next_page());
        }
    }

    #[tokio::test]
    async fn test_next_page_without_pagination_is_none() {
        let set = result_set(json!({"data": [1]}));
        assert!(set.next_page(None).await.unwrap().is_none());
        assert!(set.next_page(Some(10)).await.unwrap().is_none());
    }

    #[test]
    fn test_accessors() {
        let set = result_set(json!({
            "meta": {"code": 200},
            "data": [{"id": "1"}],
            "pagination": {"next_max_id": "9"}
        }));

        assert_eq!(set.meta(), Some(&json!({"code": 200})));
        assert_eq!(set.pagination(), Some(&json!({"next_max_id": "9"})));
        assert_eq!(set.response()["data"][0]["id"], "1");
        assert_eq!(set.resource().kind(), ResourceKind::User);
        assert!(set.rate_limit().is_none());
    }

    #[test]
    fn test_deserialize_data_into_model() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Item {
            id: String,
        }

        let set = result_set(json!({"data": [{"id": "1"}, {"id": "2"}]}));
        let items: Vec<Item> = set.deserialize_data().unwrap();
        assert_eq!(
            items,
            vec![
                Item {
                    id: "1".to_string()
                },
                Item {
                    id: "2".to_string()
                }
            ]
        );

        let bad = result_set(json!({"data": [{"name": "no id"}]}));
        let error = bad.deserialize_data::<Item>().unwrap_err();
        assert!(matches!(
            error,
            ResourceError::Deserialize {
                resource: "User",
                ..
            }
        ));
    }
}
