use reqwest::Url;
use serde_json::Value;

use crate::error::{InventoryError, Result};

/// A fetched response, either one resource or a collection of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Single(Value),
    List(Vec<Value>),
}

impl Document {
    pub fn parse(url: &Url, value: Value) -> Result<Self> {
        match value {
            Value::Object(mut fields) => match fields.remove("items") {
                Some(Value::Array(items)) => Ok(Document::List(items)),
                Some(other) => Err(InventoryError::schema(
                    url,
                    format!("`items` should be a list, found {other}"),
                )),
                None => Ok(Document::Single(Value::Object(fields))),
            },
            other => Ok(Document::Single(other)),
        }
    }

    pub fn into_items(self) -> Vec<Value> {
        match self {
            Document::Single(item) => vec![item],
            Document::List(items) => items,
        }
    }
}

#[derive(Debug, Clone, serde_derive::Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

#[derive(Debug, serde_derive::Deserialize)]
struct Linked {
    links: Vec<Link>,
}

/// Finds the `href` of the link with relation `rel` on `item`, which was
/// fetched from `url`.
pub fn child_href(url: &Url, item: Value, rel: &str) -> Result<String> {
    let Linked { links } = serde_json::from_value(item)
        .map_err(|err| InventoryError::schema(url, format!("item has no usable `links`: {err}")))?;

    links
        .into_iter()
        .find(|link| link.rel == rel)
        .map(|link| link.href)
        .ok_or_else(|| InventoryError::schema(url, format!("item has no link with rel `{rel}`")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn url() -> Url {
        Url::parse("http://testbed.invalid/sites").unwrap()
    }

    #[test]
    fn items_field_makes_a_list() {
        let document = Document::parse(&url(), json!({"items": [{"uid": "a"}, {"uid": "b"}]}));
        assert_eq!(
            document.unwrap(),
            Document::List(vec![json!({"uid": "a"}), json!({"uid": "b"})])
        );
    }

    #[test]
    fn missing_items_means_the_whole_response_is_one_item() {
        let document = Document::parse(&url(), json!({"uid": "root"})).unwrap();
        assert_eq!(document.into_items(), vec![json!({"uid": "root"})]);
    }

    #[test]
    fn items_that_are_not_a_list_are_rejected() {
        let error = Document::parse(&url(), json!({"items": {"uid": "a"}})).unwrap_err();
        assert!(matches!(error, InventoryError::Schema { .. }));
    }

    #[test]
    fn picks_the_link_with_matching_rel() {
        let item = json!({
            "uid": "uc",
            "links": [
                {"rel": "self", "href": "/sites/uc"},
                {"rel": "clusters", "href": "/sites/uc/clusters"},
            ],
        });

        assert_eq!(
            child_href(&url(), item, "clusters").unwrap(),
            "/sites/uc/clusters"
        );
    }

    #[test]
    fn missing_rel_is_a_schema_error() {
        let item = json!({"links": [{"rel": "self", "href": "/sites/uc"}]});
        let error = child_href(&url(), item, "clusters").unwrap_err();
        assert!(error.to_string().contains("`clusters`"));
    }

    #[test]
    fn missing_links_is_a_schema_error() {
        let error = child_href(&url(), json!({"uid": "uc"}), "clusters").unwrap_err();
        assert!(matches!(error, InventoryError::Schema { .. }));
    }
}
