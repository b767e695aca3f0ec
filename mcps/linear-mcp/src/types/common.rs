//! Shared wire-shape types and flattening helpers
//!
//! Linear nests references (`state { name }`) and wraps collections in
//! connection objects. The helpers here flatten the shapes the tool
//! output has no reason to preserve.

use serde::{Deserialize, Deserializer, Serialize};

/// Paginated collection as returned by Linear connection fields.
///
/// List tools return the whole connection so the caller can feed
/// `endCursor` back as the next `after` argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default)]
    pub nodes: Vec<T>,
    #[serde(
        default,
        rename = "pageInfo",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_info: Option<PageInfo>,
}

/// Cursor state for a connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// Nested object carrying only a display name, e.g. `assignee { name }`.
#[derive(Debug, Clone, Deserialize)]
pub struct NameRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// Flatten an optional name-carrying node into the name itself.
pub fn name_ref<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let node = Option::<NameRef>::deserialize(de)?;
    Ok(node.and_then(|n| n.name))
}

/// Flatten `labels { nodes { name } }` into a list of names.
pub fn label_names<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let connection = Option::<Connection<NameRef>>::deserialize(de)?;
    Ok(connection
        .map(|c| c.nodes.into_iter().filter_map(|n| n.name).collect())
        .unwrap_or_default())
}

/// Which form a caller-supplied issue reference takes.
///
/// Linear accepts both forms interchangeably as lookup keys; this is a
/// pattern check only, no lookup is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueRef {
    /// Opaque UUID, e.g. `123e4567-e89b-42d3-a456-426614174000`
    Uuid,
    /// Team-prefixed code, e.g. `ENG-123`
    Identifier,
}

impl IssueRef {
    pub fn parse(raw: &str) -> Option<IssueRef> {
        if is_uuid(raw) {
            Some(IssueRef::Uuid)
        } else if is_identifier(raw) {
            Some(IssueRef::Identifier)
        } else {
            None
        }
    }
}

fn is_uuid(raw: &str) -> bool {
    const GROUP_LENS: [usize; 5] = [8, 4, 4, 4, 12];
    let groups: Vec<&str> = raw.split('-').collect();
    groups.len() == GROUP_LENS.len()
        && groups
            .iter()
            .zip(GROUP_LENS)
            .all(|(group, len)| group.len() == len && group.chars().all(|c| c.is_ascii_hexdigit()))
}

fn is_identifier(raw: &str) -> bool {
    let Some((key, number)) = raw.split_once('-') else {
        return false;
    };
    let key_ok = !key.is_empty()
        && key.chars().all(|c| c.is_ascii_alphanumeric())
        && key.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    let number_ok = !number.is_empty() && number.chars().all(|c| c.is_ascii_digit());
    key_ok && number_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recognizes_uuid_form() {
        assert_eq!(
            IssueRef::parse("123e4567-e89b-42d3-a456-426614174000"),
            Some(IssueRef::Uuid)
        );
    }

    #[test]
    fn recognizes_identifier_form() {
        assert_eq!(IssueRef::parse("ENG-123"), Some(IssueRef::Identifier));
        assert_eq!(IssueRef::parse("OPS2-7"), Some(IssueRef::Identifier));
    }

    #[test]
    fn rejects_neither_form() {
        assert_eq!(IssueRef::parse(""), None);
        assert_eq!(IssueRef::parse("not an issue"), None);
        assert_eq!(IssueRef::parse("ENG-"), None);
        assert_eq!(IssueRef::parse("-123"), None);
        assert_eq!(IssueRef::parse("123-456"), None);
        assert_eq!(IssueRef::parse("123e4567-e89b-42d3-a456"), None);
    }

    #[test]
    fn connection_tolerates_missing_page_info() {
        let connection: Connection<NameRef> =
            serde_json::from_value(json!({"nodes": [{"name": "bug"}]})).unwrap();
        assert_eq!(connection.nodes.len(), 1);
        assert!(connection.page_info.is_none());
    }

    #[test]
    fn page_info_round_trips_cursor() {
        let info: PageInfo =
            serde_json::from_value(json!({"hasNextPage": true, "endCursor": "abc"})).unwrap();
        assert!(info.has_next_page);
        assert_eq!(info.end_cursor.as_deref(), Some("abc"));
    }
}
