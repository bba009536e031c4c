use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{TagId, TagName};

/// Color assigned to tags created without an explicit one.
pub const DEFAULT_TAG_COLOR: &str = "#007bff";

/// A named, colored label attached to bookmarks.
///
/// Tag names are unique after trimming. Tags are created implicitly during
/// reconciliation and never deleted, even when no bookmark references them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
    pub color: String,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Tag`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTag {
    pub name: TagName,
    pub color: String,
    pub created_at: NaiveDateTime,
}

impl NewTag {
    /// A tag with the default color, stamped with the given creation time.
    pub fn with_default_color(name: TagName, created_at: NaiveDateTime) -> Self {
        Self {
            name,
            color: DEFAULT_TAG_COLOR.to_string(),
            created_at,
        }
    }
}

/// Normalize a requested tag-name list before reconciliation.
///
/// Names are trimmed, blank entries are dropped, and duplicates (after
/// trimming, case-sensitive) are collapsed to their first occurrence. The
/// result is the exact set of associations a bookmark should end up with.
pub fn normalize_tag_names<I, S>(names: I) -> Vec<TagName>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<TagName> = Vec::new();
    for name in names {
        let Ok(name) = TagName::new(name.as_ref()) else {
            continue; // blank or whitespace-only
        };
        if !normalized.contains(&name) {
            normalized.push(name);
        }
    }
    normalized
}
