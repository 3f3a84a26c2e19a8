use crate::enums::item_kind::ItemKind;
use serde::{Deserialize, Serialize};

/// Title and link of one issue or merge request, as scraped from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescription {
    pub kind: ItemKind,
    pub title: String,
    pub link: String,
}

impl ItemDescription {
    pub fn new(kind: ItemKind, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            link: link.into(),
        }
    }

    /// Text that lands in the clipboard: bold title on the first line, link without
    /// scheme on the second.
    ///
    /// Example: `*MR: Add docs*\nexample.com/group/project/-/merge_requests/13`
    pub fn to_clipboard_text(&self) -> String {
        format!(
            "*{}{}*\n{}",
            self.kind.title_prefix(),
            self.title.trim(),
            strip_scheme(&self.link)
        )
    }
}

/// Drop the leading `https://`; other schemes are kept so the link stays usable.
fn strip_scheme(link: &str) -> &str {
    link.strip_prefix("https://").unwrap_or(link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_text() {
        let item = ItemDescription::new(
            ItemKind::Issue,
            "Fix bug #12",
            "https://example.com/issues/12",
        );
        assert_eq!(item.to_clipboard_text(), "*Fix bug #12*\nexample.com/issues/12");
    }

    #[test]
    fn test_merge_request_text_is_prefixed_and_trimmed() {
        let item = ItemDescription::new(
            ItemKind::MergeRequest,
            "\n   Add docs  \n",
            "https://example.com/merge_requests/13",
        );
        assert_eq!(
            item.to_clipboard_text(),
            "*MR: Add docs*\nexample.com/merge_requests/13"
        );
    }

    #[test]
    fn test_plain_http_link_is_left_alone() {
        let item = ItemDescription::new(ItemKind::Issue, "Local", "http://gitlab.local/issues/1");
        assert_eq!(item.to_clipboard_text(), "*Local*\nhttp://gitlab.local/issues/1");
    }
}
