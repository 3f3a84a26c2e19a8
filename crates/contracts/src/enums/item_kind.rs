use serde::{Deserialize, Serialize};

/// What a copy button describes on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Issue,
    MergeRequest,
}

impl ItemKind {
    /// Prefix put in front of the title in the copied text
    pub fn title_prefix(&self) -> &'static str {
        match self {
            ItemKind::Issue => "",
            ItemKind::MergeRequest => "MR: ",
        }
    }
}
