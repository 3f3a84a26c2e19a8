pub mod item_kind;
pub mod modifier_key;
