//! Types shared between the content script and its tooling: tracked keys,
//! item descriptions and the extension configuration.

pub mod enums;
pub mod shared;
