pub mod assets;
pub mod clipboard;
pub mod components;
pub mod copy_action;
pub mod dom;
pub mod timer;
