pub mod copy_button;
