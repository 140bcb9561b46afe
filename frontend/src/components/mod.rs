pub mod account_menu;
pub mod common;
pub mod layout;
pub mod toast;
