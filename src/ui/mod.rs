pub mod chat;
pub mod lib;
pub mod map_page;
pub mod predict_page;
pub mod windows;
