pub mod constants;
pub mod html_page;
pub mod layout;
pub mod port;
pub mod render;
pub mod terminal;
