pub mod app_state;
pub mod client_info;
pub mod http;
pub mod visit;
