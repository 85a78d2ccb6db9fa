pub mod geolocation;
pub mod notification;
