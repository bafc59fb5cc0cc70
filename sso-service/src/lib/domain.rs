pub mod app;
pub mod client;
pub mod credentials;
pub mod errors;
pub mod sso;
pub mod user;
