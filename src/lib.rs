pub mod carousel;
pub mod chat;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod mailer;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::AppState;
