pub mod admin;
pub mod api_error;
pub mod config;
pub mod dashboard;
pub mod debounce;
pub mod error;
pub mod format;
pub mod payment;
pub mod portal_client;
pub mod registration;
pub mod selection;
pub mod session;

#[cfg(test)]
mod tests;

pub const PORTAL_API_HOSTNAME: &str = "fyw-api.atlascard.xyz";
pub const DEFAULT_API_BASE_URL: &str = const_format::concatcp!("https://", PORTAL_API_HOSTNAME);
