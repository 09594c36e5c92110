//! Site-wide constants. Runtime server settings (address, site root, reload
//! port) come from `[package.metadata.leptos]` through `get_configuration`.

pub const SITE_NAME: &str = "Zdr_DEV";
pub const SITE_URL: &str = "https://zdr-dev-portfolio.vercel.app";
pub const CONTACT_EMAIL: &str = "corentin.mayrand@gmail.com";
pub const LOCATION: &str = "Rodez, Aveyron (12)";

/// Hosted form relay receiving contact inquiries.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/xnjbzypl";

/// Local-storage key holding the light/dark preference.
pub const THEME_STORAGE_KEY: &str = "zdr_theme";

pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

pub fn mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}
