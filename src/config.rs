pub const DEFAULT_API_URL: &str = "https://api.ebay.com/ws/api.dll";
pub const DEFAULT_SITE_ID: u32 = 0;
pub const DEFAULT_COMPATIBILITY_LEVEL: u32 = 1193;

/// Marketplace credentials and endpoint settings, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub app_id: String,
    pub dev_id: String,
    pub cert_id: String,
    pub token: String,
    pub site_id: u32,
    pub compatibility_level: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("EBAY_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            app_id: std::env::var("EBAY_APP_ID").unwrap_or_default(),
            dev_id: std::env::var("EBAY_DEV_ID").unwrap_or_default(),
            cert_id: std::env::var("EBAY_CERT_ID").unwrap_or_default(),
            token: std::env::var("EBAY_TOKEN").unwrap_or_default(),
            site_id: std::env::var("EBAY_SITE_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SITE_ID),
            compatibility_level: std::env::var("EBAY_COMPATIBILITY_LEVEL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_COMPATIBILITY_LEVEL),
        }
    }
}
