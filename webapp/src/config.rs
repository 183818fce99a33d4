use chrono::{Datelike, Local};
use serde::Deserialize;
use tracing::{Level, debug, instrument};

// the site configuration ships inside the wasm bundle, there is no filesystem
// to read it from at runtime
const SITE_TOML: &str = include_str!("../site.toml");

// studentplan configuration
//
// everything here is presentation detail; the header shadow threshold is
// intentionally not part of it
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    // shown in the header, the hero and the footer
    pub brand_name: String,

    // every "shop" and "buy now" link points here
    pub storefront_url: String,

    // milliseconds before a toast dismisses itself
    pub toast_duration_ms: u32,

    // maximum number of toasts on screen
    pub toast_limit: usize,

    // footer copyright, defaults to the current year
    pub copyright_year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            brand_name: String::from("StudentPlan"),
            storefront_url: String::from("https://yourshop.com"),
            toast_duration_ms: 5000,
            toast_limit: 1,
            copyright_year: None,
        }
    }
}

impl SiteConfig {
    pub fn copyright_year(&self) -> i32 {
        self.copyright_year.unwrap_or_else(|| Local::now().year())
    }
}

// as with the server config, the table lives under [config] in the document
#[derive(Debug, Deserialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: SiteConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;
    Ok(data.config)
}

#[instrument(level=Level::DEBUG)]
pub fn read_config() -> anyhow::Result<SiteConfig> {
    debug!("reading embedded site config");

    let config = parse_config(SITE_TOML)?;

    debug!(?config, "successfully parsed site config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = read_config().expect("embedded site.toml should parse");

        assert_eq!(config.brand_name, "StudentPlan");
        assert_eq!(config.storefront_url, "https://yourshop.com");
        assert_eq!(config.toast_limit, 1);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = parse_config(
            r#"
            [config]
            brand_name = "PlannerCo"
            "#,
        )
        .unwrap();

        assert_eq!(config.brand_name, "PlannerCo");
        assert_eq!(config.storefront_url, SiteConfig::default().storefront_url);
        assert_eq!(config.toast_duration_ms, 5000);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse_config("[config\nbrand_name = ").is_err());
        assert!(parse_config("[config]\ntoast_limit = \"many\"").is_err());
    }

    #[test]
    fn explicit_copyright_year_wins() {
        let config = SiteConfig {
            copyright_year: Some(2025),
            ..SiteConfig::default()
        };

        assert_eq!(config.copyright_year(), 2025);
    }
}
