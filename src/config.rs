use axum::http::HeaderValue;
use clap::Parser;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

#[derive(Parser, Debug, Clone)]
#[command(
    name    = "led-bridge",
    about   = "LED and button-counter status server for an ESP32 device",
    version
)]
pub struct Config {
    /// Host address to listen on.
    #[arg(long, env = "LED_BRIDGE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "LED_BRIDGE_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Origins allowed to make cross-origin requests. When empty, any origin
    /// is accepted (with credentials).
    #[arg(
        long = "cors-origin",
        env = "LED_BRIDGE_CORS_ORIGINS",
        value_delimiter = ','
    )]
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.port == 0 {
            anyhow::bail!("LED_BRIDGE_PORT must be a non-zero port");
        }
        for origin in &self.cors_origins {
            if origin.trim() == "*" {
                anyhow::bail!(
                    "`*` cannot be combined with credentials; \
                     leave LED_BRIDGE_CORS_ORIGINS empty to allow any origin"
                );
            }
            HeaderValue::from_str(origin.trim())
                .map_err(|_| anyhow::anyhow!("Invalid CORS origin: {origin:?}"))?;
        }
        Ok(())
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the CORS layer. Without configured origins the request origin,
    /// method and headers are mirrored back with credentials allowed.
    pub fn cors_layer(&self) -> anyhow::Result<CorsLayer> {
        if self.cors_origins.is_empty() {
            return Ok(CorsLayer::very_permissive());
        }

        let origins = self
            .cors_origins
            .iter()
            .map(|o| HeaderValue::from_str(o.trim()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let argv = std::iter::once("led-bridge").chain(args.iter().copied());
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.addr(), "0.0.0.0:8000");
        assert!(config.cors_origins.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn origins_split_on_comma() {
        let config = parse(&[
            "--cors-origin",
            "http://localhost:5173,http://192.168.1.20",
        ]);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173", "http://192.168.1.20"]
        );
        assert!(config.validate().is_ok());
        assert!(config.cors_layer().is_ok());
    }

    #[test]
    fn rejects_port_zero() {
        let config = parse(&["--port", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_wildcard_origin() {
        let config = parse(&["--cors-origin", "*"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unprintable_origin() {
        let mut config = parse(&[]);
        config.cors_origins = vec!["http://bad\norigin".to_string()];
        assert!(config.validate().is_err());
    }
}
