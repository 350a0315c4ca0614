use clap::Parser;

/// Host for the export client: serves the compiled UI and forwards `/api/*`
/// to the export service.
#[derive(Parser, Debug, Clone)]
#[command(name = "backend")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of the export service that handles `/api/*`
    #[arg(long, env = "EXPORT_API_URL", default_value = "http://127.0.0.1:9090")]
    pub api_url: String,

    /// Open the UI in the default browser once the server is up
    #[arg(long, env = "OPEN_BROWSER", default_value_t = false)]
    pub open_browser: bool,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_are_used() {
        let config = Config::try_parse_from([
            "backend",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--api-url",
            "http://export:7000",
            "--open-browser",
        ])
        .unwrap();
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert_eq!(config.api_url, "http://export:7000");
        assert!(config.open_browser);
    }

    #[test]
    fn port_must_be_numeric() {
        assert!(Config::try_parse_from(["backend", "--port", "http"]).is_err());
    }
}
