use std::path::PathBuf;

use clap::Parser;
use lunchpick_core::domain::common::{BackendConfig, KakaoConfig, LunchpickConfig, MenuConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "lunchpick-api", version, about = "Lunch recommendation gateway")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub backend: BackendArgs,

    #[command(flatten)]
    pub kakao: KakaoArgs,

    #[command(flatten)]
    pub menu: MenuArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173,http://127.0.0.1:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct BackendArgs {
    #[arg(
        long = "backend-base-url",
        env = "BACKEND_BASE_URL",
        default_value = "http://localhost:8000"
    )]
    pub base_url: String,

    #[arg(long = "backend-timeout-secs", env = "BACKEND_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct KakaoArgs {
    #[arg(long = "kakao-rest-api-key", env = "KAKAO_REST_API_KEY", default_value = "")]
    pub rest_api_key: String,

    #[arg(
        id = "kakao_base_url",
        long = "kakao-base-url",
        env = "KAKAO_BASE_URL",
        default_value = "https://dapi.kakao.com"
    )]
    pub base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct MenuArgs {
    /// JSON file with negative_terms, food_suffixes, known_food_names and foreign_language_hints.
    #[arg(long = "menu-tables-path", env = "MENU_TABLES_PATH")]
    pub tables_path: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for LunchpickConfig {
    fn from(args: Args) -> Self {
        LunchpickConfig {
            backend: BackendConfig {
                base_url: args.backend.base_url,
                timeout_secs: args.backend.timeout_secs,
            },
            kakao: KakaoConfig {
                rest_api_key: args.kakao.rest_api_key,
                base_url: args.kakao.base_url,
            },
            menu: MenuConfig {
                tables_path: args.menu.tables_path,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_convert_to_core_config() {
        let args = Args::parse_from([
            "lunchpick-api",
            "--backend-base-url",
            "http://backend:8000",
            "--kakao-rest-api-key",
            "secret",
            "--menu-tables-path",
            "/etc/lunchpick/tables.json",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = LunchpickConfig::from(args);
        assert_eq!(config.backend.base_url, "http://backend:8000");
        assert_eq!(config.kakao.rest_api_key, "secret");
        assert_eq!(
            config.menu.tables_path,
            Some(PathBuf::from("/etc/lunchpick/tables.json"))
        );
    }
}
