use std::path::PathBuf;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct LunchpickConfig {
    pub backend: BackendConfig,
    pub kakao: KakaoConfig,
    pub menu: MenuConfig,
}

#[derive(Clone, Debug)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct KakaoConfig {
    pub rest_api_key: String,
    pub base_url: String,
}

#[derive(Clone, Debug, Default)]
pub struct MenuConfig {
    /// JSON file replacing the built-in classification tables.
    pub tables_path: Option<PathBuf>,
}
