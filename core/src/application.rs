use std::sync::Arc;

use crate::{
    domain::{
        common::{LunchpickConfig, entities::app_errors::CoreError, services::Service},
        menu::MenuTokenValidator,
    },
    infrastructure::{
        backend::LunchBackendClient, kakao::KakaoLocalClient, menu::resolve_tables,
    },
};

pub type LunchpickService = Service<LunchBackendClient, LunchBackendClient, KakaoLocalClient>;

pub fn create_service(config: LunchpickConfig) -> Result<LunchpickService, CoreError> {
    let tables = resolve_tables(&config.menu)?;
    let backend_client = Arc::new(LunchBackendClient::new(&config.backend)?);
    let kakao_client = Arc::new(KakaoLocalClient::new(&config.kakao));

    Ok(Service::new(
        MenuTokenValidator::new(tables),
        Arc::clone(&backend_client),
        backend_client,
        kakao_client,
    ))
}
