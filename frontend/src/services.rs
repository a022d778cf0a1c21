//! 应用服务
//!
//! 启动时构建一次，通过 Context 在组件间共享：
//! 实体注册表、绑定到 API 地址的请求助手、本地令牌存储。

use std::sync::Arc;

use entity_auth::{ApiClient, ApiConfig, EntityRegistry};
use leptos::prelude::*;
use tracing::info;

use crate::web::{FetchClient, LocalStorage};

#[derive(Clone)]
pub struct AppServices {
    pub registry: Arc<EntityRegistry>,
    pub api: ApiClient<FetchClient>,
    pub store: LocalStorage,
}

impl AppServices {
    pub fn new(registry: EntityRegistry, config: ApiConfig) -> Self {
        let api = ApiClient::new(&config, FetchClient);
        info!(
            base_url = api.base_url(),
            entities = registry.iter().count(),
            "services initialised"
        );
        Self {
            registry: Arc::new(registry),
            api,
            store: LocalStorage,
        }
    }
}

/// 从 Context 获取应用服务
pub fn use_services() -> AppServices {
    use_context::<AppServices>().expect("AppServices should be provided")
}
