//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 路由由实体注册表派生：每个实体有 dashboard / login / register 三个页面。

use std::fmt::Display;

use entity_auth::{EntityRegistry, Page};

/// 应用路由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// 某个实体下的页面
    Entity { entity: String, page: Page },
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由
    pub fn from_path(registry: &EntityRegistry, path: &str) -> Self {
        match registry.resolve(path) {
            Some((entity, page)) => Self::Entity {
                entity: entity.name.clone(),
                page,
            },
            None => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self, registry: &EntityRegistry) -> String {
        match self {
            Self::Entity { entity, page } => registry
                .get(entity)
                .map(|e| e.path(*page))
                .unwrap_or_else(|| "/404".to_string()),
            Self::NotFound => "/404".to_string(),
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entity { entity, page } => write!(f, "{}:{:?}", entity, page),
            Self::NotFound => write!(f, "404"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_entities() {
        let registry = EntityRegistry::standard();
        assert_eq!(
            AppRoute::from_path(&registry, "/register"),
            AppRoute::Entity {
                entity: "user".into(),
                page: Page::Register
            }
        );
        assert_eq!(
            AppRoute::from_path(&registry, "/admin/"),
            AppRoute::Entity {
                entity: "admin".into(),
                page: Page::Dashboard
            }
        );
        assert_eq!(AppRoute::from_path(&registry, "/nope"), AppRoute::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        let registry = EntityRegistry::standard();
        for path in ["/", "/login", "/register", "/admin/", "/admin/login", "/admin/register"] {
            let route = AppRoute::from_path(&registry, path);
            assert_eq!(route.to_path(&registry), path);
        }
    }

    #[test]
    fn test_unknown_entity_maps_to_404() {
        let registry = EntityRegistry::standard();
        let route = AppRoute::Entity {
            entity: "ghost".into(),
            page: Page::Login,
        };
        assert_eq!(route.to_path(&registry), "/404");
        assert_eq!(AppRoute::NotFound.to_string(), "404");
    }
}
