//! 实体认证前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `services`: 注册表、请求助手与令牌存储
//! - `components`: UI 组件层，同一组表单按实体配置复用

mod components {
    pub mod dashboard;
    mod form_layout;
    mod form_state;
    pub mod login;
    mod notice_dialog;
    pub mod register;
}
mod services;

use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;
use crate::services::{AppServices, use_services};

use entity_auth::{ApiConfig, EntityRegistry, Page};
use leptos::prelude::*;

// 浏览器原生 Web API 封装模块
pub(crate) mod web {
    mod alert;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use alert::alert;
    pub use http::FetchClient;
    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

fn not_found() -> AnyView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
            </div>
        </div>
    }
    .into_any()
}

/// 路由匹配函数
///
/// 根据 AppRoute 返回对应实体配置下的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    let AppRoute::Entity { entity, page } = route else {
        return not_found();
    };
    let Some(entity) = use_services().registry.get(&entity).cloned() else {
        return not_found();
    };

    match page {
        Page::Register => view! { <RegisterPage entity=entity /> }.into_any(),
        Page::Login => view! { <LoginPage entity=entity /> }.into_any(),
        Page::Dashboard => view! { <DashboardPage entity=entity /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 构建服务并注入 Context
    let services = AppServices::new(EntityRegistry::standard(), ApiConfig::from_env());
    let registry = services.registry.clone();
    provide_context(services);

    view! {
        // 2. 路由器组件：用注册表解析路径
        <Router registry=registry>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
