//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 路由本身不做认证判断，守卫由各页面在挂载时通过 `entity_auth::gate` 完成。

use std::sync::Arc;

use entity_auth::EntityRegistry;
use leptos::prelude::*;
use tracing::{debug, info};
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 实体注册表，用于解析路径
    registry: StoredValue<Arc<EntityRegistry>>,
}

impl RouterService {
    /// 创建新的路由服务
    fn new(registry: Arc<EntityRegistry>) -> Self {
        // 从 URL 解析初始路由
        let path = current_path();
        let initial_route = AppRoute::from_path(&registry, &path);

        // 规范化地址栏，例如 "/admin" -> "/admin/"
        if let AppRoute::Entity { .. } = initial_route {
            let canonical = initial_route.to_path(&registry);
            if canonical != path {
                replace_history_state(&canonical);
            }
        }

        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            registry: StoredValue::new(registry),
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    fn resolve(&self, path: &str) -> AppRoute {
        self.registry
            .with_value(|registry| AppRoute::from_path(registry, path))
    }

    /// 导航到指定路径（pushState）
    pub fn navigate(&self, path: &str) {
        let target = self.resolve(path);
        debug!(%path, route = %target, "navigate");
        push_history_state(path);
        self.set_route.set(target);
    }

    /// 重定向到指定路径（replaceState，不留下历史记录）
    pub fn redirect(&self, path: &str) {
        let target = self.resolve(path);
        info!(%path, route = %target, "redirect");
        replace_history_state(path);
        self.set_route.set(target);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = router.resolve(&current_path());
            router.set_route.set(target);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(registry: Arc<EntityRegistry>) -> RouterService {
    let router = RouterService::new(registry);
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 实体注册表
    registry: Arc<EntityRegistry>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(registry);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
