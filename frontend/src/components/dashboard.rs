use entity_auth::{EntityConfig, Page, gate};
use leptos::prelude::*;

use crate::services::use_services;
use crate::web::router::use_router;

/// 占位面板，仅做会话守卫
#[component]
pub fn DashboardPage(entity: EntityConfig) -> impl IntoView {
    let services = use_services();
    let router = use_router();

    // 如果未认证则重定向到登录页
    Effect::new({
        let entity = entity.clone();
        let store = services.store;
        move |_| {
            if let Some(target) = gate(&entity, Page::Dashboard, &store) {
                router.redirect(&target);
            }
        }
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-7xl mx-auto">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <h1 class="text-xl font-bold px-4">
                        "Welcome to " {entity.name} " Dashboard"
                    </h1>
                </div>
            </div>
        </div>
    }
}
