use entity_auth::{AuthFlow, EntityConfig, Page, gate};
use leptos::prelude::*;
use leptos::web_sys::SubmitEvent;

use super::form_layout::FormLayout;
use super::form_state::FormState;
use super::notice_dialog::NoticeDialog;
use crate::services::use_services;
use crate::web::router::use_router;

#[component]
pub fn RegisterPage(entity: EntityConfig) -> impl IntoView {
    let services = use_services();
    let router = use_router();
    let form = FormState::new();

    // 已有令牌则直接回到实体首页，不发任何请求
    Effect::new({
        let entity = entity.clone();
        let store = services.store;
        move |_| {
            if let Some(target) = gate(&entity, Page::Register, &store) {
                router.redirect(&target);
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let req = form.to_register_request();
        let entity = entity.clone();
        let api = services.api.clone();
        let store = services.store;

        form.submit(
            async move { AuthFlow::new(&entity, &api, &store).register(&req).await },
            true,
        );
    };

    view! {
        <FormLayout
            title="Register"
            button_text="Register"
            state=form
            with_name=true
            with_confirmation=true
            on_submit=on_submit
        />
        <NoticeDialog notice=form.notice phase=form.phase />
    }
}
