//! 成功确认框
//!
//! 展示 `Notice`，确认或关闭后按 `Notice::target` 导航。

use entity_auth::{FormPhase, Notice};
use leptos::prelude::*;

use crate::web::router::use_router;

#[component]
pub fn NoticeDialog(
    /// 待展示的确认框，`Some` 时打开
    notice: RwSignal<Option<Notice>>,
    /// 所属表单的阶段，关闭后未跳转时释放
    phase: RwSignal<FormPhase>,
) -> impl IntoView {
    let router = use_router();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let confirmed = StoredValue::new(false);

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if notice.with(Option::is_some) {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    // 确认按钮、遮罩、Esc 最终都会触发 close 事件
    let on_close = move |_| {
        let was_confirmed = confirmed.get_value();
        confirmed.set_value(false);

        let Some(current) = notice.get_untracked() else {
            return;
        };
        notice.set(None);

        match current.target(was_confirmed) {
            Some(path) => router.navigate(path),
            None => phase.update(|p| p.release()),
        }
    };

    let on_confirm = move |_| {
        confirmed.set_value(true);
        if let Some(dialog) = dialog_ref.get_untracked() {
            dialog.close();
        }
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=on_close>
            <div class="modal-box text-center">
                <div class="text-success text-5xl mb-2">"✓"</div>
                <h3 class="font-bold text-lg">
                    {move || notice.with(|n| n.as_ref().map(|n| n.title.clone()).unwrap_or_default())}
                </h3>
                <div class="modal-action justify-center">
                    <button class="btn btn-primary" on:click=on_confirm>
                        {move || notice.with(|n| n.as_ref().map(|n| n.confirm_label.clone()).unwrap_or_default())}
                    </button>
                </div>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
