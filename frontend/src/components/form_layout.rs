//! 表单布局组件
//!
//! 纯展示：邮箱/密码字段，可选的姓名和确认密码字段，
//! 字段下方的内联错误，以及触发所属表单提交的按钮。

use entity_auth_shared::Field;
use leptos::prelude::*;
use leptos::web_sys::SubmitEvent;

use super::form_state::FormState;

/// 单个输入字段
#[component]
fn FormField(
    state: FormState,
    field: Field,
    #[prop(into)] label: String,
    input_type: &'static str,
) -> impl IntoView {
    let value = state.value(field);
    let error = state.error(field);
    let id = field.as_str();

    view! {
        <div class="form-control">
            <label for=id class="label">
                <span class="label-text">{label.clone()}</span>
            </label>
            <input
                id=id
                name=id
                type=input_type
                placeholder=label
                required
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class=move || {
                    if error.get().is_some() {
                        "input input-bordered input-error w-full"
                    } else {
                        "input input-bordered w-full"
                    }
                }
            />
            <Show when=move || error.get().is_some()>
                <label class="label">
                    <span class="label-text-alt text-error">
                        {move || error.get().unwrap_or_default()}
                    </span>
                </label>
            </Show>
        </div>
    }
}

/// 注册/登录共用的表单布局
#[component]
pub fn FormLayout(
    /// 表单标题
    #[prop(into)]
    title: String,
    /// 提交按钮文字
    #[prop(into)]
    button_text: String,
    state: FormState,
    /// 是否显示姓名字段
    #[prop(optional)]
    with_name: bool,
    /// 是否显示确认密码字段
    #[prop(optional)]
    with_confirmation: bool,
    #[prop(into)] on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let busy = state.is_busy();

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="card shrink-0 w-full max-w-sm shadow-2xl bg-base-100">
                <form class="card-body" on:submit=move |ev| on_submit.run(ev)>
                    <h2 class="card-title text-2xl justify-center mb-2">{title}</h2>

                    <FormField state=state field=Field::Email label="Email" input_type="email" />
                    {with_name.then(|| view! {
                        <FormField state=state field=Field::Name label="Name" input_type="text" />
                    })}
                    <FormField state=state field=Field::Password label="Password" input_type="password" />
                    {with_confirmation.then(|| view! {
                        <FormField
                            state=state
                            field=Field::PasswordConfirmation
                            label="Confirm Password"
                            input_type="password"
                        />
                    })}

                    <div class="form-control mt-6">
                        <button type="submit" class="btn btn-primary w-full" disabled=move || busy.get()>
                            <Show when=move || busy.get()>
                                <span class="loading loading-spinner"></span>
                            </Show>
                            {button_text}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
