//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到请求对象的转换
//! - 提交结果的落地（字段错误 / 弹窗 / 成功确认框）

use std::future::Future;

use entity_auth::form::UNEXPECTED_RESPONSE;
use entity_auth::{FormPhase, Notice, SubmitOutcome};
use entity_auth_shared::{Field, FieldErrors, LoginRequest, RegisterRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web::alert;

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub email: RwSignal<String>,
    pub name: RwSignal<String>,
    pub password: RwSignal<String>,
    pub password_confirmation: RwSignal<String>,

    pub field_errors: RwSignal<FieldErrors>,
    pub phase: RwSignal<FormPhase>,
    /// 待展示的成功确认框
    pub notice: RwSignal<Option<Notice>>,
}

impl FormState {
    /// 创建新的表单状态，所有字段为空
    pub fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            password_confirmation: RwSignal::new(String::new()),
            field_errors: RwSignal::new(FieldErrors::new()),
            phase: RwSignal::new(FormPhase::Idle),
            notice: RwSignal::new(None),
        }
    }

    /// 清空所有输入和字段错误
    pub fn reset(&self) {
        self.email.set(String::new());
        self.name.set(String::new());
        self.password.set(String::new());
        self.password_confirmation.set(String::new());
        self.field_errors.set(FieldErrors::new());
    }

    /// 字段对应的输入信号
    pub fn value(&self, field: Field) -> RwSignal<String> {
        match field {
            Field::Email => self.email,
            Field::Name => self.name,
            Field::Password => self.password,
            Field::PasswordConfirmation => self.password_confirmation,
        }
    }

    /// 字段错误（响应式）
    pub fn error(&self, field: Field) -> Signal<Option<String>> {
        let errors = self.field_errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    pub fn is_busy(&self) -> Signal<bool> {
        let phase = self.phase;
        Signal::derive(move || phase.get().is_busy())
    }

    pub fn to_register_request(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.email.get_untracked(),
            name: self.name.get_untracked(),
            password: self.password.get_untracked(),
            password_confirmation: self.password_confirmation.get_untracked(),
        }
    }

    pub fn to_login_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }

    /// 提交：通过在途守卫后才启动任务，重复提交直接忽略
    ///
    /// `clear_on_success` 为 true 时成功后清空表单（注册）。
    pub fn submit<F>(&self, task: F, clear_on_success: bool)
    where
        F: Future<Output = SubmitOutcome> + 'static,
    {
        if !self.start() {
            return;
        }

        let form = *self;
        spawn_local(async move {
            let outcome = task.await;
            form.phase.update(|p| p.finish(&outcome));
            form.apply(outcome, clear_on_success);
        });
    }

    /// 进入提交阶段并清空上一轮的字段错误
    ///
    /// 已在提交或跳转中时返回 false，状态不变。
    fn start(&self) -> bool {
        let started = self.phase.try_update(|p| p.begin()).unwrap_or(false);
        if started {
            self.field_errors.set(FieldErrors::new());
        }
        started
    }

    fn apply(&self, outcome: SubmitOutcome, clear_on_success: bool) {
        match outcome {
            SubmitOutcome::FieldErrors(errors) => self.field_errors.set(errors),
            SubmitOutcome::Alert(message) => alert(&message),
            SubmitOutcome::Unexpected => alert(UNEXPECTED_RESPONSE),
            SubmitOutcome::Success(notice) => {
                if clear_on_success {
                    self.reset();
                }
                self.notice.set(Some(notice));
            }
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_auth::EntityRegistry;

    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        test();
    }

    fn filled() -> FormState {
        let form = FormState::new();
        form.email.set("ann@example.com".into());
        form.name.set("Ann".into());
        form.password.set("secret123".into());
        form.password_confirmation.set("secret123".into());

        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, "The email has already been taken.");
        form.field_errors.set(errors);
        form
    }

    fn user_notice() -> Notice {
        let registry = EntityRegistry::standard();
        Notice::registered(registry.get("user").unwrap())
    }

    #[test]
    fn test_register_success_clears_every_field() {
        with_owner(|| {
            let form = filled();
            assert!(form.start());
            form.phase.update(|p| p.finish(&SubmitOutcome::Success(user_notice())));
            form.apply(SubmitOutcome::Success(user_notice()), true);

            for field in [
                Field::Email,
                Field::Name,
                Field::Password,
                Field::PasswordConfirmation,
            ] {
                assert_eq!(form.value(field).get_untracked(), "");
                assert_eq!(form.error(field).get_untracked(), None);
            }
            assert!(form.field_errors.get_untracked().is_empty());
            assert_eq!(form.phase.get_untracked(), FormPhase::Redirecting);
            assert_eq!(form.notice.get_untracked(), Some(user_notice()));
        });
    }

    #[test]
    fn test_login_success_keeps_inputs() {
        with_owner(|| {
            let form = filled();
            form.apply(SubmitOutcome::Success(user_notice()), false);

            assert_eq!(form.email.get_untracked(), "ann@example.com");
            assert_eq!(form.password.get_untracked(), "secret123");
            assert!(form.notice.get_untracked().is_some());
        });
    }

    #[test]
    fn test_start_clears_previous_field_errors() {
        with_owner(|| {
            let form = filled();
            assert_eq!(
                form.error(Field::Email).get_untracked().as_deref(),
                Some("The email has already been taken.")
            );

            assert!(form.start());
            assert!(form.field_errors.get_untracked().is_empty());
            assert_eq!(form.error(Field::Email).get_untracked(), None);
            // 输入本身保留，只有错误被清空
            assert_eq!(form.email.get_untracked(), "ann@example.com");
        });
    }

    #[test]
    fn test_start_ignored_while_in_flight() {
        with_owner(|| {
            let form = FormState::new();
            assert!(form.start());

            let mut errors = FieldErrors::new();
            errors.insert(Field::Password, "Too short.");
            form.field_errors.set(errors.clone());

            assert!(!form.start());
            assert_eq!(form.field_errors.get_untracked(), errors);
            assert!(form.is_busy().get_untracked());
        });
    }

    #[test]
    fn test_field_errors_outcome_replaces_map() {
        with_owner(|| {
            let form = filled();
            assert!(form.start());

            let mut errors = FieldErrors::new();
            errors.insert(Field::Name, "The name field is required.");
            let outcome = SubmitOutcome::FieldErrors(errors);
            form.phase.update(|p| p.finish(&outcome));
            form.apply(outcome, true);

            assert_eq!(form.error(Field::Email).get_untracked(), None);
            assert_eq!(
                form.error(Field::Name).get_untracked().as_deref(),
                Some("The name field is required.")
            );
            assert_eq!(form.email.get_untracked(), "ann@example.com");
            assert_eq!(form.phase.get_untracked(), FormPhase::Idle);
        });
    }
}
