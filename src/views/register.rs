//! 注册视图模块
//! 本地校验、按角色注册提交与注册后跳转

use std::sync::Arc;

use crate::models::RegistrationForm;
use crate::services::auth::AuthSession;
use crate::views::{Navigate, Notify, ToastKind};

/// 注册成功后跳转的目标路由
const AFTER_REGISTER_ROUTE: &str = "/problems";
/// 密码最短长度（字符数）
const MIN_PASSWORD_CHARS: usize = 6;

/// 注册视图状态机
pub struct RegisterView {
    auth: Arc<AuthSession>,
    navigator: Arc<dyn Navigate>,
    notifier: Arc<dyn Notify>,
    pub form: RegistrationForm,
    error: Option<String>,
    submitting: bool,
}

impl RegisterView {
    pub fn new(auth: Arc<AuthSession>, navigator: Arc<dyn Navigate>, notifier: Arc<dyn Notify>) -> Self {
        Self {
            auth,
            navigator,
            notifier,
            form: RegistrationForm::default(),
            error: None,
            submitting: false,
        }
    }

    /// 表单下方持久显示的错误信息
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// 提交中，界面应禁用提交按钮
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// 本地校验，返回首个未通过项的提示。先查两次输入是否一致，再查长度。
    fn validate(form: &RegistrationForm) -> Option<String> {
        if form.password != form.confirm_password {
            return Some("Passwords do not match".to_string());
        }
        if form.password.chars().count() < MIN_PASSWORD_CHARS {
            return Some("Password must be at least 6 characters".to_string());
        }
        None
    }

    /// 提交注册。本地校验未通过时不触达认证协作方，
    /// 校验错误只显示在表单内，协作方错误同时弹出通知。
    pub async fn submit(&mut self) -> Result<(), String> {
        self.error = None;

        if let Some(message) = Self::validate(&self.form) {
            self.error = Some(message.clone());
            return Err(message);
        }

        self.submitting = true;
        let result = self
            .auth
            .register_with_role(
                &self.form.username,
                &self.form.email,
                &self.form.password,
                &self.form.role,
            )
            .await;
        self.submitting = false;

        match result {
            Ok(user) => {
                log::info!("registration complete for {}", user.username);
                self.notifier.notify(ToastKind::Success, "Welcome to Codera!");
                self.navigator.navigate(AFTER_REGISTER_ROUTE);
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(message.clone());
                self.notifier.notify(ToastKind::Error, &message);
                Err(message)
            }
        }
    }
}

// ==================== 测试 ====================
