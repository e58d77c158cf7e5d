//! 认证会话模块
//! 维护当前登录身份的显式生命周期，并承接按角色注册流程

use std::sync::{Arc, RwLock};

use anyhow::Result;

use crate::models::{RoleSelection, UserProfile};
use crate::services::api::{AuthApi, RegisterRequest};

struct SignedIn {
    user: UserProfile,
    token: String,
}

/// 认证会话：当前登录用户的唯一存取入口
pub struct AuthSession {
    api: Arc<dyn AuthApi>,
    current: RwLock<Option<SignedIn>>,
}

impl AuthSession {
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self {
            api,
            current: RwLock::new(None),
        }
    }

    /// 当前登录用户，未登录时为 None
    pub fn current_user(&self) -> Option<UserProfile> {
        self.current.read().unwrap().as_ref().map(|s| s.user.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.read().unwrap().is_some()
    }

    /// 当前会话的鉴权令牌
    pub fn token(&self) -> Option<String> {
        self.current.read().unwrap().as_ref().map(|s| s.token.clone())
    }

    /// 写入会话并让后续请求携带令牌
    pub fn set_signed_in(&self, user: UserProfile, token: String) {
        self.api.set_auth_token(Some(token.clone()));
        *self.current.write().unwrap() = Some(SignedIn { user, token });
    }

    /// 退出登录，清空会话与请求令牌
    pub fn sign_out(&self) {
        self.api.set_auth_token(None);
        *self.current.write().unwrap() = None;
    }

    /// 按角色注册新账户，成功后自动登录
    pub async fn register_with_role(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: &RoleSelection,
    ) -> Result<UserProfile> {
        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: role.role(),
            teacher_profile: role.teacher_profile().cloned(),
        };
        let response = self.api.register(&request).await?;
        log::info!(
            "registered new {} account: {}",
            request.role,
            response.user.username
        );
        self.set_signed_in(response.user.clone(), response.token);
        Ok(response.user)
    }
}

// ==================== 测试 ====================
