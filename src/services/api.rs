//! Codera REST API 客户端模块
//! 封装用户资料与注册接口，并定义供视图层依赖的协作方 trait

use std::sync::RwLock;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{TeacherProfile, UserProfile, UserRole};

/// API 客户端配置
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,    // 服务端地址，含 /api 前缀
    pub timeout_secs: u64,   // 单次请求超时（秒）
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

// ==================== 请求与响应载荷 ====================

/// 资料更新请求，简介与头像整体提交
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub bio: String,
    pub avatar: String,
}

/// 注册请求载荷
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_profile: Option<TeacherProfile>,
}

/// 注册成功响应
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
    pub user: UserProfile,
}

/// 资料查询响应的外层信封
#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
    user: UserProfile,
}

/// 错误响应携带的用户可读信息
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

// ==================== 协作方 trait ====================

/// 资料数据协作方：按 ID 查询与部分更新
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile>;
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<()>;
}

/// 认证协作方：注册新账户并维护后续请求的鉴权令牌
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse>;

    /// 更新后续请求携带的令牌，None 表示清除
    fn set_auth_token(&self, token: Option<String>);
}

// ==================== HTTP 实现 ====================

/// Codera REST API 客户端
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        log::debug!("{} {}{}", method, self.base_url, path);
        let mut builder = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.token.read().unwrap().clone() {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        builder
    }

    /// 非 2xx 响应转为错误，优先取响应体中的 message 字段
    async fn error_from_response(response: reqwest::Response) -> anyhow::Error {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) => anyhow!(body.message),
            Err(_) => anyhow!("Request failed with status {}", status),
        }
    }
}

#[async_trait]
impl ProfileApi for ApiClient {
    async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile> {
        let response = self
            .request(reqwest::Method::GET, &format!("/users/{}", user_id))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        let envelope = response.json::<ProfileEnvelope>().await?;
        Ok(envelope.user)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        let response = self
            .request(reqwest::Method::PUT, "/users/profile")
            .json(update)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        let response = self
            .request(reqwest::Method::POST, "/auth/register")
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(response.json::<RegisterResponse>().await?)
    }

    fn set_auth_token(&self, token: Option<String>) {
        *self.token.write().unwrap() = token;
    }
}

// ==================== 测试 ====================
