//! 测试辅助模块
//! 提供可脚本化的协作方假实现与样例数据

use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::models::{
    Achievement, AchievementKind, Difficulty, ProblemRef, SolvedProblem, UserProfile, UserStats,
};
use crate::services::api::{AuthApi, ProfileApi, ProfileUpdate, RegisterRequest, RegisterResponse};
use crate::views::{Navigate, Notify, ToastKind};

/// 固定形状的样例资料：3 胜 1 负，6 条解题记录
pub fn sample_profile(id: &str) -> UserProfile {
    let solved_at = "2024-03-05T10:00:00Z".parse().unwrap();
    let solved_problems = (0..6)
        .map(|i| SolvedProblem {
            problem: ProblemRef {
                title: format!("Problem {}", i),
                slug: format!("problem-{}", i),
                difficulty: Difficulty::Easy,
            },
            solved_at,
        })
        .collect();

    UserProfile {
        id: id.to_string(),
        username: "alice".to_string(),
        bio: "hello there".to_string(),
        avatar: "https://cdn.example.com/a.png".to_string(),
        stats: UserStats {
            total_solved: 42,
            easy_solved: 20,
            medium_solved: 15,
            hard_solved: 7,
            arena_wins: 3,
            arena_losses: 1,
            total_submissions: 120,
            rating: 1534,
            current_streak: 4,
            longest_streak: 11,
            submission_calendar: Default::default(),
        },
        achievements: vec![Achievement {
            kind: AchievementKind::FirstSolve,
            title: "First Blood".to_string(),
            description: "Solved your first problem".to_string(),
            icon: "trophy".to_string(),
            earned_at: solved_at,
        }],
        solved_problems,
        created_at: "2023-11-20T08:30:00Z".parse().unwrap(),
    }
}

/// 同时实现资料与认证协作方的假客户端，记录所有调用
pub struct FakeApi {
    profile: Mutex<Option<UserProfile>>,
    fetch_error: Option<String>,
    update_error: Option<String>,
    register_error: Option<String>,
    register_token: String,
    fetched: Mutex<Vec<String>>,
    updates: Mutex<Vec<ProfileUpdate>>,
    registers: Mutex<Vec<RegisterRequest>>,
    token: Mutex<Option<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            profile: Mutex::new(None),
            fetch_error: None,
            update_error: None,
            register_error: None,
            register_token: "fake-token".to_string(),
            fetched: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
            registers: Mutex::new(Vec::new()),
            token: Mutex::new(None),
        }
    }

    pub fn with_fetch_error(mut self, message: &str) -> Self {
        self.fetch_error = Some(message.to_string());
        self
    }

    pub fn with_update_error(mut self, message: &str) -> Self {
        self.update_error = Some(message.to_string());
        self
    }

    pub fn with_register_error(mut self, message: &str) -> Self {
        self.register_error = Some(message.to_string());
        self
    }

    pub fn with_register_token(mut self, token: &str) -> Self {
        self.register_token = token.to_string();
        self
    }

    /// 固定 fetch_profile 返回的记录，默认按请求 ID 生成样例
    pub fn set_profile(&self, profile: UserProfile) {
        *self.profile.lock().unwrap() = Some(profile);
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetched.lock().unwrap().len()
    }

    pub fn fetched_ids(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn last_update(&self) -> Option<ProfileUpdate> {
        self.updates.lock().unwrap().last().cloned()
    }

    pub fn register_calls(&self) -> usize {
        self.registers.lock().unwrap().len()
    }

    pub fn last_register_request(&self) -> Option<RegisterRequest> {
        self.registers.lock().unwrap().last().cloned()
    }

    pub fn auth_token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileApi for FakeApi {
    async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.fetched.lock().unwrap().push(user_id.to_string());
        if let Some(message) = &self.fetch_error {
            return Err(anyhow!("{}", message));
        }
        let stored = self.profile.lock().unwrap().clone();
        Ok(stored.unwrap_or_else(|| sample_profile(user_id)))
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        self.updates.lock().unwrap().push(update.clone());
        if let Some(message) = &self.update_error {
            return Err(anyhow!("{}", message));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthApi for FakeApi {
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        self.registers.lock().unwrap().push(request.clone());
        if let Some(message) = &self.register_error {
            return Err(anyhow!("{}", message));
        }
        let mut user = sample_profile("new-user");
        user.username = request.username.clone();
        Ok(RegisterResponse {
            token: self.register_token.clone(),
            user,
        })
    }

    fn set_auth_token(&self, token: Option<String>) {
        *self.token.lock().unwrap() = token;
    }
}

/// 记录收到的全部通知
pub struct RecordingNotifier {
    messages: Mutex<Vec<(ToastKind, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<(ToastKind, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notify for RecordingNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        self.messages.lock().unwrap().push((kind, message.to_string()));
    }
}

/// 记录收到的全部跳转请求
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self {
            routes: Mutex::new(Vec::new()),
        }
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigate for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}
