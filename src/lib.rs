//! Codera 刷题平台客户端核心库
//!
//! 提供用户资料与注册两个界面的全部客户端逻辑：类型化数据模型、REST API
//! 客户端、显式认证会话、提交日历纯函数，以及供界面外壳驱动的视图状态机。
//! 渲染、样式与路由实现由外部界面层承担。

pub mod logging;
pub mod models;
pub mod services;
pub mod views;

#[cfg(test)]
mod test_util;

pub use models::{
    Achievement, AchievementKind, Difficulty, ProblemRef, RegistrationForm, RoleSelection,
    SolvedProblem, TeacherProfile, UserProfile, UserRole, UserStats,
};
pub use services::{ApiClient, ApiConfig, AuthSession};
pub use views::{LogNotifier, Navigate, Notify, ProfileView, RegisterView, ToastKind};
