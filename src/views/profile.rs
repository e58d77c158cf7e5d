//! 用户资料视图模块
//! 资料加载、统计展示、提交日历与简介编辑的视图状态机

use std::sync::Arc;

use crate::models::{SolvedProblem, UserProfile};
use crate::services::api::{ProfileApi, ProfileUpdate};
use crate::services::auth::AuthSession;
use crate::services::calendar::{self, MonthCursor, Week};
use crate::views::{Notify, ToastKind};

/// 最近动态面板展示的条目数
const RECENT_ACTIVITY_LIMIT: usize = 5;

/// 资料视图所处的加载阶段
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    Loading,
    NotFound,
    Loaded(UserProfile),
}

/// 简介编辑草稿
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditForm {
    pub bio: String,
    pub avatar: String,
}

/// 用户资料视图状态机
pub struct ProfileView {
    api: Arc<dyn ProfileApi>,
    session: Arc<AuthSession>,
    notifier: Arc<dyn Notify>,
    state: ProfileState,
    requested_id: Option<String>,
    editing: bool,
    edit_form: EditForm,
    cursor: MonthCursor,
}

impl ProfileView {
    pub fn new(api: Arc<dyn ProfileApi>, session: Arc<AuthSession>, notifier: Arc<dyn Notify>) -> Self {
        Self {
            api,
            session,
            notifier,
            state: ProfileState::Loading,
            requested_id: None,
            editing: false,
            edit_form: EditForm::default(),
            cursor: MonthCursor::current(),
        }
    }

    /// 当前加载阶段
    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    /// 已加载的资料记录
    pub fn profile(&self) -> Option<&UserProfile> {
        match &self.state {
            ProfileState::Loaded(profile) => Some(profile),
            _ => None,
        }
    }

    /// 是否在查看自己的资料：无路由参数，或参数等于登录用户 ID
    pub fn is_own_profile(&self) -> bool {
        let current = match self.session.current_user() {
            Some(user) => user,
            None => return false,
        };
        match &self.requested_id {
            Some(id) => *id == current.id,
            None => true,
        }
    }

    // ==================== 资料加载 ====================

    /// 加载资料。路由参数指定目标用户，缺省时回退到登录用户自身。
    /// 两种情况都走资料接口重新拉取，登录态只提供 ID，保证展示的记录形状一致。
    pub async fn load(&mut self, requested_id: Option<&str>) {
        self.requested_id = requested_id.map(|id| id.to_string());
        self.state = ProfileState::Loading;
        self.editing = false;

        let target_id = match &self.requested_id {
            Some(id) => id.clone(),
            None => match self.session.current_user() {
                Some(user) => user.id,
                None => {
                    // 既无路由参数也未登录，没有可查询的对象
                    self.state = ProfileState::NotFound;
                    return;
                }
            },
        };

        match self.api.fetch_profile(&target_id).await {
            Ok(profile) => {
                self.state = ProfileState::Loaded(profile);
            }
            Err(e) => {
                log::warn!("profile fetch for {} failed: {}", target_id, e);
                self.notifier.notify(ToastKind::Error, "Failed to fetch user profile");
                self.state = ProfileState::NotFound;
            }
        }
    }

    // ==================== 简介编辑 ====================

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn edit_form(&self) -> &EditForm {
        &self.edit_form
    }

    pub fn edit_form_mut(&mut self) -> &mut EditForm {
        &mut self.edit_form
    }

    /// 进入编辑态，草稿从当前记录初始化；只能编辑自己的资料
    pub fn begin_edit(&mut self) {
        if !self.is_own_profile() {
            return;
        }
        if let ProfileState::Loaded(profile) = &self.state {
            self.edit_form = EditForm {
                bio: profile.bio.clone(),
                avatar: profile.avatar.clone(),
            };
            self.editing = true;
        }
    }

    /// 放弃草稿退出编辑态
    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.edit_form = EditForm::default();
    }

    /// 保存简介与头像，仅在服务端确认后才合并到本地记录
    pub async fn save_profile(&mut self) -> Result<(), String> {
        let update = ProfileUpdate {
            bio: self.edit_form.bio.clone(),
            avatar: self.edit_form.avatar.clone(),
        };
        match self.api.update_profile(&update).await {
            Ok(()) => {
                if let ProfileState::Loaded(profile) = &mut self.state {
                    profile.bio = update.bio;
                    profile.avatar = update.avatar;
                }
                self.editing = false;
                self.notifier.notify(ToastKind::Success, "Profile updated successfully");
                Ok(())
            }
            Err(e) => {
                log::warn!("profile update failed: {}", e);
                self.notifier.notify(ToastKind::Error, "Failed to update profile");
                Err(e.to_string())
            }
        }
    }

    // ==================== 日历与统计 ====================

    /// 日历游标当前指向的年月
    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    /// 日历标题，形如 "March 2024"
    pub fn month_label(&self) -> String {
        self.cursor.label()
    }

    /// 上一月，无下限
    pub fn prev_month(&mut self) {
        self.cursor.prev();
    }

    /// 下一月，最多翻到当前真实月份
    pub fn next_month(&mut self) {
        self.cursor.next(MonthCursor::current());
    }

    /// 向后翻页按钮是否可用
    pub fn can_advance_month(&self) -> bool {
        self.cursor.can_advance(MonthCursor::current())
    }

    /// 游标月份的日历网格
    pub fn calendar_weeks(&self) -> Vec<Week> {
        match &self.state {
            ProfileState::Loaded(profile) => calendar::month_grid(
                self.cursor.year,
                self.cursor.month0,
                &profile.stats.submission_calendar,
            ),
            _ => Vec::new(),
        }
    }

    /// 竞技场胜率（百分比）
    pub fn win_rate(&self) -> u32 {
        self.profile().map(|p| p.stats.win_rate()).unwrap_or(0)
    }

    /// 最近解题动态，最多 5 条
    pub fn recent_activity(&self) -> &[SolvedProblem] {
        match &self.state {
            ProfileState::Loaded(profile) => {
                let count = profile.solved_problems.len().min(RECENT_ACTIVITY_LIMIT);
                &profile.solved_problems[..count]
            }
            _ => &[],
        }
    }
}

// ==================== 测试 ====================
