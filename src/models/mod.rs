use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 用户资料（服务端返回的完整记录）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
    pub stats: UserStats,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub solved_problems: Vec<SolvedProblem>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 用户统计信息
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_solved: u32,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
    pub arena_wins: u32,
    pub arena_losses: u32,
    pub total_submissions: u32,
    pub rating: i32,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    /// 提交日历，键为 "YYYY-MM-DD"，值为当日提交次数
    #[serde(default)]
    pub submission_calendar: HashMap<String, u32>,
}

impl UserStats {
    /// 竞技场胜率（四舍五入的百分比）
    pub fn win_rate(&self) -> u32 {
        win_rate(self.arena_wins, self.arena_losses)
    }
}

/// 胜率百分比，无对局记录时为 0
pub fn win_rate(wins: u32, losses: u32) -> u32 {
    let total = wins + losses;
    if total == 0 {
        return 0;
    }
    (wins as f64 / total as f64 * 100.0).round() as u32
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// 成就记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub earned_at: chrono::DateTime<chrono::Utc>,
}

/// 成就类别；未知标签归入 Other 并保留原文，旧客户端解析新数据时不报错
#[derive(Debug, Clone, PartialEq)]
pub enum AchievementKind {
    FirstSolve,
    ArenaWinner,
    StreakMaster,
    Other(String),
}

impl AchievementKind {
    pub fn as_str(&self) -> &str {
        match self {
            AchievementKind::FirstSolve => "first_solve",
            AchievementKind::ArenaWinner => "arena_winner",
            AchievementKind::StreakMaster => "streak_master",
            AchievementKind::Other(tag) => tag,
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "first_solve" => AchievementKind::FirstSolve,
            "arena_winner" => AchievementKind::ArenaWinner,
            "streak_master" => AchievementKind::StreakMaster,
            _ => AchievementKind::Other(tag.to_string()),
        }
    }
}

impl Serialize for AchievementKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AchievementKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(AchievementKind::from_tag(&tag))
    }
}

/// 已解决题目记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolvedProblem {
    pub problem: ProblemRef,
    pub solved_at: chrono::DateTime<chrono::Utc>,
}

/// 题目引用，列表展示所需的最小字段
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProblemRef {
    pub title: String,
    pub slug: String,
    pub difficulty: Difficulty,
}

/// 账户角色
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 教师附加资料，仅教师角色注册时提交
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TeacherProfile {
    pub institution: String,
    pub department: String,
    pub experience: String,
    pub specialization: Vec<String>,
}

/// 注册时的角色选择；教师子结构只在选中教师角色时存在
#[derive(Debug, Clone, PartialEq)]
pub enum RoleSelection {
    Student,
    Teacher(TeacherProfile),
}

impl RoleSelection {
    pub fn role(&self) -> UserRole {
        match self {
            RoleSelection::Student => UserRole::Student,
            RoleSelection::Teacher(_) => UserRole::Teacher,
        }
    }

    pub fn teacher_profile(&self) -> Option<&TeacherProfile> {
        match self {
            RoleSelection::Student => None,
            RoleSelection::Teacher(profile) => Some(profile),
        }
    }
}

impl Default for RoleSelection {
    fn default() -> Self {
        RoleSelection::Student
    }
}

/// 注册表单状态
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: RoleSelection,
}

impl RegistrationForm {
    /// 切换账户角色；角色变化时重置教师子结构
    pub fn set_role(&mut self, role: UserRole) {
        if self.role.role() == role {
            return;
        }
        self.role = match role {
            UserRole::Student => RoleSelection::Student,
            UserRole::Teacher => RoleSelection::Teacher(TeacherProfile::default()),
        };
    }

    /// 教师子表单，仅教师角色时可用
    pub fn teacher_profile_mut(&mut self) -> Option<&mut TeacherProfile> {
        match &mut self.role {
            RoleSelection::Student => None,
            RoleSelection::Teacher(profile) => Some(profile),
        }
    }
}

// ==================== 测试 ====================
