//! 提交日历模块
//! 将按日提交次数映射渲染为星期日对齐的月视图网格，并提供月份游标导航

use std::collections::HashMap;

use chrono::{Datelike, Local, NaiveDate};

/// 每周固定 7 个格子
pub const DAYS_PER_WEEK: usize = 7;

/// 一周的格子序列，月首月末的空位为 None
pub type Week = [Option<DayCell>; DAYS_PER_WEEK];

/// 日历格子：当月第几天及该日提交次数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayCell {
    pub day: u32,
    pub submissions: u32,
}

impl DayCell {
    /// 该格子的热度层级
    pub fn heat_level(&self) -> HeatLevel {
        HeatLevel::for_count(self.submissions)
    }
}

/// 提交热度层级
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatLevel {
    None,
    Low,
    Medium,
    High,
}

impl HeatLevel {
    /// 次数到层级：0 无，1-2 低，3-4 中，5 及以上高
    pub fn for_count(count: u32) -> Self {
        if count == 0 {
            HeatLevel::None
        } else if count < 3 {
            HeatLevel::Low
        } else if count < 5 {
            HeatLevel::Medium
        } else {
            HeatLevel::High
        }
    }
}

// ==================== 月视图网格 ====================

/// 指定月份的月视图网格。月份从 0 起（一月 = 0）。
/// 每周固定 7 格，月首按星期日对齐补空位，月末补齐最后一周。
/// 映射中缺失或格式不符的日期键一律计为 0 次提交。
pub fn month_grid(year: i32, month0: u32, calendar: &HashMap<String, u32>) -> Vec<Week> {
    let first = match first_of_month(year, month0) {
        Some(date) => date,
        None => return Vec::new(),
    };
    let total_days = days_in_month_of(first);
    let offset = first.weekday().num_days_from_sunday() as usize;

    let mut weeks = Vec::new();
    let mut week: Week = [None; DAYS_PER_WEEK];
    let mut column = offset;

    for day in 1..=total_days {
        let key = date_key(year, month0, day);
        let submissions = calendar.get(&key).copied().unwrap_or(0);
        week[column] = Some(DayCell { day, submissions });
        column += 1;
        if column == DAYS_PER_WEEK {
            weeks.push(week);
            week = [None; DAYS_PER_WEEK];
            column = 0;
        }
    }
    if column > 0 {
        weeks.push(week);
    }
    weeks
}

/// 当月天数，月份不合法时为 None
pub fn days_in_month(year: i32, month0: u32) -> Option<u32> {
    first_of_month(year, month0).map(days_in_month_of)
}

/// 月首是星期几（星期日 = 0）
pub fn first_weekday_offset(year: i32, month0: u32) -> Option<u32> {
    first_of_month(year, month0).map(|d| d.weekday().num_days_from_sunday())
}

/// 日历映射的键，形如 "2024-03-05"
pub fn date_key(year: i32, month0: u32, day: u32) -> String {
    format!("{}-{:02}-{:02}", year, month0 + 1, day)
}

fn first_of_month(year: i32, month0: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}

/// 下月首日的前一天即本月最后一天，闰年随之自动处理
fn days_in_month_of(first: NaiveDate) -> u32 {
    let (next_year, next_month0) = if first.month0() == 11 {
        (first.year() + 1, 0)
    } else {
        (first.year(), first.month0() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month0 + 1, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

// ==================== 月份游标 ====================

/// 日历月份游标，月份从 0 起
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthCursor {
    pub year: i32,
    pub month0: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> Self {
        Self {
            year,
            month0: month0.min(11),
        }
    }

    /// 本地时间的当前月份
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month0: today.month0(),
        }
    }

    /// 上一月，一月回绕到上一年十二月
    pub fn prev(&mut self) {
        if self.month0 == 0 {
            self.month0 = 11;
            self.year -= 1;
        } else {
            self.month0 -= 1;
        }
    }

    /// 下一月，已到参考月份时不再前进
    pub fn next(&mut self, reference: MonthCursor) {
        if !self.can_advance(reference) {
            return;
        }
        if self.month0 == 11 {
            self.month0 = 0;
            self.year += 1;
        } else {
            self.month0 += 1;
        }
    }

    /// 是否还能向后翻页，显示月份不早于参考月份时为 false
    pub fn can_advance(&self, reference: MonthCursor) -> bool {
        (self.year, self.month0) < (reference.year, reference.month0)
    }

    /// 界面标题用的标签，形如 "March 2024"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month0), self.year)
    }
}

/// 月份英文名
pub fn month_name(month0: u32) -> &'static str {
    const MONTH_NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    MONTH_NAMES.get(month0 as usize).copied().unwrap_or("")
}

// ==================== 测试 ====================
