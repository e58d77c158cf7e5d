// 服务模块
// 提供核心业务逻辑服务

pub mod api;
pub mod auth;
pub mod calendar;

pub use api::{
    ApiClient,
    ApiConfig,
    AuthApi,
    ProfileApi,
    ProfileUpdate,
    RegisterRequest,
    RegisterResponse,
};

pub use auth::AuthSession;

pub use calendar::{
    DayCell,
    HeatLevel,
    MonthCursor,
    Week,
    DAYS_PER_WEEK,
    date_key,
    days_in_month,
    first_weekday_offset,
    month_grid,
    month_name,
};
