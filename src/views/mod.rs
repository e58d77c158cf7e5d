// 视图模块
// 暴露给界面外壳驱动的视图状态机，以及通知与路由协作方接口

pub mod profile;
pub mod register;

pub use profile::{EditForm, ProfileState, ProfileView};
pub use register::RegisterView;

/// 通知种类
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

/// 通知协作方，界面外壳负责真正的 toast 展示
pub trait Notify: Send + Sync {
    fn notify(&self, kind: ToastKind, message: &str);
}

/// 路由协作方，注册成功等场景下的编程式跳转
pub trait Navigate: Send + Sync {
    fn navigate(&self, route: &str);
}

/// 默认通知实现，仅写入日志（无界面场景用）
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notify for LogNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        match kind {
            ToastKind::Success => log::info!("{}", message),
            ToastKind::Error => log::warn!("{}", message),
        }
    }
}
