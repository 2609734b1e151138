// ==========================================
// 技术服务工单控制台 - 应用层
// ==========================================

pub mod state;

pub use state::AppState;
