// ==========================================
// 技术服务工单控制台 - 配置层
// ==========================================

pub mod console_config;

pub use console_config::{ConsoleConfig, SlaPolicyConfig, SlaPolicyLine};
