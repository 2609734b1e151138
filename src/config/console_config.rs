// ==========================================
// 技术服务工单控制台 - 控制台配置
// ==========================================
// 职责: SLA 阈值、轮询周期、策略行与语言配置
// 存储: 纯内存结构 + JSON 快照 (本核心无持久化面)
// ==========================================

use crate::domain::types::PriorityLevel;
use serde::{Deserialize, Serialize};

// 默认值: 临近超时阈值 2 小时, 轮询周期 60 秒
const DEFAULT_AT_RISK_THRESHOLD_MINUTES: i64 = 120;
const DEFAULT_TICK_INTERVAL_SECS: u64 = 60;

// ==========================================
// SlaPolicyLine - SLA 策略行
// ==========================================

/// 单个优先级对应的响应/解决时限 (小时)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaPolicyLine {
    pub priority: PriorityLevel,
    pub response_hours: f64,
    pub resolution_hours: f64,
}

// ==========================================
// SlaPolicyConfig - SLA 策略配置
// ==========================================

/// SLA 策略配置
///
/// 阈值与轮询周期按部署可配,默认沿用标准策略
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaPolicyConfig {
    /// 临近超时阈值 (分钟)
    pub at_risk_threshold_minutes: i64,

    /// 监控轮询周期 (秒)
    pub tick_interval_secs: u64,

    /// 按优先级的响应/解决时限
    pub policy_lines: Vec<SlaPolicyLine>,
}

impl Default for SlaPolicyConfig {
    fn default() -> Self {
        Self {
            at_risk_threshold_minutes: DEFAULT_AT_RISK_THRESHOLD_MINUTES,
            tick_interval_secs: DEFAULT_TICK_INTERVAL_SECS,
            // 标准策略: P1 0.5/4h, P2 2/8h, P3 4/24h, P4 8/72h
            policy_lines: vec![
                SlaPolicyLine {
                    priority: PriorityLevel::P1,
                    response_hours: 0.5,
                    resolution_hours: 4.0,
                },
                SlaPolicyLine {
                    priority: PriorityLevel::P2,
                    response_hours: 2.0,
                    resolution_hours: 8.0,
                },
                SlaPolicyLine {
                    priority: PriorityLevel::P3,
                    response_hours: 4.0,
                    resolution_hours: 24.0,
                },
                SlaPolicyLine {
                    priority: PriorityLevel::P4,
                    response_hours: 8.0,
                    resolution_hours: 72.0,
                },
            ],
        }
    }
}

impl SlaPolicyConfig {
    /// 临近超时阈值
    pub fn at_risk_threshold(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.at_risk_threshold_minutes)
    }

    /// 监控轮询周期
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.tick_interval_secs)
    }

    /// 查找指定优先级的策略行
    pub fn line_for(&self, priority: PriorityLevel) -> Option<&SlaPolicyLine> {
        self.policy_lines.iter().find(|l| l.priority == priority)
    }
}

// ==========================================
// ConsoleConfig - 控制台配置
// ==========================================

/// 控制台配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// 界面语言 (zh-CN / en / tr)
    pub locale: String,

    /// SLA 策略配置
    pub sla: SlaPolicyConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            locale: "zh-CN".to_string(),
            sla: SlaPolicyConfig::default(),
        }
    }
}

impl ConsoleConfig {
    /// 从 JSON 快照恢复配置
    pub fn from_json(snapshot: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(snapshot)
    }

    /// 生成配置快照 (JSON)
    ///
    /// 用于审计与跨会话对比,保证配置可追溯
    pub fn snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
