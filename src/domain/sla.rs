// ==========================================
// 技术服务工单控制台 - SLA 截止状态值对象
// ==========================================
// 职责: 单次评估产出的不可变快照
// 每个评估周期生成新值,调用方通过新旧对比检测状态迁移
// ==========================================

use crate::domain::types::SlaState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// DeadlineStatus - 截止状态快照
// ==========================================

/// SLA 截止状态快照
///
/// 不变量:
/// - state=Breached 当且仅当 remaining_ms <= 0
/// - state=AtRisk 当且仅当 0 < remaining_ms < 阈值
/// - state=OnTrack 当且仅当 remaining_ms >= 阈值 (闭区间边界)
/// - state=Unknown 当且仅当 remaining_ms 为 None (无截止时间)
/// - display 仅由 remaining_ms 与 state 派生,无独立状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineStatus {
    /// SLA 状态分级
    pub state: SlaState,

    /// 被评估的截止时刻 (Unknown 时为 None)
    pub deadline: Option<DateTime<Utc>>,

    /// 剩余毫秒数 (有符号; <=0 表示已过期; Unknown 时为 None)
    pub remaining_ms: Option<i64>,

    /// 本地化的剩余时间展示文本
    pub display: String,

    /// 本次评估所使用的时刻 (由调用方注入)
    pub evaluated_at: DateTime<Utc>,
}

impl DeadlineStatus {
    /// 是否可操作 (Unknown 不展示倒计时、不触发提醒)
    pub fn is_actionable(&self) -> bool {
        self.state.is_actionable()
    }

    /// 状态升级判定
    ///
    /// 相对上一个快照是否新进入 AtRisk 或 Breached。
    /// 调用方用于一次性告警触发,避免每个评估周期重复提醒。
    pub fn escalated_from(&self, previous: &DeadlineStatus) -> bool {
        self.state > previous.state
            && matches!(self.state, SlaState::AtRisk | SlaState::Breached)
    }

    /// 剩余整小时数 (截断,不做四舍五入)
    pub fn remaining_hours(&self) -> Option<i64> {
        self.remaining_ms.map(|ms| ms.max(0) / 3_600_000)
    }

    /// 剩余分钟数 (去除整小时后的余数,截断)
    pub fn remaining_minutes(&self) -> Option<i64> {
        self.remaining_ms.map(|ms| (ms.max(0) % 3_600_000) / 60_000)
    }
}
