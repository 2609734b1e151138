// ==========================================
// 技术服务工单控制台 - SLA 截止判定引擎
// ==========================================
// 职责: 计算剩余时间 + 判定 SLA 状态分级 + 派生截止时刻
// 输入: 截止时刻 + 调用方注入的当前时刻
// 输出: DeadlineStatus 快照 (纯函数,无副作用)
// ==========================================

use crate::config::SlaPolicyConfig;
use crate::domain::request::ServiceRequest;
use crate::domain::sla::DeadlineStatus;
use crate::domain::types::{PriorityLevel, SlaState};
use crate::i18n::{t, t_with_args};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use tracing::instrument;

// 工单记录的日期时间字段格式 (UTC, 无时区后缀)
const RECORD_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ==========================================
// SlaEngine - SLA 截止判定引擎
// ==========================================
pub struct SlaEngine {
    /// 临近超时阈值
    at_risk_threshold: Duration,

    /// 按优先级的策略行 (用于截止时刻派生)
    policy: SlaPolicyConfig,
}

impl SlaEngine {
    /// 创建引擎 (默认策略: 阈值 2 小时)
    pub fn new() -> Self {
        Self::from_config(&SlaPolicyConfig::default())
    }

    /// 按配置创建引擎
    pub fn from_config(config: &SlaPolicyConfig) -> Self {
        Self {
            at_risk_threshold: config.at_risk_threshold(),
            policy: config.clone(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 评估截止状态
    ///
    /// 纯函数: 输出仅由两个输入决定,对任意时刻组合全域有效。
    ///
    /// 分级规则:
    /// - 无截止时间 → Unknown (不计算剩余时间)
    /// - 剩余 <= 0 → Breached
    /// - 0 < 剩余 < 阈值 → AtRisk
    /// - 剩余 >= 阈值 → OnTrack (边界取闭区间)
    pub fn evaluate(&self, deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DeadlineStatus {
        let deadline = match deadline {
            Some(d) => d,
            None => {
                return DeadlineStatus {
                    state: SlaState::Unknown,
                    deadline: None,
                    remaining_ms: None,
                    display: t("sla.no_deadline"),
                    evaluated_at: now,
                };
            }
        };

        let remaining_ms = deadline.signed_duration_since(now).num_milliseconds();

        let state = if remaining_ms <= 0 {
            SlaState::Breached
        } else if remaining_ms < self.at_risk_threshold.num_milliseconds() {
            SlaState::AtRisk
        } else {
            SlaState::OnTrack
        };

        DeadlineStatus {
            state,
            deadline: Some(deadline),
            remaining_ms: Some(remaining_ms),
            display: Self::format_remaining(state, remaining_ms),
            evaluated_at: now,
        }
    }

    /// 评估记录字段形式的截止时间
    ///
    /// 接受 RFC 3339 或记录字段格式 ("%Y-%m-%d %H:%M:%S", UTC)。
    /// 格式非法视同缺失 (Unknown),不报错 —— 监控必须降级而非失败
    pub fn evaluate_raw(&self, raw: Option<&str>, now: DateTime<Utc>) -> DeadlineStatus {
        self.evaluate(raw.and_then(Self::parse_deadline), now)
    }

    /// 批量评估 (驾驶舱列表行)
    #[instrument(skip(self, requests), fields(count = requests.len()))]
    pub fn evaluate_batch(
        &self,
        requests: &[ServiceRequest],
        now: DateTime<Utc>,
    ) -> Vec<(String, DeadlineStatus)> {
        requests
            .iter()
            .map(|r| (r.request_id.clone(), self.evaluate(r.sla_deadline, now)))
            .collect()
    }

    // ==========================================
    // 截止时刻派生 (SLA 策略行)
    // ==========================================

    /// 按策略行派生解决截止时刻
    ///
    /// 无对应策略行时返回 None (工单无截止时间 → Unknown)
    pub fn resolution_deadline(
        &self,
        priority: PriorityLevel,
        created_at: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        self.policy
            .line_for(priority)
            .map(|line| created_at + Self::hours_duration(line.resolution_hours))
    }

    /// 按策略行派生响应截止时刻
    pub fn response_deadline(
        &self,
        priority: PriorityLevel,
        created_at: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        self.policy
            .line_for(priority)
            .map(|line| created_at + Self::hours_duration(line.response_hours))
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    /// 小时数 (可含小数) 转 Duration
    fn hours_duration(hours: f64) -> Duration {
        Duration::milliseconds((hours * 3_600_000.0) as i64)
    }

    /// 解析记录字段中的截止时间
    fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }

        NaiveDateTime::parse_from_str(raw, RECORD_DATETIME_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// 格式化剩余时间展示文本
    ///
    /// Breached → 固定超时标签 (无数字分量);
    /// 其余 → 整小时 + 整分钟 (向下截断)
    fn format_remaining(state: SlaState, remaining_ms: i64) -> String {
        if state == SlaState::Breached {
            return t("sla.breached");
        }

        let hours = remaining_ms / 3_600_000;
        let minutes = (remaining_ms % 3_600_000) / 60_000;
        t_with_args(
            "sla.remaining",
            &[
                ("hours", &hours.to_string()),
                ("minutes", &minutes.to_string()),
            ],
        )
    }
}

impl Default for SlaEngine {
    fn default() -> Self {
        Self::new()
    }
}
