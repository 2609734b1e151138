// ==========================================
// 技术服务工单控制台 - SLA 截止监控
// ==========================================
// 职责: 按固定周期重新评估截止状态并回调通知
// 调度模型: 单 tokio 任务 + 周期定时器,评估体同步执行,tick 不重叠
// 取消语义: cancel 返回后不再有任何回调 (与 tick 触发线性化)
// ==========================================

use crate::domain::sla::DeadlineStatus;
use crate::engine::sla::SlaEngine;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

// 默认轮询周期: SLA 倒计时是分钟粒度,更细的周期没有意义
const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(60);

// ==========================================
// SlaMonitor - SLA 截止监控
// ==========================================

/// SLA 截止监控
///
/// 每个 tick 重新读取截止时间 (supplier)、用当前时刻评估、
/// 并把新快照交给 on_update。首次评估在启动时立即执行,
/// 调用方不会停留在过期状态长达一个完整周期。
pub struct SlaMonitor {
    engine: Arc<SlaEngine>,
    interval: Duration,
}

impl SlaMonitor {
    /// 创建监控 (默认 60 秒周期)
    pub fn new(engine: Arc<SlaEngine>) -> Self {
        Self {
            engine,
            interval: DEFAULT_TICK_INTERVAL,
        }
    }

    /// 覆写轮询周期
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// 启动监控 (真实墙钟)
    ///
    /// - supplier: 每个 tick 重新读取最新截止时间
    /// - on_update: 每次评估后接收新快照
    ///
    /// 返回取消句柄。注意: 不可在 on_update 回调内调用 cancel,
    /// 两者持同一把锁。
    pub fn spawn<S, F>(&self, supplier: S, on_update: F) -> MonitorHandle
    where
        S: Fn() -> Option<DateTime<Utc>> + Send + 'static,
        F: FnMut(DeadlineStatus) + Send + 'static,
    {
        self.spawn_with_clock(supplier, Utc::now, on_update)
    }

    /// 启动监控 (注入时钟,供测试与仿真使用)
    pub fn spawn_with_clock<S, C, F>(&self, supplier: S, clock: C, mut on_update: F) -> MonitorHandle
    where
        S: Fn() -> Option<DateTime<Utc>> + Send + 'static,
        C: Fn() -> DateTime<Utc> + Send + 'static,
        F: FnMut(DeadlineStatus) + Send + 'static,
    {
        let gate = Arc::new(Mutex::new(false));
        let tick_gate = Arc::clone(&gate);
        let engine = Arc::clone(&self.engine);
        let interval = self.interval;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // 错过的 tick 直接跳过,不补偿 (补偿只会产生无意义的连发评估)
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                // interval 的首个 tick 立即完成 → 启动即评估
                ticker.tick().await;

                // 取消标志与回调在同一把锁下判定:
                // cancel 返回后保证不再进入回调
                let cancelled = match tick_gate.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => {
                        warn!("监控取消锁中毒,停止监控: {}", poisoned);
                        break;
                    }
                };
                if *cancelled {
                    break;
                }

                let status = engine.evaluate(supplier(), clock());
                debug!(state = %status.state, remaining_ms = ?status.remaining_ms, "SLA tick");
                on_update(status);

                drop(cancelled);
            }
        });

        MonitorHandle {
            cancelled: gate,
            task,
        }
    }
}

// ==========================================
// MonitorHandle - 取消句柄
// ==========================================

/// 监控取消句柄
///
/// Drop 时自动取消 —— 持有方的每条退出路径都保证释放定时器
pub struct MonitorHandle {
    cancelled: Arc<Mutex<bool>>,
    task: JoinHandle<()>,
}

impl MonitorHandle {
    /// 取消监控
    ///
    /// 线性化保证: 若某个 tick 正在回调中,本调用会等其结束;
    /// 返回之后不再有任何回调执行,包括已到期待触发的 tick
    pub fn cancel(&self) {
        match self.cancelled.lock() {
            Ok(mut guard) => *guard = true,
            Err(mut poisoned) => **poisoned.get_mut() = true,
        }
        self.task.abort();
    }

    /// 是否已取消
    pub fn is_cancelled(&self) -> bool {
        match self.cancelled.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
