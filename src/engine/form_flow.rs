// ==========================================
// 技术服务工单控制台 - 表单操作状态机
// ==========================================
// 职责: 保存/放弃操作的显式状态流转
// 状态: Idle → InFlight → Succeeded/Failed → (reset) Idle
// 红线: 状态由调用方持有并显式传递,禁止共享可变标志位
// ==========================================

use crate::domain::notification::{ConfirmationPrompt, Notification};
use crate::domain::types::OperationPhase;
use thiserror::Error;

// ==========================================
// FlowError - 状态机错误
// ==========================================

/// 表单操作状态机错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlowError {
    /// 重复提交防护: 进行中的操作不接受再次发起
    #[error("操作进行中,拒绝重复提交: {operation}")]
    AlreadyInFlight { operation: &'static str },

    /// 非法状态流转
    #[error("非法状态流转: {operation} 当前={current}, 期望={expected}")]
    InvalidTransition {
        operation: &'static str,
        current: OperationPhase,
        expected: OperationPhase,
    },
}

// ==========================================
// SaveFlow - 保存操作状态机
// ==========================================

/// 保存操作状态机
///
/// 每个表单实例持有一个; 外壳根据 phase 渲染按钮的
/// 加载/禁用样式,根据返回的通知值弹提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFlow {
    phase: OperationPhase,
}

impl SaveFlow {
    pub fn new() -> Self {
        Self {
            phase: OperationPhase::Idle,
        }
    }

    /// 当前阶段
    pub fn phase(&self) -> OperationPhase {
        self.phase
    }

    /// 发起保存 (Idle/Succeeded/Failed → InFlight)
    ///
    /// InFlight 下再次发起被拒绝 (双击防护)
    pub fn begin(&mut self) -> Result<(), FlowError> {
        if self.phase == OperationPhase::InFlight {
            return Err(FlowError::AlreadyInFlight { operation: "save" });
        }
        self.phase = OperationPhase::InFlight;
        Ok(())
    }

    /// 保存成功 (InFlight → Succeeded)
    pub fn complete(&mut self) -> Result<Notification, FlowError> {
        self.expect_in_flight("save")?;
        self.phase = OperationPhase::Succeeded;
        Ok(Notification::save_success())
    }

    /// 保存失败 (InFlight → Failed)
    pub fn fail(&mut self) -> Result<Notification, FlowError> {
        self.expect_in_flight("save")?;
        self.phase = OperationPhase::Failed;
        Ok(Notification::save_failed())
    }

    /// 复位 (任意阶段 → Idle, 外壳在提示动画结束后调用)
    pub fn reset(&mut self) {
        self.phase = OperationPhase::Idle;
    }

    fn expect_in_flight(&self, operation: &'static str) -> Result<(), FlowError> {
        if self.phase != OperationPhase::InFlight {
            return Err(FlowError::InvalidTransition {
                operation,
                current: self.phase,
                expected: OperationPhase::InFlight,
            });
        }
        Ok(())
    }
}

impl Default for SaveFlow {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// DiscardFlow - 放弃操作状态机
// ==========================================

/// 放弃操作状态机
///
/// 有未保存修改时先产出确认对话框值,用户确认后才进入 InFlight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardFlow {
    phase: OperationPhase,
}

impl DiscardFlow {
    pub fn new() -> Self {
        Self {
            phase: OperationPhase::Idle,
        }
    }

    /// 当前阶段
    pub fn phase(&self) -> OperationPhase {
        self.phase
    }

    /// 是否需要确认对话框
    ///
    /// 仅在有未保存修改时返回对话框值; 无修改直接放弃,不打扰用户
    pub fn confirmation(&self, dirty: bool) -> Option<ConfirmationPrompt> {
        if dirty {
            Some(ConfirmationPrompt::discard_changes())
        } else {
            None
        }
    }

    /// 发起放弃 (确认通过后调用)
    pub fn begin(&mut self) -> Result<(), FlowError> {
        if self.phase == OperationPhase::InFlight {
            return Err(FlowError::AlreadyInFlight {
                operation: "discard",
            });
        }
        self.phase = OperationPhase::InFlight;
        Ok(())
    }

    /// 放弃完成 (InFlight → Succeeded)
    ///
    /// 确有修改被丢弃时返回提示,否则静默
    pub fn complete(&mut self, dirty: bool) -> Result<Option<Notification>, FlowError> {
        self.expect_in_flight()?;
        self.phase = OperationPhase::Succeeded;
        Ok(dirty.then(Notification::discard_info))
    }

    /// 放弃失败 (InFlight → Failed, 错误由调用方向上传递,无提示)
    pub fn fail(&mut self) -> Result<(), FlowError> {
        self.expect_in_flight()?;
        self.phase = OperationPhase::Failed;
        Ok(())
    }

    /// 复位 (任意阶段 → Idle)
    pub fn reset(&mut self) {
        self.phase = OperationPhase::Idle;
    }

    fn expect_in_flight(&self) -> Result<(), FlowError> {
        if self.phase != OperationPhase::InFlight {
            return Err(FlowError::InvalidTransition {
                operation: "discard",
                current: self.phase,
                expected: OperationPhase::InFlight,
            });
        }
        Ok(())
    }
}

impl Default for DiscardFlow {
    fn default() -> Self {
        Self::new()
    }
}
