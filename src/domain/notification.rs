// ==========================================
// 技术服务工单控制台 - 通知与确认值对象
// ==========================================
// 职责: 以纯数据形式描述外部通知/确认对话框服务的输入
// 红线: 本核心不直接调用任何外部服务
// ==========================================

use crate::domain::types::NotificationKind;
use crate::i18n::t;
use serde::{Deserialize, Serialize};

// 原始控制台的各类提示时长 (毫秒)
const SAVE_SUCCESS_DURATION_MS: u32 = 3_000;
const SAVE_FAILED_DURATION_MS: u32 = 5_000;
const DISCARD_INFO_DURATION_MS: u32 = 2_000;
const DEFAULT_DURATION_MS: u32 = 3_000;

// ==========================================
// Notification - 通知值
// ==========================================

/// 通知值
///
/// 由外部通知服务负责渲染; 本核心只产出内容与级别
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// 本地化消息文本
    pub message: String,

    /// 通知级别
    pub kind: NotificationKind,

    /// 是否常驻 (不自动消失)
    pub sticky: bool,

    /// 展示时长 (毫秒)
    pub duration_ms: u32,
}

impl Notification {
    fn build(message: String, kind: NotificationKind, duration_ms: u32) -> Self {
        Self {
            message,
            kind,
            sticky: false,
            duration_ms,
        }
    }

    /// 保存成功提示
    pub fn save_success() -> Self {
        Self::build(
            t("notification.save_success"),
            NotificationKind::Success,
            SAVE_SUCCESS_DURATION_MS,
        )
    }

    /// 保存失败提示
    pub fn save_failed() -> Self {
        Self::build(
            t("notification.save_failed"),
            NotificationKind::Danger,
            SAVE_FAILED_DURATION_MS,
        )
    }

    /// 修改已放弃提示
    pub fn discard_info() -> Self {
        Self::build(
            t("notification.discard_info"),
            NotificationKind::Info,
            DISCARD_INFO_DURATION_MS,
        )
    }

    /// 驾驶舱刷新成功提示
    pub fn dashboard_refreshed() -> Self {
        Self::build(
            t("notification.dashboard_refreshed"),
            NotificationKind::Success,
            DEFAULT_DURATION_MS,
        )
    }

    /// 驾驶舱数据加载失败提示
    pub fn dashboard_load_failed() -> Self {
        Self::build(
            t("notification.dashboard_load_failed"),
            NotificationKind::Danger,
            DEFAULT_DURATION_MS,
        )
    }

    /// 快速建单缺少描述提示
    pub fn missing_description() -> Self {
        Self::build(
            t("notification.missing_description"),
            NotificationKind::Warning,
            DEFAULT_DURATION_MS,
        )
    }

    /// 工单创建成功提示
    pub fn request_created() -> Self {
        Self::build(
            t("notification.request_created"),
            NotificationKind::Success,
            DEFAULT_DURATION_MS,
        )
    }

    /// 工单创建失败提示
    pub fn request_create_failed() -> Self {
        Self::build(
            t("notification.request_create_failed"),
            NotificationKind::Danger,
            DEFAULT_DURATION_MS,
        )
    }

    /// 通用警告提示
    pub fn warning(message: impl Into<String>) -> Self {
        Self::build(message.into(), NotificationKind::Warning, DEFAULT_DURATION_MS)
    }

    /// 通用错误提示
    pub fn danger(message: impl Into<String>) -> Self {
        Self::build(message.into(), NotificationKind::Danger, SAVE_FAILED_DURATION_MS)
    }
}

// ==========================================
// ConfirmationPrompt - 确认对话框值
// ==========================================

/// 确认对话框值
///
/// 由外部对话框服务负责渲染与用户交互
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationPrompt {
    pub title: String,
    pub body: String,
    pub confirm_label: String,
    pub cancel_label: String,

    /// 确认操作是否为破坏性操作 (外壳据此着色确认按钮)
    pub destructive: bool,
}

impl ConfirmationPrompt {
    /// 放弃未保存修改的确认对话框
    pub fn discard_changes() -> Self {
        Self {
            title: t("confirm.discard_title"),
            body: t("confirm.discard_body"),
            confirm_label: t("confirm.discard_confirm"),
            cancel_label: t("confirm.discard_cancel"),
            destructive: true,
        }
    }
}
