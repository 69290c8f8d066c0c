// Webhook通知数据模型
// 定义Webhook回调的信任边界：未验证的通知不得当作可信数据使用

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::CbPayError;
use crate::models::{ErrorOrWarning, Order, Pagination};

/// Webhook签名验证协作者
///
/// 实际的签名校验算法由外部实现提供，本模块不实现也不猜测具体算法。
/// 入参为原始通知体与 "X-Signature" (或 "CB-SIGNATURE") 请求头的取值。
pub trait NotificationVerifier {
    /// 对原始通知体与签名头做出信任裁决
    fn verify(&self, raw_body: &[u8], signature: &str) -> bool;
}

/// 未验证的Webhook通知 (信任边界的初始状态)
///
/// 内嵌的订单载荷只能以原始JSON形式访问。类型化的`Order`视图只存在于
/// [`VerifiedNotification`] 上，而后者只能经由验证协作者获得。
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Notification {
    /// 分页信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// 响应数据 (未类型化)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// 错误列表
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorOrWarning>,
    /// 警告列表
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ErrorOrWarning>,
    /// 内嵌的原始订单载荷 (字段名刻意标记为未验证)
    #[serde(rename = "order", skip_serializing_if = "Option::is_none")]
    pub unverified_order: Option<Value>,
    /// 未识别字段 (原样保留)
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Notification {
    /// 从原始通知体解析出未验证的通知
    ///
    /// 解析失败返回 [`CbPayError::MalformedPayload`]，这是本组件唯一的
    /// 构造期错误。
    pub fn from_json(body: &str) -> Result<Self, CbPayError> {
        let notification = serde_json::from_str(body)?;
        debug!("Decoded webhook notification (unverified)");
        Ok(notification)
    }

    /// 通知是否已通过验证 (此类型上恒为false)
    pub fn is_verified(&self) -> bool {
        false
    }

    /// 经由外部验证协作者将通知提升为可信视图
    ///
    /// 协作者拒绝时返回 [`CbPayError::UnverifiedAccess`]；内嵌订单载荷
    /// 无法解析为类型化`Order`时返回 [`CbPayError::MalformedPayload`]。
    /// 提升成功后无法退回未验证状态。
    pub fn into_verified<V>(
        self,
        verifier: &V,
        raw_body: &[u8],
        signature: &str,
    ) -> Result<VerifiedNotification, CbPayError>
    where
        V: NotificationVerifier,
    {
        if !verifier.verify(raw_body, signature) {
            warn!("Webhook notification failed signature verification");
            return Err(CbPayError::UnverifiedAccess);
        }

        let order = match &self.unverified_order {
            Some(raw) => Some(serde_json::from_value::<Order>(raw.clone())?),
            None => None,
        };

        debug!("Webhook notification verified");
        Ok(VerifiedNotification {
            notification: self,
            order,
        })
    }
}

/// 已验证的Webhook通知 (信任边界的终态)
///
/// 只能通过 [`Notification::into_verified`] 获得，类型化的订单视图
/// 仅在此类型上可达。
#[derive(Debug, Clone)]
pub struct VerifiedNotification {
    notification: Notification,
    order: Option<Order>,
}

impl VerifiedNotification {
    /// 通知是否已通过验证 (此类型上恒为true)
    pub fn is_verified(&self) -> bool {
        true
    }

    /// 类型化的订单数据
    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    /// 底层通知数据
    pub fn notification(&self) -> &Notification {
        &self.notification
    }
}
