// 错误类型定义
// 数据模型本地的错误，不涉及传输层的重试策略

use thiserror::Error;

/// 数据模型错误
#[derive(Debug, Error)]
pub enum CbPayError {
    /// 原始载荷无法解析为预期的结构，立即返回给调用方，不重试
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// 通知尚未通过签名验证，类型化的订单数据不可访问
    #[error(
        "Notification has not been verified. Verify it with the associated \
         'X-Signature' (or 'CB-SIGNATURE') request header value before reading order data"
    )]
    UnverifiedAccess,
}
