// Coinbase v2 API 数据模型定义
// 包含响应信封、分页、结账请求、订单、Webhook通知等核心数据结构

mod checkout;
mod money;
mod notification;
mod order;
mod pagination;

// 重新导出核心类型
pub use checkout::*;
pub use money::*;
pub use notification::*;
pub use order::*;
pub use pagination::*;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// 标准API响应信封
///
/// 错误响应格式见: https://developers.coinbase.com/api/v2?shell#error-response
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ResponseEnvelope<T> {
    /// 分页信息 (仅列表响应携带)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// 响应数据 (纯错误响应可能不携带数据)
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// 错误列表 (与data可以同时存在)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorOrWarning>,
    /// 警告列表 (与errors相互独立)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ErrorOrWarning>,
    /// 未识别字段 (原样保留，兼容API的增量演进)
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl<T> ResponseEnvelope<T> {
    /// 响应是否携带错误
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 响应是否携带警告
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// API返回的错误或警告条目
///
/// 错误/警告是数据而非异常，由调用方显式检查
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorOrWarning {
    /// 错误标识符
    pub id: String,
    /// 人类可读的错误消息
    pub message: String,
    /// 相关文档地址 (可选)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// 未识别字段 (原样保留)
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
