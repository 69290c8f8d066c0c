// Coinbase v2 支付API客户端数据模型
// 包含请求/响应载荷的核心数据结构与Webhook通知信任边界

pub mod error;
pub mod models;

// 重新导出核心类型
pub use error::CbPayError;
pub use models::*;
