// 结账请求数据模型
// 定义创建结账时提交的出站载荷

use rust_decimal::Decimal;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;

/// 创建结账请求
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CheckoutRequest {
    /// 结账金额 (精确十进制)
    pub amount: Decimal,
    /// 币种代码
    pub currency: String,
    /// 显示名称
    pub name: String,
    /// 显示描述 (可选)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 订单类型
    #[serde(rename = "type", default)]
    pub order_type: OrderType,
    /// 按钮样式标签
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// 允许客户自定义金额
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_defined_amount: Option<bool>,
    /// 预设金额列表
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_presets: Option<Vec<Decimal>>,
    /// 支付成功后的跳转地址
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    /// 取消支付后的跳转地址
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    /// Webhook通知回调地址
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_url: Option<String>,
    /// 支付完成后自动跳转
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_redirect: Option<bool>,
    /// 收集收货地址
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_shipping_address: Option<bool>,
    /// 收集邮箱
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_email: Option<bool>,
    /// 收集电话号码
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_phone_number: Option<bool>,
    /// 收集国家
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_country: Option<bool>,
    /// 自定义元数据 (始终序列化，缺省为空映射而非null)
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl CheckoutRequest {
    /// 创建新的结账请求，元数据初始化为空映射
    pub fn new(amount: Decimal, currency: String, name: String) -> Self {
        Self {
            amount,
            currency,
            name,
            description: None,
            order_type: OrderType::default(),
            style: None,
            customer_defined_amount: None,
            amount_presets: None,
            success_url: None,
            cancel_url: None,
            notifications_url: None,
            auto_redirect: None,
            collect_shipping_address: None,
            collect_email: None,
            collect_phone_number: None,
            collect_country: None,
            metadata: HashMap::new(),
        }
    }
}

/// 订单类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    /// 普通订单
    Order,
    /// 捐赠
    Donation,
    /// 发票
    Invoice,
}

impl OrderType {
    /// 获取线上字符串形式
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Order => "order",
            OrderType::Donation => "donation",
            OrderType::Invoice => "invoice",
        }
    }
}

impl Default for OrderType {
    fn default() -> Self {
        OrderType::Order
    }
}

impl Serialize for OrderType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // 不区分大小写，未知取值是硬性解码错误
        match s.to_ascii_lowercase().as_str() {
            "order" => Ok(OrderType::Order),
            "donation" => Ok(OrderType::Donation),
            "invoice" => Ok(OrderType::Invoice),
            _ => Err(DeError::unknown_variant(&s, &["order", "donation", "invoice"])),
        }
    }
}

/// 结账按钮样式枚举
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStyle {
    BuyNowLarge,
    BuyNowSmall,
    DonationLarge,
    DonationSmall,
    CustomLarge,
    CustomSmall,
}
