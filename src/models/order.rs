// 订单数据模型
// 定义API返回的完整订单资源

use chrono::{DateTime, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;

use crate::models::{MoneyHash, OrderType};

/// API返回的订单资源
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    /// 订单唯一标识符
    pub id: Option<String>,
    /// 订单短码
    pub code: Option<String>,
    /// 订单状态
    #[serde(default)]
    pub status: OrderStatus,
    /// 订单类型
    #[serde(rename = "type", default)]
    pub order_type: OrderType,
    /// 订单名称
    pub name: Option<String>,
    /// 订单描述
    pub description: Option<String>,
    /// 订单金额
    pub amount: Option<MoneyHash>,
    /// 结算金额
    pub payout_amount: Option<MoneyHash>,
    /// 收款比特币地址
    pub bitcoin_address: Option<String>,
    /// 比特币金额
    pub bitcoin_amount: Option<MoneyHash>,
    /// 比特币支付URI
    pub bitcoin_uri: Option<String>,
    /// 收据地址
    pub receipt_url: Option<String>,
    /// 过期时间
    pub expires_at: Option<DateTime<Utc>>,
    /// 错付时间
    pub mispaid_at: Option<DateTime<Utc>>,
    /// 支付时间
    pub paid_at: Option<DateTime<Utc>>,
    /// 退款地址
    pub refund_address: Option<String>,
    /// 关联的交易引用
    pub transaction: Option<TransactionHash>,
    /// 退款记录列表 (未类型化)
    #[serde(default)]
    pub refunds: Vec<Value>,
    /// 错付记录列表 (未类型化)
    #[serde(default)]
    pub mispayments: Vec<Value>,
    /// 自定义元数据 (缺省为空映射)
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
    /// 创建时间
    pub created_at: Option<DateTime<Utc>>,
    /// 更新时间
    pub updated_at: Option<DateTime<Utc>>,
    /// 资源类型名
    pub resource: Option<String>,
    /// 资源路径
    pub resource_path: Option<String>,
}

impl Order {
    /// 检查订单是否已支付
    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    /// 检查订单是否已过期
    pub fn is_expired(&self) -> bool {
        self.status == OrderStatus::Expired
    }

    /// 检查订单是否被错付
    pub fn is_mispaid(&self) -> bool {
        self.status == OrderStatus::Mispaid
    }

    /// 检查订单是否处于终态 (不再接受支付)
    pub fn is_settled(&self) -> bool {
        matches!(
            self.status,
            OrderStatus::Paid | OrderStatus::Expired | OrderStatus::Mispaid
        )
    }
}

/// 订单状态枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// 活跃状态
    Active,
    /// 待支付状态
    Pending,
    /// 已支付状态
    Paid,
    /// 已过期状态
    Expired,
    /// 错付状态 (金额不符)
    Mispaid,
}

impl OrderStatus {
    /// 获取线上字符串形式
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Active => "active",
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Expired => "expired",
            OrderStatus::Mispaid => "mispaid",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Active
    }
}

impl Serialize for OrderStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // 不区分大小写，未知取值是硬性解码错误
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(OrderStatus::Active),
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            "expired" => Ok(OrderStatus::Expired),
            "mispaid" => Ok(OrderStatus::Mispaid),
            _ => Err(DeError::unknown_variant(
                &s,
                &["active", "pending", "paid", "expired", "mispaid"],
            )),
        }
    }
}

/// 内嵌的交易引用
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TransactionHash {
    /// 交易ID
    pub id: Option<String>,
    /// 资源类型名
    pub resource: Option<String>,
    /// 资源路径
    pub resource_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_order_decode_example() {
        let body = json!({
            "status": "paid",
            "type": "order",
            "amount": {"amount": "10.00", "currency": "USD"}
        });

        let order: Order = serde_json::from_value(body).unwrap();
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.order_type, OrderType::Order);

        let amount = order.amount.unwrap();
        // 必须是精确的10.00，不能是9.999999
        assert_eq!(amount.amount, Decimal::new(1000, 2));
        assert_eq!(amount.currency, "USD");
    }

    #[test]
    fn test_order_round_trip() {
        let body = json!({
            "id": "cb_ord_1",
            "code": "XKCD99",
            "status": "pending",
            "type": "donation",
            "name": "Tip jar",
            "description": "Support the project",
            "amount": {"amount": "5.00", "currency": "USD"},
            "payout_amount": {"amount": "4.75", "currency": "USD"},
            "bitcoin_address": "1CoinbaseAddr",
            "bitcoin_amount": {"amount": "0.01000000", "currency": "BTC"},
            "bitcoin_uri": "bitcoin:1CoinbaseAddr?amount=0.01",
            "receipt_url": "https://coinbase.com/orders/cb_ord_1/receipt",
            "expires_at": "2017-01-31T20:49:02Z",
            "mispaid_at": null,
            "paid_at": null,
            "refund_address": "1RefundAddr",
            "transaction": {
                "id": "tx_1",
                "resource": "transaction",
                "resource_path": "/v2/transactions/tx_1"
            },
            "refunds": [],
            "mispayments": [],
            "metadata": {"customer_id": "cus_123"},
            "created_at": "2017-01-31T20:39:02Z",
            "updated_at": "2017-01-31T20:39:02Z",
            "resource": "order",
            "resource_path": "/v2/orders/cb_ord_1"
        });

        let order: Order = serde_json::from_value(body).unwrap();
        let encoded = serde_json::to_string(&order).unwrap();
        let decoded: Order = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.id, order.id);
        assert_eq!(decoded.code, order.code);
        assert_eq!(decoded.status, OrderStatus::Pending);
        assert_eq!(decoded.order_type, OrderType::Donation);
        assert_eq!(decoded.amount, order.amount);
        assert_eq!(decoded.payout_amount, order.payout_amount);
        assert_eq!(decoded.bitcoin_amount, order.bitcoin_amount);
        assert_eq!(decoded.expires_at, order.expires_at);
        assert_eq!(decoded.transaction, order.transaction);
        assert_eq!(decoded.metadata, order.metadata);
        assert_eq!(decoded.created_at, order.created_at);
        assert_eq!(decoded.resource_path, order.resource_path);
    }

    #[test]
    fn test_order_metadata_defaults_to_empty() {
        let order: Order = serde_json::from_value(json!({"id": "ord_1"})).unwrap();
        assert!(order.metadata.is_empty());
        assert!(order.refunds.is_empty());
        assert!(order.mispayments.is_empty());
    }

    #[test]
    fn test_order_status_round_trip() {
        for (status, wire) in [
            (OrderStatus::Active, "active"),
            (OrderStatus::Pending, "pending"),
            (OrderStatus::Paid, "paid"),
            (OrderStatus::Expired, "expired"),
            (OrderStatus::Mispaid, "mispaid"),
        ] {
            assert_eq!(serde_json::to_value(status).unwrap(), json!(wire));
            let decoded: OrderStatus = serde_json::from_value(json!(wire)).unwrap();
            assert_eq!(decoded, status);
        }
    }

    #[test]
    fn test_order_status_case_insensitive() {
        let decoded: OrderStatus = serde_json::from_value(json!("PAID")).unwrap();
        assert_eq!(decoded, OrderStatus::Paid);
        let decoded: OrderStatus = serde_json::from_value(json!("Mispaid")).unwrap();
        assert_eq!(decoded, OrderStatus::Mispaid);
    }

    #[test]
    fn test_order_status_unknown_value_fails() {
        let result = serde_json::from_value::<OrderStatus>(json!("refunded"));
        assert!(result.is_err());
    }

    #[test]
    fn test_order_status_predicates() {
        let mut order: Order = serde_json::from_value(json!({"status": "paid"})).unwrap();
        assert!(order.is_paid());
        assert!(order.is_settled());
        assert!(!order.is_expired());

        order.status = OrderStatus::Active;
        assert!(!order.is_settled());

        order.status = OrderStatus::Mispaid;
        assert!(order.is_mispaid());
        assert!(order.is_settled());
    }
}
