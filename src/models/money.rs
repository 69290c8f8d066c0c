// 货币与时间数据模型
// 金额使用精确十进制表示，绝不使用二进制浮点数

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 金额与币种对
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MoneyHash {
    /// 金额 (精确十进制，线上为字符串形式)
    pub amount: Decimal,
    /// 币种代码 (如 "USD"、"BTC")
    pub currency: String,
}

/// 同一时刻的双重编码时间戳
///
/// ISO-8601 带偏移的字符串与 Unix epoch 秒数表示同一瞬间，两者必须一致
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Time {
    /// ISO-8601 带时区偏移的时间戳
    pub iso: DateTime<FixedOffset>,
    /// Unix epoch 秒数
    pub epoch: u64,
}

impl Time {
    /// 检查两种时间表示是否指向同一瞬间
    pub fn is_consistent(&self) -> bool {
        self.iso.timestamp() == self.epoch as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_money_hash_exact_decimal() {
        let body = json!({"amount": "10.00", "currency": "USD"});

        let money: MoneyHash = serde_json::from_value(body).unwrap();
        // 精确十进制: 必须等于10.00，不能出现9.999999之类的舍入
        assert_eq!(money.amount, Decimal::new(1000, 2));
        assert_eq!(money.amount.to_string(), "10.00");
        assert_eq!(money.currency, "USD");
    }

    #[test]
    fn test_money_hash_round_trip() {
        let money = MoneyHash {
            amount: Decimal::new(12345, 4), // 1.2345
            currency: "BTC".to_string(),
        };

        let encoded = serde_json::to_string(&money).unwrap();
        let decoded: MoneyHash = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, money);
    }

    #[test]
    fn test_time_consistency() {
        let body = json!({
            "iso": "2017-01-31T20:49:02+00:00",
            "epoch": 1485895742u64
        });

        let time: Time = serde_json::from_value(body).unwrap();
        assert!(time.is_consistent());

        // epoch偏移一秒后两种表示不再一致
        let skewed = Time {
            epoch: time.epoch + 1,
            ..time
        };
        assert!(!skewed.is_consistent());
    }
}
