// 分页数据模型
// 基于游标的列表导航，无额外校验规则

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// 列表响应中的分页信息
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Pagination {
    /// 结束游标 (当前页之前的资源ID)
    pub ending_before: Option<String>,
    /// 起始游标 (当前页之后的资源ID)
    pub starting_after: Option<String>,
    /// 每页数量
    pub limit: i32,
    /// 排序方向
    #[serde(default)]
    pub order: SortOrder,
    /// 上一页地址 (不透明值)
    pub previous_uri: Option<Value>,
    /// 下一页地址
    pub next_uri: Option<String>,
}

/// 列表请求的分页参数
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RequestPagination {
    /// 排序方向
    #[serde(default)]
    pub order: SortOrder,
    /// 起始游标
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    /// 结束游标
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
    /// 每页数量
    pub limit: i32,
}

/// 排序方向枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// 降序
    Desc,
    /// 升序
    Asc,
}

impl SortOrder {
    /// 获取线上字符串形式
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Desc => "desc",
            SortOrder::Asc => "asc",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}

impl Serialize for SortOrder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // 字符串枚举在线上不区分大小写，未知取值是硬性解码错误
        match s.to_ascii_lowercase().as_str() {
            "desc" => Ok(SortOrder::Desc),
            "asc" => Ok(SortOrder::Asc),
            _ => Err(DeError::unknown_variant(&s, &["desc", "asc"])),
        }
    }
}
