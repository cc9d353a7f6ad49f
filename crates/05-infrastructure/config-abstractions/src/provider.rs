//! 配置源抽象接口

use async_trait::async_trait;
use injection_common::ConfigError;
use std::collections::HashMap;

/// 配置源 trait
///
/// 定义从不同数据源读取名称映射的统一接口
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// 读取全部绑定
    async fn load(&self) -> Result<HashMap<String, String>, ConfigError>;

    /// 获取配置源名称
    fn name(&self) -> &str;

    /// 获取配置源优先级，键冲突时优先级高者胜出
    fn priority(&self) -> i32 {
        0
    }
}

/// 配置文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// Java 风格的 `.properties`
    Properties,
    /// TOML
    Toml,
    /// JSON
    Json,
}

impl ConfigFormat {
    /// 根据文件扩展名推断格式
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "properties" | "props" => Some(Self::Properties),
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}
