//! 不可变的依赖配置

use crate::properties::parse_properties;
use config_abstractions::DependencyConfig;
use injection_common::ConfigError;
use std::collections::HashMap;
use std::str::FromStr;

/// 名称映射配置
///
/// 构造后不提供任何修改接口
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesConfig {
    bindings: HashMap<String, String>,
}

impl PropertiesConfig {
    /// 创建空配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已有映射创建
    pub fn from_map(bindings: HashMap<String, String>) -> Self {
        Self { bindings }
    }

    /// 遍历全部绑定
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|(abstract_name, implementation)| (abstract_name.as_str(), implementation.as_str()))
    }
}

impl DependencyConfig for PropertiesConfig {
    fn lookup(&self, abstract_name: &str) -> Option<&str> {
        self.bindings.get(abstract_name).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.bindings.len()
    }
}

impl<K, V> FromIterator<(K, V)> for PropertiesConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl FromStr for PropertiesConfig {
    type Err = ConfigError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_properties(text).map(Self::from_map)
    }
}
