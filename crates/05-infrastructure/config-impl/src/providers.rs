//! 配置源实现

use crate::properties::parse_properties;
use async_trait::async_trait;
use config_abstractions::{ConfigFormat, ConfigSource};
use injection_common::ConfigError;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// TOML/JSON 中承载绑定的表名
const BINDINGS_TABLE: &str = "bindings";

/// 读取配置文件；可选文件缺失时返回 `None`
async fn read_config_file(path: &Path, optional: bool) -> Result<Option<String>, ConfigError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if optional {
                debug!("可选配置文件不存在，跳过: {}", path.display());
                Ok(None)
            } else {
                Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            }
        }
        Err(e) => Err(ConfigError::FileReadError { source: e }),
    }
}

/// 根据扩展名创建文件配置源
pub fn file_source<P: AsRef<Path>>(path: P) -> Result<Box<dyn ConfigSource>, ConfigError> {
    let path = path.as_ref();
    match ConfigFormat::from_path(path) {
        Some(ConfigFormat::Properties) => Ok(Box::new(PropertiesFileSource::new(path))),
        Some(ConfigFormat::Toml) => Ok(Box::new(TomlFileSource::new(path))),
        Some(ConfigFormat::Json) => Ok(Box::new(JsonFileSource::new(path))),
        None => Err(ConfigError::invalid_value(
            path.display().to_string(),
            "unsupported configuration file extension",
        )),
    }
}

/// `.properties` 文件配置源
#[derive(Debug, Clone)]
pub struct PropertiesFileSource {
    file_path: PathBuf,
    optional: bool,
    priority: i32,
}

impl PropertiesFileSource {
    /// 创建新的 `.properties` 配置源
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
            optional: false,
            priority: 100,
        }
    }

    /// 文件缺失时视为空配置
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// 设置优先级
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[async_trait]
impl ConfigSource for PropertiesFileSource {
    async fn load(&self) -> Result<HashMap<String, String>, ConfigError> {
        debug!("加载 properties 配置文件: {}", self.file_path.display());

        match read_config_file(&self.file_path, self.optional).await? {
            Some(content) => parse_properties(&content),
            None => Ok(HashMap::new()),
        }
    }

    fn name(&self) -> &str {
        "PropertiesFileSource"
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

/// TOML 文件配置源
///
/// 顶层存在 `[bindings]` 表时只读取该表，否则读取整个文档。
/// 嵌套表以 `.` 拼接成全限定名。
#[derive(Debug, Clone)]
pub struct TomlFileSource {
    file_path: PathBuf,
    optional: bool,
    priority: i32,
}

impl TomlFileSource {
    /// 创建新的 TOML 配置源
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
            optional: false,
            priority: 100,
        }
    }

    /// 文件缺失时视为空配置
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// 设置优先级
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// 解析 TOML 文本
    pub fn parse(content: &str) -> Result<HashMap<String, String>, ConfigError> {
        let document: toml::Table = toml::from_str(content).map_err(ConfigError::parse_error)?;

        let table = match document.get(BINDINGS_TABLE) {
            Some(toml::Value::Table(bindings)) => bindings,
            _ => &document,
        };

        let mut entries = HashMap::new();
        Self::collect_entries(table, String::new(), &mut entries)?;
        Ok(entries)
    }

    /// 递归收集字符串绑定
    fn collect_entries(
        table: &toml::Table,
        prefix: String,
        entries: &mut HashMap<String, String>,
    ) -> Result<(), ConfigError> {
        for (key, value) in table {
            let full_key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };

            match value {
                toml::Value::String(implementation) => {
                    entries.insert(full_key, implementation.clone());
                }
                toml::Value::Table(nested) => {
                    Self::collect_entries(nested, full_key, entries)?;
                }
                other => {
                    return Err(ConfigError::invalid_value(
                        full_key,
                        format!("expected a type name string, found {}", other.type_str()),
                    ));
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ConfigSource for TomlFileSource {
    async fn load(&self) -> Result<HashMap<String, String>, ConfigError> {
        debug!("加载 TOML 配置文件: {}", self.file_path.display());

        match read_config_file(&self.file_path, self.optional).await? {
            Some(content) => Self::parse(&content),
            None => Ok(HashMap::new()),
        }
    }

    fn name(&self) -> &str {
        "TomlFileSource"
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

/// JSON 文件配置源
///
/// 与 TOML 源规则相同：优先读取 `bindings` 对象，嵌套对象以 `.` 拼接。
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    file_path: PathBuf,
    optional: bool,
    priority: i32,
}

impl JsonFileSource {
    /// 创建新的 JSON 配置源
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
            optional: false,
            priority: 90,
        }
    }

    /// 文件缺失时视为空配置
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// 设置优先级
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// 解析 JSON 文本
    pub fn parse(content: &str) -> Result<HashMap<String, String>, ConfigError> {
        let document: Value = serde_json::from_str(content).map_err(ConfigError::parse_error)?;

        let root = match &document {
            Value::Object(map) => match map.get(BINDINGS_TABLE) {
                Some(bindings @ Value::Object(_)) => bindings,
                _ => &document,
            },
            _ => {
                return Err(ConfigError::invalid_value(
                    "$",
                    "top-level JSON value must be an object",
                ))
            }
        };

        let mut entries = HashMap::new();
        Self::collect_entries(root, String::new(), &mut entries)?;
        Ok(entries)
    }

    fn collect_entries(
        value: &Value,
        prefix: String,
        entries: &mut HashMap<String, String>,
    ) -> Result<(), ConfigError> {
        match value {
            Value::String(implementation) => {
                entries.insert(prefix, implementation.clone());
            }
            Value::Object(map) => {
                for (key, nested) in map {
                    let full_key = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    Self::collect_entries(nested, full_key, entries)?;
                }
            }
            other => {
                warn!("JSON 配置值类型无效: {} = {}", prefix, other);
                return Err(ConfigError::invalid_value(
                    prefix,
                    "expected a type name string",
                ));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ConfigSource for JsonFileSource {
    async fn load(&self) -> Result<HashMap<String, String>, ConfigError> {
        debug!("加载 JSON 配置文件: {}", self.file_path.display());

        match read_config_file(&self.file_path, self.optional).await? {
            Some(content) => Self::parse(&content),
            None => Ok(HashMap::new()),
        }
    }

    fn name(&self) -> &str {
        "JsonFileSource"
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

/// 内存配置源
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    bindings: HashMap<String, String>,
    priority: i32,
}

impl MemorySource {
    /// 创建新的内存配置源
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加绑定
    pub fn bind(mut self, abstract_name: impl Into<String>, implementation: impl Into<String>) -> Self {
        self.bindings.insert(abstract_name.into(), implementation.into());
        self
    }

    /// 设置优先级
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[async_trait]
impl ConfigSource for MemorySource {
    async fn load(&self) -> Result<HashMap<String, String>, ConfigError> {
        Ok(self.bindings.clone())
    }

    fn name(&self) -> &str {
        "MemorySource"
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
