//! 依赖配置加载器

use crate::config::PropertiesConfig;
use crate::providers::file_source;
use config_abstractions::ConfigSource;
use injection_common::ConfigError;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// 依赖配置加载器
///
/// 协调多个配置源，按优先级合并成一份不可变的 [`PropertiesConfig`]
#[derive(Default)]
pub struct DependencyConfigLoader {
    /// 配置源列表（按优先级排序，高者在前）
    sources: Vec<Box<dyn ConfigSource>>,
}

impl std::fmt::Debug for DependencyConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependencyConfigLoader")
            .field(
                "sources",
                &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl DependencyConfigLoader {
    /// 创建新的加载器
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册配置源
    pub fn add_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.register_source(Box::new(source));
        self
    }

    /// 按扩展名注册文件配置源
    pub fn add_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        let source = file_source(path)?;
        self.register_source(source);
        Ok(self)
    }

    /// 注册已装箱的配置源
    pub fn register_source(&mut self, source: Box<dyn ConfigSource>) {
        info!("注册配置源: {} (priority={})", source.name(), source.priority());

        self.sources.push(source);
        // 稳定排序：同优先级保持注册顺序
        self.sources.sort_by(|a, b| b.priority().cmp(&a.priority()));
    }

    /// 获取配置源数量
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// 加载并合并全部配置源
    pub async fn load(&self) -> Result<PropertiesConfig, ConfigError> {
        let mut merged: HashMap<String, String> = HashMap::new();

        // 从低优先级到高优先级依次覆盖
        for source in self.sources.iter().rev() {
            let entries = source.load().await.map_err(|e| {
                warn!("配置源加载失败: {}: {}", source.name(), e);
                e
            })?;

            debug!("配置源 {} 提供 {} 条绑定", source.name(), entries.len());
            for (abstract_name, implementation) in entries {
                if let Some(previous) = merged.insert(abstract_name.clone(), implementation) {
                    debug!("绑定被覆盖: {} (原值 {})", abstract_name, previous);
                }
            }
        }

        info!("依赖配置加载完成，共 {} 条绑定", merged.len());
        Ok(PropertiesConfig::from_map(merged))
    }
}
