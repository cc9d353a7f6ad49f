//! # Configuration Implementation
//!
//! 依赖配置的具体实现，提供不可变配置、`.properties` 解析和各种配置源。
//!
//! ## 主要组件
//!
//! - [`PropertiesConfig`] - 不可变的名称映射
//! - [`parse_properties`] - `.properties` 文本解析
//! - [`PropertiesFileSource`] / [`TomlFileSource`] / [`JsonFileSource`] / [`MemorySource`] - 配置源
//! - [`DependencyConfigLoader`] - 按优先级合并配置源

pub mod config;
pub mod manager;
pub mod properties;
pub mod providers;

pub use config::*;
pub use manager::*;
pub use properties::*;
pub use providers::*;
