//! # Configuration Abstractions
//!
//! 依赖配置抽象层：抽象类型名称到实现类型名称的只读映射，以及加载它的配置源。
//!
//! ## 核心接口
//!
//! - [`DependencyConfig`] - 只读的名称映射视图
//! - [`ConfigSource`] - 配置源接口

pub mod provider;
pub mod view;

pub use provider::*;
pub use view::*;
