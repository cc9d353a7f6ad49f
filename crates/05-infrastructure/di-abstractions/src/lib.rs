//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义类型解析、实例化与注入点扫描的核心接口。
//!
//! ## 核心接口
//!
//! - [`TypeResolver`] - 类型解析器接口
//! - [`Instantiator`] - 实例化器接口
//! - [`injection_sites`] - 注入点扫描

pub mod instantiator;
pub mod resolver;
pub mod scanner;

pub use instantiator::*;
pub use resolver::*;
pub use scanner::*;
