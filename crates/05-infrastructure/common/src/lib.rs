//! # Injection Common
//!
//! 字段注入核心的公共类型：注入标记、注入目标、实现描述符与错误分类。
//!
//! ## 核心组件
//!
//! - [`AbstractType`] - 抽象类型名称（注入标记字段的声明类型）
//! - [`Injectable`] - 注入目标的字段枚举与写入
//! - [`Component`] - 可注册的具体实现
//! - [`TypeDescriptor`] - 取代运行时反射的类型描述符
//! - [`InjectionError`] - 注入失败的错误分类
//!
//! ## 设计原则
//!
//! - 不依赖运行时类型加载，全部通过显式注册完成
//! - 没有进程级全局状态

pub mod component;
pub mod descriptor;
pub mod errors;
pub mod metadata;

pub use component::*;
pub use descriptor::*;
pub use errors::*;
pub use metadata::*;
