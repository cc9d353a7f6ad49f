//! # 依赖注入具体实现
//!
//! 提供类型注册表、默认实例化器以及字段注入器。
//!
//! ```ignore
//! let injector = Injector::builder()
//!     .with_config(config)
//!     .with_registry(TypeRegistry::new().register_component::<SomeImpl>())
//!     .build()?;
//!
//! injector.inject(&mut bean)?;
//! ```

pub mod injector;
pub mod instantiator;
pub mod registry;

pub use injector::*;
pub use instantiator::*;
pub use registry::*;
