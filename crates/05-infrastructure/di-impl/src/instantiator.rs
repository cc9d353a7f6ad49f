//! 默认实例化器

use di_abstractions::{Instantiator, TypeHandle};
use injection_common::{ConstructionError, Instance};
use tracing::debug;

/// 默认实例化器
///
/// 直接调用类型描述符中的无参构造器
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultInstantiator;

impl Instantiator for DefaultInstantiator {
    fn new_instance(&self, handle: &TypeHandle) -> Result<Instance, ConstructionError> {
        debug!("实例化类型: {}", handle.name());
        handle.construct()
    }
}
