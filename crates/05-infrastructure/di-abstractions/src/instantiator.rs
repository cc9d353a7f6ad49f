//! 实例化器抽象接口
//!
//! 通过类型的无参构造器创建新实例

use crate::resolver::TypeHandle;
use injection_common::{ConstructionError, Instance};

/// 实例化器 trait
///
/// 每次调用恰好执行一次无参构造器，不缓存实例
pub trait Instantiator: Send + Sync {
    /// 创建新实例
    fn new_instance(&self, handle: &TypeHandle) -> Result<Instance, ConstructionError>;
}

/// 基于闭包的实例化器
pub struct LambdaInstantiator<F>
where
    F: Fn(&TypeHandle) -> Result<Instance, ConstructionError> + Send + Sync,
{
    /// 实例化闭包，每次调用创建一个新实例
    pub instantiate_fn: F,
}

impl<F> LambdaInstantiator<F>
where
    F: Fn(&TypeHandle) -> Result<Instance, ConstructionError> + Send + Sync,
{
    /// 用闭包创建实例化器
    pub fn new(instantiate_fn: F) -> Self {
        Self { instantiate_fn }
    }
}

impl<F> Instantiator for LambdaInstantiator<F>
where
    F: Fn(&TypeHandle) -> Result<Instance, ConstructionError> + Send + Sync,
{
    fn new_instance(&self, handle: &TypeHandle) -> Result<Instance, ConstructionError> {
        (self.instantiate_fn)(handle)
    }
}
