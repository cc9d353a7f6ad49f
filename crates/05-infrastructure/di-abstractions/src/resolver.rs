//! 类型解析器抽象接口
//!
//! 提供从全限定类型名称到类型句柄的解析能力

use injection_common::{ResolutionError, TypeDescriptor};
use std::sync::Arc;

/// 类型句柄
///
/// 解析结果，供实例化器使用
pub type TypeHandle = Arc<TypeDescriptor>;

/// 类型解析器 trait
///
/// 负责按名称查找可实例化的类型
pub trait TypeResolver: Send + Sync {
    /// 解析全限定类型名称
    fn resolve(&self, type_name: &str) -> Result<TypeHandle, ResolutionError>;

    /// 检查是否可以解析指定名称
    fn can_resolve(&self, type_name: &str) -> bool {
        self.resolve(type_name).is_ok()
    }
}

impl<R: TypeResolver + ?Sized> TypeResolver for Arc<R> {
    fn resolve(&self, type_name: &str) -> Result<TypeHandle, ResolutionError> {
        (**self).resolve(type_name)
    }

    fn can_resolve(&self, type_name: &str) -> bool {
        (**self).can_resolve(type_name)
    }
}

/// 基于闭包的解析器
pub struct FnResolver<F>
where
    F: Fn(&str) -> Option<TypeHandle> + Send + Sync,
{
    resolve_fn: F,
}

impl<F> FnResolver<F>
where
    F: Fn(&str) -> Option<TypeHandle> + Send + Sync,
{
    /// 用闭包创建解析器，闭包返回 `None` 表示类型未找到
    pub fn new(resolve_fn: F) -> Self {
        Self { resolve_fn }
    }
}

impl<F> TypeResolver for FnResolver<F>
where
    F: Fn(&str) -> Option<TypeHandle> + Send + Sync,
{
    fn resolve(&self, type_name: &str) -> Result<TypeHandle, ResolutionError> {
        (self.resolve_fn)(type_name).ok_or_else(|| ResolutionError::TypeNotFound {
            type_name: type_name.to_string(),
        })
    }
}
