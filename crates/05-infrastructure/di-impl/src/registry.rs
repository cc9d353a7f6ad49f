//! 类型注册表
//!
//! 显式注册取代运行时类型加载。注册表是普通的值，不存在进程级全局注册。

use di_abstractions::{TypeHandle, TypeResolver};
use injection_common::{AbstractType, Component, ResolutionError, TypeDescriptor};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// 类型注册表
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, TypeHandle>,
}

impl TypeRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册类型描述符（构建器风格）
    pub fn register(mut self, descriptor: TypeDescriptor) -> Self {
        self.insert(descriptor);
        self
    }

    /// 注册组件（构建器风格）
    pub fn register_component<T: Component>(self) -> Self {
        self.register(T::descriptor())
    }

    /// 注册抽象类型（构建器风格）
    pub fn register_abstract<A: AbstractType + ?Sized>(self) -> Self {
        self.register(TypeDescriptor::abstract_type::<A>())
    }

    /// 插入类型描述符，返回被替换的旧句柄
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> Option<TypeHandle> {
        let name = descriptor.name().to_string();
        match descriptor.concrete_type() {
            Some(concrete) => debug!("注册类型: {} -> {}", name, concrete),
            None => debug!("注册抽象类型: {}", name),
        }

        let previous = self.types.insert(name.clone(), Arc::new(descriptor));
        if previous.is_some() {
            warn!("类型重复注册，旧描述符被替换: {}", name);
        }
        previous
    }

    /// 是否已注册
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// 已注册类型数量
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// 已注册的类型名称（已排序）
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl TypeResolver for TypeRegistry {
    fn resolve(&self, type_name: &str) -> Result<TypeHandle, ResolutionError> {
        self.types
            .get(type_name)
            .cloned()
            .ok_or_else(|| ResolutionError::TypeNotFound {
                type_name: type_name.to_string(),
            })
    }

    fn can_resolve(&self, type_name: &str) -> bool {
        self.contains(type_name)
    }
}
