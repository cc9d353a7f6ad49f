//! 类型描述符
//!
//! 替代运行时反射：记录实现类型的名称、无参构造器以及它能转换成的抽象类型。

use crate::component::{AbstractType, Instance};
use crate::errors::{BoxError, ConstructionError};
use crate::metadata::TypeInfo;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// 无参构造函数类型
pub type ConstructorFn = Arc<dyn Fn() -> Result<Instance, BoxError> + Send + Sync>;

/// 抽象类型转换函数类型
///
/// 成功时返回装着 `Box<dyn Trait>` 的实例，具体类型不符时原样交还
pub type CastFn = Arc<dyn Fn(Instance) -> Result<Instance, Instance> + Send + Sync>;

/// 类型描述符
#[derive(Clone)]
pub struct TypeDescriptor {
    /// 全限定类型名称
    name: String,
    /// 具体类型信息，抽象类型为 `None`
    concrete: Option<TypeInfo>,
    /// 无参构造器，抽象类型为 `None`
    constructor: Option<ConstructorFn>,
    /// 可转换的抽象类型
    casts: HashMap<TypeId, CastFn>,
    /// 可转换抽象类型的名称，仅用于诊断
    implements: Vec<&'static str>,
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("concrete", &self.concrete)
            .field("instantiable", &self.constructor.is_some())
            .field("implements", &self.implements)
            .finish()
    }
}

impl TypeDescriptor {
    /// 以 `Default::default()` 作为无参构造器
    pub fn concrete<T>(name: impl Into<String>) -> Self
    where
        T: Default + 'static,
    {
        Self::with_constructor(name, || Ok::<T, BoxError>(T::default()))
    }

    /// 使用可失败的无参构造器
    pub fn with_constructor<T, E, F>(name: impl Into<String>, constructor: F) -> Self
    where
        T: 'static,
        E: Into<BoxError>,
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        let constructor: ConstructorFn = Arc::new(move || -> Result<Instance, BoxError> {
            constructor()
                .map(|value| Box::new(value) as Instance)
                .map_err(Into::into)
        });

        Self {
            name: name.into(),
            concrete: Some(TypeInfo::of::<T>()),
            constructor: Some(constructor),
            casts: HashMap::new(),
            implements: Vec::new(),
        }
    }

    /// 抽象类型：可解析，不可实例化
    pub fn abstract_type<A>() -> Self
    where
        A: AbstractType + ?Sized,
    {
        Self {
            name: A::TYPE_NAME.to_string(),
            concrete: None,
            constructor: None,
            casts: HashMap::new(),
            implements: Vec::new(),
        }
    }

    /// 声明实现类型 `T` 可转换为抽象类型 `A`
    pub fn implements<T, A>(mut self, cast: fn(T) -> Box<A>) -> Self
    where
        T: 'static,
        A: AbstractType + ?Sized,
    {
        let erased: CastFn = Arc::new(move |instance: Instance| -> Result<Instance, Instance> {
            instance
                .downcast::<T>()
                .map(|concrete| Box::new(cast(*concrete)) as Instance)
        });

        self.casts.insert(TypeId::of::<A>(), erased);
        self.implements.push(A::TYPE_NAME);
        self
    }

    /// 全限定类型名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 具体类型信息
    pub fn concrete_type(&self) -> Option<&TypeInfo> {
        self.concrete.as_ref()
    }

    /// 是否可实例化
    pub fn is_instantiable(&self) -> bool {
        self.constructor.is_some()
    }

    /// 已声明的抽象类型名称
    pub fn implemented_types(&self) -> &[&'static str] {
        &self.implements
    }

    /// 是否可转换为指定抽象类型
    pub fn is_assignable_to(&self, abstract_type: TypeId) -> bool {
        self.casts.contains_key(&abstract_type)
    }

    /// 调用一次无参构造器
    pub fn construct(&self) -> Result<Instance, ConstructionError> {
        let constructor = self
            .constructor
            .as_ref()
            .ok_or_else(|| ConstructionError::NotInstantiable {
                type_name: self.name.clone(),
            })?;

        constructor().map_err(|source| ConstructionError::InitializerFailed {
            type_name: self.name.clone(),
            source,
        })
    }

    /// 将具体实例转换为抽象类型实例
    pub fn cast_to(
        &self,
        abstract_type: TypeId,
        abstract_name: &str,
        instance: Instance,
    ) -> Result<Instance, ConstructionError> {
        let cast = self
            .casts
            .get(&abstract_type)
            .ok_or_else(|| ConstructionError::NotAssignable {
                implementation: self.name.clone(),
                abstract_type: abstract_name.to_string(),
            })?;

        cast(instance).map_err(|_| ConstructionError::UnexpectedInstance {
            type_name: self.name.clone(),
        })
    }
}

/// 判断实例是否装着指定具体类型
pub fn instance_is<T: Any>(instance: &Instance) -> bool {
    instance.is::<T>()
}
