//! 元数据定义
//!
//! 提供字段和类型的元数据信息

use crate::component::AbstractType;
use std::any::TypeId;
use std::fmt;

/// 类型信息
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 全限定类型名称
    pub name: String,
    /// 类型ID
    pub id: TypeId,
}

impl TypeInfo {
    /// 从具体类型获取类型信息，名称取自 `std::any::type_name`
    pub fn of<T: 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>().to_string(),
            id: TypeId::of::<T>(),
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// 字段信息
///
/// 字段枚举的单个结果。只有带注入标记的字段才携带抽象类型ID。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    /// 字段名称
    pub name: &'static str,
    /// 声明类型名称，标记字段为抽象类型的全限定名
    pub type_name: &'static str,
    /// 抽象类型ID（仅标记字段）
    abstract_type: Option<TypeId>,
}

impl FieldInfo {
    /// 创建带注入标记的字段信息
    pub fn auto_injectable<A: AbstractType + ?Sized>(name: &'static str) -> Self {
        Self {
            name,
            type_name: A::TYPE_NAME,
            abstract_type: Some(TypeId::of::<A>()),
        }
    }

    /// 创建普通字段信息
    pub fn plain(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            type_name,
            abstract_type: None,
        }
    }

    /// 是否带注入标记
    pub fn is_auto_injectable(&self) -> bool {
        self.abstract_type.is_some()
    }

    /// 抽象类型ID
    pub fn abstract_type_id(&self) -> Option<TypeId> {
        self.abstract_type
    }
}
