//! 注入基础接口定义
//!
//! 提供注入标记、注入目标和实现组件的基础 trait

use crate::descriptor::TypeDescriptor;
use crate::metadata::FieldInfo;
use std::any::Any;

/// 类型擦除的实例
///
/// 构造器产出的是具体实现类型，经过 [`TypeDescriptor`] 转换后
/// 装的是字段声明的 `Box<dyn Trait>`。
pub type Instance = Box<dyn Any>;

/// 抽象类型 trait
///
/// 为 `dyn Trait` 实现，给出配置中使用的全限定名称。
/// 通常由 `#[abstract_type]` 宏生成。
pub trait AbstractType: 'static {
    /// 全限定抽象类型名称
    const TYPE_NAME: &'static str;
}

/// 注入目标 trait
///
/// 字段枚举器的运行时形态，通常由 `#[derive(Injectable)]` 生成。
/// 只列出目标类型自身声明的字段。
pub trait Injectable {
    /// 目标类型名称
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// 按声明顺序列出全部字段
    fn fields(&self) -> Vec<FieldInfo>;

    /// 向带注入标记的字段写入实例
    ///
    /// 实例必须装着字段声明的 `Box<dyn Trait>`；字段未标记或类型不符时原样交还。
    fn write_field(&mut self, field: &str, instance: Instance) -> Result<(), Instance>;
}

/// 实现组件 trait
///
/// 可被注册到类型注册表中的具体实现，通常由 `#[derive(Component)]` 生成
pub trait Component: Sized + 'static {
    /// 全限定实现类型名称
    const TYPE_NAME: &'static str;

    /// 构造该组件的类型描述符
    fn descriptor() -> TypeDescriptor;
}
