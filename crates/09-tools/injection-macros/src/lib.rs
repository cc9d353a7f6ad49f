//! # Injection Macros
//!
//! 这个 crate 提供了字段注入所需的过程宏。
//!
//! ## 核心宏
//!
//! - [`Injectable`] - 注入目标派生宏，`#[auto_injectable]` 为注入标记
//! - [`Component`] - 实现组件派生宏
//! - [`abstract_type`] - 为 trait 声明全限定抽象类型名称
//!
//! ## 使用示例
//!
//! ```ignore
//! use injection_macros::{abstract_type, Component, Injectable};
//!
//! #[abstract_type(name = "org.example.lab5.SomeInterface")]
//! pub trait SomeInterface {
//!     fn do_something(&self) -> String;
//! }
//!
//! #[derive(Default, Component)]
//! #[component(name = "org.example.lab5.SomeImpl", implements(SomeInterface))]
//! pub struct SomeImpl;
//!
//! #[derive(Default, Injectable)]
//! pub struct SomeBean {
//!     #[auto_injectable]
//!     field1: Option<Box<dyn SomeInterface>>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod abstract_type;
mod component;
mod injectable;
mod utils;

/// 抽象类型宏
///
/// 为 `dyn Trait` 实现 `AbstractType`。
///
/// # 参数
///
/// - `name = "full.type.Name"` - 全限定名称（默认为 `module_path::TraitName`）
///
/// # 示例
///
/// ```ignore
/// #[abstract_type(name = "org.example.lab5.SomeOtherInterface")]
/// pub trait SomeOtherInterface {
///     fn do_other(&self) -> String;
/// }
/// ```
#[proc_macro_attribute]
pub fn abstract_type(args: TokenStream, input: TokenStream) -> TokenStream {
    abstract_type::abstract_type_impl(args, input)
}

/// 注入目标派生宏
///
/// 为结构体实现 `Injectable`。带 `#[auto_injectable]` 的字段必须是
/// `Option<Box<dyn Trait>>`、`Option<Arc<dyn Trait>>` 或 `Option<Rc<dyn Trait>>`，
/// 其余字段只出现在枚举结果中，不会被写入。
#[proc_macro_derive(Injectable, attributes(auto_injectable))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injectable::derive_injectable_impl(input)
}

/// 实现组件派生宏
///
/// 自动为结构体实现 `Component`。
///
/// # 参数
///
/// - `name = "full.type.Name"` - 全限定名称（默认为 `module_path::StructName`）
/// - `implements(TraitA, TraitB)` - 可被注入的抽象类型
/// - `constructor = "path::to_fn"` - 可失败的无参构造函数（默认使用 `Default`）
///
/// # 示例
///
/// ```ignore
/// #[derive(Component)]
/// #[component(name = "org.example.lab5.SODoer", implements(SomeOtherInterface))]
/// pub struct SODoer {
///     // 字段
/// }
/// ```
#[proc_macro_derive(Component, attributes(component))]
pub fn derive_component(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    component::derive_component_impl(input)
}
