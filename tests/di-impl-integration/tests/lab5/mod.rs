//! lab5 测试夹具：两个抽象类型、它们的实现和注入目标

#![allow(dead_code)]

use injection_macros::{abstract_type, Component, Injectable};
use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 构造计数
pub static SOME_IMPL_CREATED: AtomicUsize = AtomicUsize::new(0);

#[abstract_type(name = "org.example.lab5.SomeInterface")]
pub trait SomeInterface {
    fn do_something(&self) -> String;
    fn as_any(&self) -> &dyn Any;
}

#[abstract_type(name = "org.example.lab5.SomeOtherInterface")]
pub trait SomeOtherInterface {
    fn do_other(&self) -> String;
    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Component)]
#[component(name = "org.example.lab5.SomeImpl", implements(SomeInterface))]
pub struct SomeImpl {
    pub serial: usize,
}

impl Default for SomeImpl {
    fn default() -> Self {
        Self {
            serial: SOME_IMPL_CREATED.fetch_add(1, Ordering::SeqCst),
        }
    }
}

impl SomeInterface for SomeImpl {
    fn do_something(&self) -> String {
        "A".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default, Component)]
#[component(name = "org.example.lab5.OtherImpl", implements(SomeInterface))]
pub struct OtherImpl {
    pub calls: u32,
}

impl SomeInterface for OtherImpl {
    fn do_something(&self) -> String {
        "B".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default, Component)]
#[component(name = "org.example.lab5.SODoer", implements(SomeOtherInterface))]
pub struct SODoer {
    pub label: String,
}

impl SomeOtherInterface for SODoer {
    fn do_other(&self) -> String {
        "C".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// 只实现 `SomeOtherInterface`，绑定到 `SomeInterface` 时不可赋值
#[derive(Debug, Default, Component)]
#[component(name = "org.example.lab5.Unrelated", implements(SomeOtherInterface))]
pub struct Unrelated {
    pub marker: u8,
}

impl SomeOtherInterface for Unrelated {
    fn do_other(&self) -> String {
        "unrelated".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// 初始化器总是失败
#[derive(Debug, Component)]
#[component(
    name = "org.example.lab5.FailingImpl",
    implements(SomeInterface),
    constructor = "FailingImpl::try_new"
)]
pub struct FailingImpl {
    pub attempt: u8,
}

#[derive(Debug)]
pub struct BrokenInitializer;

impl fmt::Display for BrokenInitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FailingImpl 初始化失败")
    }
}

impl std::error::Error for BrokenInitializer {}

impl FailingImpl {
    pub fn try_new() -> Result<Self, BrokenInitializer> {
        Err(BrokenInitializer)
    }
}

impl SomeInterface for FailingImpl {
    fn do_something(&self) -> String {
        "unreachable".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// 两个标记字段的注入目标
#[derive(Default, Injectable)]
pub struct SomeBean {
    #[auto_injectable]
    field1: Option<Box<dyn SomeInterface>>,
    #[auto_injectable]
    field2: Option<Box<dyn SomeOtherInterface>>,
}

impl SomeBean {
    pub fn field1(&self) -> Option<&dyn SomeInterface> {
        self.field1.as_deref()
    }

    pub fn field2(&self) -> Option<&dyn SomeOtherInterface> {
        self.field2.as_deref()
    }

    pub fn foo(&self) -> String {
        let first = self
            .field1
            .as_ref()
            .map_or_else(String::new, |field| field.do_something());
        let second = self
            .field2
            .as_ref()
            .map_or_else(String::new, |field| field.do_other());
        format!("{first}{second}")
    }
}

/// 没有注入标记的目标
#[derive(Default, Injectable)]
pub struct NoAnnotationClass {
    field: Option<Box<dyn SomeInterface>>,
    pub note: String,
}

impl NoAnnotationClass {
    pub fn with_note(note: impl Into<String>) -> Self {
        Self {
            field: None,
            note: note.into(),
        }
    }

    pub fn field(&self) -> Option<&dyn SomeInterface> {
        self.field.as_deref()
    }
}

/// 共享指针字段的注入目标
#[derive(Default, Injectable)]
pub struct SharedBean {
    #[auto_injectable]
    pub shared: Option<Arc<dyn SomeInterface>>,
    pub untouched: u32,
}

/// 注册全部 lab5 类型
pub fn registry() -> di_impl::TypeRegistry {
    di_impl::TypeRegistry::new()
        .register_component::<SomeImpl>()
        .register_component::<OtherImpl>()
        .register_component::<SODoer>()
        .register_component::<Unrelated>()
        .register_component::<FailingImpl>()
        .register_abstract::<dyn SomeInterface>()
        .register_abstract::<dyn SomeOtherInterface>()
}

/// 判断抽象实例背后的具体类型
pub fn is_instance_of<T: Any>(value: &dyn Any) -> bool {
    value.is::<T>()
}
