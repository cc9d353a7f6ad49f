//! 演示用的抽象类型、实现与注入目标

use injection_macros::{abstract_type, Component, Injectable};

#[abstract_type(name = "org.example.lab5.SomeInterface")]
pub trait SomeInterface {
    fn do_something(&self) -> String;
}

#[abstract_type(name = "org.example.lab5.SomeOtherInterface")]
pub trait SomeOtherInterface {
    fn do_other(&self) -> String;
}

#[derive(Debug, Default, Component)]
#[component(name = "org.example.lab5.SomeImpl", implements(SomeInterface))]
pub struct SomeImpl;

impl SomeInterface for SomeImpl {
    fn do_something(&self) -> String {
        "A".to_string()
    }
}

#[derive(Debug, Default, Component)]
#[component(name = "org.example.lab5.OtherImpl", implements(SomeInterface))]
pub struct OtherImpl;

impl SomeInterface for OtherImpl {
    fn do_something(&self) -> String {
        "B".to_string()
    }
}

#[derive(Debug, Default, Component)]
#[component(name = "org.example.lab5.SODoer", implements(SomeOtherInterface))]
pub struct SODoer;

impl SomeOtherInterface for SODoer {
    fn do_other(&self) -> String {
        "C".to_string()
    }
}

/// 注入目标
#[derive(Default, Injectable)]
pub struct SomeBean {
    #[auto_injectable]
    field1: Option<Box<dyn SomeInterface>>,
    #[auto_injectable]
    field2: Option<Box<dyn SomeOtherInterface>>,
}

impl SomeBean {
    /// 依次调用两个注入字段；未注入的字段输出为空
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

/// 本程序已知的全部类型
pub fn registry() -> di_impl::TypeRegistry {
    di_impl::TypeRegistry::new()
        .register_component::<SomeImpl>()
        .register_component::<OtherImpl>()
        .register_component::<SODoer>()
}
