//! 字段注入器的集成测试

mod lab5;

use config_impl::PropertiesConfig;
use di_abstractions::{FnResolver, TypeHandle};
use di_impl::Injector;
use injection_common::{
    Component, ConstructionError, InjectionError, ProvisionError, ResolutionError,
};
use lab5::{
    is_instance_of, registry, NoAnnotationClass, OtherImpl, SODoer, SharedBean, SomeBean,
    SomeImpl,
};
use std::error::Error as _;
use std::sync::Arc;

const SOME_INTERFACE: &str = "org.example.lab5.SomeInterface";
const SOME_OTHER_INTERFACE: &str = "org.example.lab5.SomeOtherInterface";

fn injector(bindings: &[(&str, &str)]) -> Result<Injector, InjectionError> {
    let config: PropertiesConfig = bindings.iter().copied().collect();
    Injector::new(Some(config), registry())
}

fn provision_source(error: &InjectionError) -> Option<&ProvisionError> {
    match error {
        InjectionError::Provision { source, .. } => Some(source),
        _ => None,
    }
}

#[test]
fn test_inject_injects_dependency() -> anyhow::Result<()> {
    let injector = injector(&[
        (SOME_INTERFACE, "org.example.lab5.SomeImpl"),
        (SOME_OTHER_INTERFACE, "org.example.lab5.SODoer"),
    ])?;
    let mut bean = SomeBean::default();
    assert!(bean.field1().is_none());

    injector.inject(&mut bean)?;

    let field1 = bean
        .field1()
        .ok_or_else(|| anyhow::anyhow!("field1 未注入"))?;
    assert!(is_instance_of::<SomeImpl>(field1.as_any()));
    Ok(())
}

#[test]
fn test_inject_with_non_existent_class_fails() -> anyhow::Result<()> {
    let injector = injector(&[(SOME_INTERFACE, "org.example.lab5.NonExistentClass")])?;
    let mut bean = SomeBean::default();

    let error = injector
        .inject(&mut bean)
        .expect_err("不存在的实现应当失败");

    assert!(error
        .to_string()
        .starts_with("Ошибка при предоставлении зависимости для"));
    assert!(matches!(
        provision_source(&error),
        Some(ProvisionError::Resolution(ResolutionError::TypeNotFound { type_name }))
            if type_name == "org.example.lab5.NonExistentClass"
    ));
    Ok(())
}

#[test]
fn test_inject_with_empty_config_fails() -> anyhow::Result<()> {
    let injector = injector(&[])?;
    let mut bean = SomeBean::default();

    let error = injector.inject(&mut bean).expect_err("空配置应当失败");

    assert!(matches!(error, InjectionError::MissingBinding { .. }));
    assert!(error.to_string().starts_with("Не объявлена реализация для"));
    Ok(())
}

#[test]
fn test_constructor_with_null_config_fails() {
    let error = Injector::new(None::<PropertiesConfig>, registry())
        .expect_err("null 配置应当失败");

    assert!(matches!(error, InjectionError::NullConfiguration));
    assert_eq!(
        error.to_string(),
        "Конфигурация зависимостей не может быть null"
    );
}

#[test]
fn test_builder_without_config_fails() {
    let error = Injector::builder()
        .with_registry(registry())
        .build()
        .expect_err("缺少配置应当失败");

    assert_eq!(
        error.to_string(),
        "Конфигурация зависимостей не может быть null"
    );
}

#[test]
fn test_inject_multiple_dependencies() -> anyhow::Result<()> {
    let injector = injector(&[
        (SOME_INTERFACE, "org.example.lab5.SomeImpl"),
        (SOME_OTHER_INTERFACE, "org.example.lab5.SODoer"),
    ])?;
    let mut bean = SomeBean::default();

    injector.inject(&mut bean)?;

    let field1 = bean
        .field1()
        .ok_or_else(|| anyhow::anyhow!("field1 未注入"))?;
    let field2 = bean
        .field2()
        .ok_or_else(|| anyhow::anyhow!("field2 未注入"))?;
    assert!(is_instance_of::<SomeImpl>(field1.as_any()));
    assert!(is_instance_of::<SODoer>(field2.as_any()));
    assert_eq!(bean.foo(), "AC");
    Ok(())
}

#[test]
fn test_inject_interface_without_implementation_fails() -> anyhow::Result<()> {
    let injector = injector(&[(SOME_INTERFACE, "org.example.lab5.SomeImpl")])?;
    let mut bean = SomeBean::default();

    let error = injector.inject(&mut bean).expect_err("缺少绑定应当失败");

    assert!(error
        .to_string()
        .contains("Не объявлена реализация для org.example.lab5.SomeOtherInterface"));
    assert_eq!(error.type_name(), Some(SOME_OTHER_INTERFACE));
    Ok(())
}

#[test]
fn test_inject_different_implementations() -> anyhow::Result<()> {
    let injector = injector(&[
        (SOME_INTERFACE, "org.example.lab5.OtherImpl"),
        (SOME_OTHER_INTERFACE, "org.example.lab5.SODoer"),
    ])?;
    let mut bean = SomeBean::default();

    injector.inject(&mut bean)?;

    let field1 = bean
        .field1()
        .ok_or_else(|| anyhow::anyhow!("field1 未注入"))?;
    assert!(is_instance_of::<OtherImpl>(field1.as_any()));
    assert!(!is_instance_of::<SomeImpl>(field1.as_any()));
    assert_eq!(bean.foo(), "BC");
    Ok(())
}

#[test]
fn test_inject_without_annotation_does_nothing() -> anyhow::Result<()> {
    let injector = injector(&[])?;
    let mut target = NoAnnotationClass::with_note("unchanged");

    injector.inject(&mut target)?;

    assert!(target.field().is_none());
    assert_eq!(target.note, "unchanged");
    Ok(())
}

#[test]
fn test_fresh_instances_per_injection() -> anyhow::Result<()> {
    let injector = injector(&[
        (SOME_INTERFACE, "org.example.lab5.SomeImpl"),
        (SOME_OTHER_INTERFACE, "org.example.lab5.SODoer"),
    ])?;
    let mut first = SomeBean::default();
    let mut second = SomeBean::default();

    injector.inject(&mut first)?;
    injector.inject(&mut second)?;

    let serial = |bean: &SomeBean| {
        bean.field1()
            .and_then(|field| field.as_any().downcast_ref::<SomeImpl>())
            .map(|component| component.serial)
    };
    let (first, second) = (serial(&first), serial(&second));
    assert!(first.is_some());
    assert!(second.is_some());
    assert_ne!(first, second);
    Ok(())
}

#[test]
fn test_failed_inject_leaves_fields_untouched() -> anyhow::Result<()> {
    let injector = injector(&[(SOME_INTERFACE, "org.example.lab5.SomeImpl")])?;
    let mut bean = SomeBean::default();

    assert!(injector.inject(&mut bean).is_err());

    assert!(bean.field1().is_none());
    assert!(bean.field2().is_none());
    Ok(())
}

#[test]
fn test_first_missing_binding_is_reported() -> anyhow::Result<()> {
    let injector = injector(&[])?;
    let mut bean = SomeBean::default();

    let error = injector.inject(&mut bean).expect_err("空配置应当失败");

    assert_eq!(error.type_name(), Some(SOME_INTERFACE));
    Ok(())
}

#[test]
fn test_abstract_binding_is_not_instantiable() -> anyhow::Result<()> {
    let injector = injector(&[
        (SOME_INTERFACE, SOME_INTERFACE),
        (SOME_OTHER_INTERFACE, "org.example.lab5.SODoer"),
    ])?;
    let mut bean = SomeBean::default();

    let error = injector.inject(&mut bean).expect_err("抽象类型不可实例化");

    assert!(error
        .to_string()
        .starts_with("Ошибка при предоставлении зависимости для org.example.lab5.SomeInterface"));
    assert!(matches!(
        provision_source(&error),
        Some(ProvisionError::Construction(ConstructionError::NotInstantiable { .. }))
    ));
    Ok(())
}

#[test]
fn test_failing_initializer_is_chained() -> anyhow::Result<()> {
    let injector = injector(&[
        (SOME_INTERFACE, "org.example.lab5.FailingImpl"),
        (SOME_OTHER_INTERFACE, "org.example.lab5.SODoer"),
    ])?;
    let mut bean = SomeBean::default();

    let error = injector.inject(&mut bean).expect_err("初始化器失败应当传播");

    assert!(matches!(
        provision_source(&error),
        Some(ProvisionError::Construction(ConstructionError::InitializerFailed { .. }))
    ));

    let mut chain = Vec::new();
    let mut current = error.source();
    while let Some(cause) = current {
        chain.push(cause.to_string());
        current = cause.source();
    }
    assert!(chain.iter().any(|message| message == "FailingImpl 初始化失败"));
    Ok(())
}

#[test]
fn test_unrelated_implementation_is_not_assignable() -> anyhow::Result<()> {
    let injector = injector(&[
        (SOME_INTERFACE, "org.example.lab5.Unrelated"),
        (SOME_OTHER_INTERFACE, "org.example.lab5.SODoer"),
    ])?;
    let mut bean = SomeBean::default();

    let error = injector.inject(&mut bean).expect_err("未实现抽象类型应当失败");

    assert!(matches!(
        provision_source(&error),
        Some(ProvisionError::Construction(ConstructionError::NotAssignable { .. }))
    ));
    assert!(bean.field1().is_none());
    Ok(())
}

#[test]
fn test_arc_field_is_injected() -> anyhow::Result<()> {
    let injector = injector(&[(SOME_INTERFACE, "org.example.lab5.OtherImpl")])?;
    let mut bean = SharedBean {
        untouched: 7,
        ..SharedBean::default()
    };

    injector.inject(&mut bean)?;

    let shared = bean
        .shared
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("shared 未注入"))?;
    assert_eq!(shared.do_something(), "B");
    assert_eq!(Arc::strong_count(shared), 1);
    assert_eq!(bean.untouched, 7);
    Ok(())
}

#[test]
fn test_inject_with_closure_resolver() -> anyhow::Result<()> {
    let some_impl: TypeHandle = Arc::new(SomeImpl::descriptor());
    let so_doer: TypeHandle = Arc::new(SODoer::descriptor());
    let resolver = FnResolver::new(move |name: &str| {
        if name == SomeImpl::TYPE_NAME {
            Some(some_impl.clone())
        } else if name == SODoer::TYPE_NAME {
            Some(so_doer.clone())
        } else {
            None
        }
    });

    let config: PropertiesConfig = [
        (SOME_INTERFACE, "org.example.lab5.SomeImpl"),
        (SOME_OTHER_INTERFACE, "org.example.lab5.SODoer"),
    ]
    .into_iter()
    .collect();
    let injector = Injector::new(Some(config), resolver)?;

    let mut bean = SomeBean::default();
    injector.inject(&mut bean)?;
    assert_eq!(bean.foo(), "AC");

    let config: PropertiesConfig = [(SOME_INTERFACE, "org.example.lab5.OtherImpl")]
        .into_iter()
        .collect();
    let resolver = FnResolver::new(|_: &str| None);
    let error = Injector::new(Some(config), resolver)?
        .inject(&mut SomeBean::default())
        .expect_err("闭包解析器未知的类型应当失败");
    assert!(matches!(
        provision_source(&error),
        Some(ProvisionError::Resolution(ResolutionError::TypeNotFound { .. }))
    ));
    Ok(())
}
