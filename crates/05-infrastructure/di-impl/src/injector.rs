//! 字段注入器

use crate::instantiator::DefaultInstantiator;
use crate::registry::TypeRegistry;
use config_abstractions::DependencyConfig;
use di_abstractions::{injection_sites, InjectionSite, Instantiator, TypeResolver};
use injection_common::{ConstructionError, Injectable, InjectionError, Instance};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 字段注入器
///
/// 持有不可变的依赖配置，跨调用无状态。可在多个线程中对不同目标并发调用。
///
/// 注入分两阶段：先按声明顺序为所有标记字段提供实例，全部成功后再写入。
/// 提供阶段任一字段失败时目标对象保持原样；写入阶段某字段拒绝写入
/// （[`ConstructionError::FieldRejected`]）时，之前的字段已被赋值。
pub struct Injector {
    config: Arc<dyn DependencyConfig>,
    resolver: Arc<dyn TypeResolver>,
    instantiator: Arc<dyn Instantiator>,
}

impl std::fmt::Debug for Injector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Injector")
            .field("bindings", &self.config.len())
            .finish_non_exhaustive()
    }
}

impl Injector {
    /// 创建注入器
    ///
    /// 配置为 `None` 时返回 [`InjectionError::NullConfiguration`]
    pub fn new<C, R>(config: Option<C>, resolver: R) -> Result<Self, InjectionError>
    where
        C: DependencyConfig + 'static,
        R: TypeResolver + 'static,
    {
        let config = config.ok_or(InjectionError::NullConfiguration)?;
        Ok(Self::from_parts(
            Arc::new(config),
            Arc::new(resolver),
            Arc::new(DefaultInstantiator),
        ))
    }

    /// 创建构建器
    pub fn builder() -> InjectorBuilder {
        InjectorBuilder::new()
    }

    fn from_parts(
        config: Arc<dyn DependencyConfig>,
        resolver: Arc<dyn TypeResolver>,
        instantiator: Arc<dyn Instantiator>,
    ) -> Self {
        debug!("创建注入器，绑定数量: {}", config.len());
        Self {
            config,
            resolver,
            instantiator,
        }
    }

    /// 为目标对象的全部标记字段注入新实例
    pub fn inject<T: Injectable + ?Sized>(&self, target: &mut T) -> Result<(), InjectionError> {
        let sites = injection_sites(target);
        if sites.is_empty() {
            debug!("{} 没有标记字段，跳过注入", target.type_name());
            return Ok(());
        }

        let mut provided: Vec<(InjectionSite, Instance)> = Vec::with_capacity(sites.len());
        for site in sites {
            let instance = self.provide(&site).map_err(|e| {
                warn!("注入 {}.{} 失败: {}", target.type_name(), site.field.name, e);
                e
            })?;
            provided.push((site, instance));
        }

        let injected = provided.len();
        for (site, instance) in provided {
            target.write_field(site.field.name, instance).map_err(|_| {
                InjectionError::provision(
                    site.field.type_name,
                    ConstructionError::FieldRejected {
                        field: site.field.name.to_string(),
                    },
                )
            })?;
            debug!("字段已赋值: {}.{}", target.type_name(), site.field.name);
        }

        info!("注入完成: {}，共 {} 个字段", target.type_name(), injected);
        Ok(())
    }

    /// 为单个注入点提供实例：查找绑定 → 解析 → 实例化 → 转换为抽象类型
    fn provide(&self, site: &InjectionSite) -> Result<Instance, InjectionError> {
        let abstract_name = site.field.type_name;

        let implementation = self
            .config
            .lookup(abstract_name)
            .ok_or_else(|| InjectionError::missing_binding(abstract_name))?;
        debug!("绑定: {} -> {}", abstract_name, implementation);

        let handle = self
            .resolver
            .resolve(implementation)
            .map_err(|e| InjectionError::provision(abstract_name, e))?;

        let instance = self
            .instantiator
            .new_instance(&handle)
            .map_err(|e| InjectionError::provision(abstract_name, e))?;

        let abstract_type = site.field.abstract_type_id().ok_or_else(|| {
            InjectionError::provision(
                abstract_name,
                ConstructionError::FieldRejected {
                    field: site.field.name.to_string(),
                },
            )
        })?;

        handle
            .cast_to(abstract_type, abstract_name, instance)
            .map_err(|e| InjectionError::provision(abstract_name, e))
    }
}

/// 注入器构建器
#[derive(Default)]
pub struct InjectorBuilder {
    config: Option<Arc<dyn DependencyConfig>>,
    resolver: Option<Arc<dyn TypeResolver>>,
    instantiator: Option<Arc<dyn Instantiator>>,
}

impl InjectorBuilder {
    /// 创建空构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置依赖配置
    pub fn with_config<C: DependencyConfig + 'static>(mut self, config: C) -> Self {
        self.config = Some(Arc::new(config));
        self
    }

    /// 设置类型解析器
    pub fn with_resolver<R: TypeResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// 使用类型注册表作为解析器
    pub fn with_registry(self, registry: TypeRegistry) -> Self {
        self.with_resolver(registry)
    }

    /// 设置实例化器
    pub fn with_instantiator<I: Instantiator + 'static>(mut self, instantiator: I) -> Self {
        self.instantiator = Some(Arc::new(instantiator));
        self
    }

    /// 构建注入器
    ///
    /// 未设置配置时返回 [`InjectionError::NullConfiguration`]
    pub fn build(self) -> Result<Injector, InjectionError> {
        let config = self.config.ok_or(InjectionError::NullConfiguration)?;

        let resolver = self.resolver.unwrap_or_else(|| {
            warn!("未设置类型解析器，使用空注册表");
            Arc::new(TypeRegistry::new())
        });
        let instantiator = self
            .instantiator
            .unwrap_or_else(|| Arc::new(DefaultInstantiator));

        Ok(Injector::from_parts(config, resolver, instantiator))
    }
}
