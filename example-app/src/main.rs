//! # 示例应用程序
//!
//! 从配置文件加载依赖绑定，并向 `SomeBean` 注入实现

mod lab5;

use anyhow::Context;
use clap::Parser;
use config_abstractions::DependencyConfig;
use config_impl::{DependencyConfigLoader, MemorySource};
use di_impl::Injector;
use lab5::SomeBean;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "lab5 字段注入示例应用")]
struct Args {
    /// 依赖配置文件路径（.properties / .toml / .json）
    #[arg(short, long, default_value = "config/di.properties")]
    config: PathBuf,

    /// 额外绑定，格式为 `抽象类型=实现类型`，优先级高于配置文件
    #[arg(short, long = "bind")]
    bindings: Vec<String>,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志，RUST_LOG 优先
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("启动 lab5 字段注入示例应用");

    let mut overrides = MemorySource::new().with_priority(1000);
    for binding in &args.bindings {
        let (abstract_name, implementation) = binding
            .split_once('=')
            .with_context(|| format!("绑定格式应为 抽象类型=实现类型: {binding}"))?;
        overrides = overrides.bind(abstract_name.trim(), implementation.trim());
    }

    let config = DependencyConfigLoader::new()
        .add_file(&args.config)
        .with_context(|| format!("不支持的配置文件: {}", args.config.display()))?
        .add_source(overrides)
        .load()
        .await
        .with_context(|| format!("加载配置失败: {}", args.config.display()))?;
    info!("已加载 {} 条依赖绑定", config.len());

    let registry = lab5::registry();
    info!("已注册类型: {:?}", registry.type_names());

    let injector = Injector::new(Some(config), registry)?;
    let mut bean = SomeBean::default();

    if let Err(e) = injector.inject(&mut bean) {
        error!("注入失败: {}", e);
        return Err(e.into());
    }

    println!("{}", bean.foo());
    info!("应用已结束");
    Ok(())
}
