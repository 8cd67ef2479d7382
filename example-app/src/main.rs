//! # 示例应用程序
//!
//! 演示如何从上下文文件构建 Bean 注册表并按类型查询对象

mod demo;
mod logging;

use anyhow::Context;
use clap::Parser;
use context_impl::options::DEFAULT_ENV_PREFIX;
use context_impl::{ClassPathResolver, ContextLoader, LoaderOptions};
use demo::{Counter, Greeter};
use logging::LoggingConfig;
use registry_abstractions::{Container, ContainerExt};
use registry_common::{QueryError, TypeKey};
use registry_impl::{ContainerBuilder, DefaultContainer};
use std::path::PathBuf;
use tracing::{info, warn};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "Lorn Bean 注册表示例应用")]
struct Args {
    /// 上下文资源定位符
    #[arg(default_value = demo::DEMO_CONTEXT)]
    context: String,

    /// 资源根目录，可多次指定；未指定时使用内置上下文
    #[arg(short, long = "root")]
    roots: Vec<PathBuf>,

    /// 加载器配置文件路径
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// 按类型名查询，可以是完整类型名或最后一段名称
    #[arg(short, long)]
    query: Option<String>,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,

    /// 使用 JSON 格式输出日志
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    LoggingConfig::from_args(&args.log_level, args.json_logs).init()?;

    info!("启动 Lorn Bean 注册表示例应用");

    let container = build_container(&args)?;
    describe(&container)?;

    if let Some(query) = &args.query {
        run_query(&container, query)?;
    }

    demonstrate_capabilities(&container)?;
    Ok(())
}

/// 构建容器
///
/// 指定了资源根目录或配置文件时从文件系统读取上下文，否则使用内置资源。
fn build_container(args: &Args) -> anyhow::Result<DefaultContainer> {
    let mut options = LoaderOptions::load(args.options.as_deref(), DEFAULT_ENV_PREFIX)
        .context("加载器配置无效")?;
    if !args.roots.is_empty() {
        options.resource_roots = args.roots.clone();
    }

    let builder = ContainerBuilder::new(ContextLoader::with_options(demo::catalog(), &options))
        .with_default_format(options.default_format);
    let builder = if args.roots.is_empty() && args.options.is_none() {
        info!("使用内置上下文资源");
        builder.with_resolver(demo::embedded())
    } else {
        builder.with_resolver(ClassPathResolver::from_options(&options))
    };

    builder
        .build_from_locator(&args.context)
        .with_context(|| format!("无法从 {} 构建容器", args.context))
}

/// 输出已编目的类型
fn describe(container: &DefaultContainer) -> anyhow::Result<()> {
    println!("已编目 {} 个对象", container.object_count());
    for key in container.known_types() {
        let count = container.lookup_all(Some(&key))?.len();
        let kind = if key.is_capability() { "能力" } else { "类型" };
        println!("  [{}] {} x{}", kind, key, count);
    }
    Ok(())
}

/// 按名称查询
fn run_query(container: &DefaultContainer, query: &str) -> anyhow::Result<()> {
    let Some(key) = resolve_type(container, query) else {
        // 空白名称在这里报告 InvalidQuery
        let matches = container.lookup_all_by_name(query)?;
        println!("查询 {}: 共 {} 个对象", query, matches.len());
        return Ok(());
    };

    let matches = container.lookup_all(Some(&key))?;
    println!("查询 {}: 共 {} 个对象", key, matches.len());
    for bean in &matches {
        println!("  {:?}", bean);
    }

    match container.lookup_single_or_none(Some(&key)) {
        Ok(Some(bean)) => println!("唯一对象: {:?}", bean),
        Ok(None) => println!("没有对象"),
        Err(QueryError::AmbiguousQuery { candidates, .. }) => {
            warn!("单对象查询存在歧义: {}", key);
            println!("单对象查询存在歧义，共 {} 个候选", candidates);
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// 先按完整类型名查找，再按最后一段名称查找
fn resolve_type(container: &DefaultContainer, query: &str) -> Option<TypeKey> {
    let query = query.trim();
    container.type_key_by_name(query).or_else(|| {
        container
            .known_types()
            .into_iter()
            .find(|key| key.short_name() == query)
    })
}

/// 通过能力使用对象
fn demonstrate_capabilities(container: &DefaultContainer) -> anyhow::Result<()> {
    for greeter in container.get_all::<dyn Greeter>()? {
        println!("{}", greeter.greet());
    }

    if let Some(counter) = container.get_single_or_none::<dyn Counter>()? {
        let first = counter.next();
        let second = counter.next();
        println!("访问计数: {} -> {}", first, second);
    }
    Ok(())
}
