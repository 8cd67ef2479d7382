//! 演示用对象类型

use bean_macros::Bean;
use context_impl::{EmbeddedResources, TypeCatalog};
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// 内置演示上下文的定位符
pub const DEMO_CONTEXT: &str = "/contexts/demo.json";

/// 问候能力
pub trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

/// 计数能力
pub trait Counter: Send + Sync {
    fn next(&self) -> u64;
}

#[derive(Debug, Deserialize, Bean)]
#[bean(provides(Greeter))]
pub struct EnglishGreeter {
    name: String,
}

impl Greeter for EnglishGreeter {
    fn greet(&self) -> String {
        format!("Hello, {}!", self.name)
    }
}

#[derive(Debug, Deserialize, Bean)]
#[bean(provides(Greeter))]
pub struct FrenchGreeter {
    name: String,
    #[serde(default)]
    formal: bool,
}

impl Greeter for FrenchGreeter {
    fn greet(&self) -> String {
        if self.formal {
            format!("Bonjour, {} !", self.name)
        } else {
            format!("Salut, {} !", self.name)
        }
    }
}

#[derive(Debug, Default, Deserialize, Bean)]
#[bean(provides(Counter))]
#[serde(default)]
pub struct VisitCounter {
    start: u64,
    #[serde(skip)]
    visits: AtomicU64,
}

impl Counter for VisitCounter {
    fn next(&self) -> u64 {
        self.start + self.visits.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// 注册所有演示类型
pub fn catalog() -> TypeCatalog {
    let mut catalog = TypeCatalog::new();
    catalog
        .register::<EnglishGreeter>()
        .register::<FrenchGreeter>()
        .register::<VisitCounter>();
    catalog
}

/// 编译进二进制的演示上下文
pub fn embedded() -> EmbeddedResources {
    EmbeddedResources::new()
        .with_resource(DEMO_CONTEXT, &include_bytes!("../contexts/demo.json")[..])
        .with_resource(
            "/contexts/demo.toml",
            &include_bytes!("../contexts/demo.toml")[..],
        )
}
