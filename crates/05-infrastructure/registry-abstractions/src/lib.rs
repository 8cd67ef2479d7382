//! # Registry Abstractions
//!
//! 注册表抽象层，定义对象查询与上下文加载的核心接口。
//!
//! ## 核心接口
//!
//! - [`Container`] - 按类型查询已编目对象
//! - [`ContainerExt`] - 面向具体 Rust 类型的查询扩展
//! - [`ObjectLoader`] - 从字节流加载根对象序列
//! - [`ResourceResolver`] - 将资源定位符解析为字节流

pub mod container;
pub mod loader;
pub mod resource;

pub use container::*;
pub use loader::*;
pub use resource::*;
