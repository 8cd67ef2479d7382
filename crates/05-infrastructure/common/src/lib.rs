//! # Registry Common
//!
//! 这个 crate 提供了 Lorn Bean 注册表的公共类型。
//!
//! ## 核心类型
//!
//! - [`TypeKey`] - 可查询类型（具体类型或能力 trait）的标识
//! - [`Bean`] - 可编目对象 trait，声明对象满足的能力
//! - [`BeanRef`] - 已注册对象的共享句柄，按引用身份比较
//! - [`QueryError`] / [`ContextError`] - 查询与上下文构建错误
//!
//! ## 设计原则
//!
//! - 能力表由对象的提供者显式声明，不依赖运行时反射
//! - 去重只看分配身份，从不比较值
//! - 注册表构建后只读，可在线程间自由共享

pub mod bean;
pub mod errors;
pub mod metadata;

pub use bean::*;
pub use errors::*;
pub use metadata::*;
