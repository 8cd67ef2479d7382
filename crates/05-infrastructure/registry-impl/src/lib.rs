//! # 注册表具体实现
//!
//! 提供按身份去重的默认容器 [`DefaultContainer`] 以及构建入口 [`ContainerBuilder`]。
//!
//! ## 基本使用
//!
//! ```rust
//! use registry_abstractions::ContainerExt;
//! use registry_common::{Bean, BeanRef, CapabilitySet};
//! use registry_impl::DefaultContainer;
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! struct English;
//!
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "Hello".to_string()
//!     }
//! }
//!
//! impl Bean for English {
//!     fn declare_capabilities(capabilities: &mut CapabilitySet<Self>) {
//!         capabilities.provide::<dyn Greeter>(|it| it);
//!     }
//! }
//!
//! let container = DefaultContainer::from_beans([BeanRef::new(English)]);
//! let greeter = container.get_single_or_none::<dyn Greeter>().unwrap().unwrap();
//! assert_eq!(greeter.greet(), "Hello");
//! ```

pub mod builder;
pub mod container;
mod index;

pub use builder::ContainerBuilder;
pub use container::DefaultContainer;

#[cfg(test)]
mod tests;
