//! # Bean 上下文加载实现
//!
//! 将持久化的上下文（JSON 记录流或 TOML 文档）反序列化为根对象序列。
//!
//! ## 主要功能
//!
//! - **类型目录**: [`TypeCatalog`] 将类名映射到对象工厂
//! - **上下文加载器**: [`ContextLoader`] 逐条解码记录并维护 `id` / `ref` 引用
//! - **资源解析**: [`ClassPathResolver`] 与 [`EmbeddedResources`]
//! - **加载器配置**: [`LoaderOptions`] 支持 TOML 文件与环境变量
//!
//! ## 上下文格式
//!
//! ```json
//! {"id": "greeter", "class": "EnglishGreeter", "properties": {"name": "Lorn"}}
//! {"ref": "greeter"}
//! ```

pub mod catalog;
pub mod loader;
pub mod options;
pub mod record;
pub mod resolver;

pub use catalog::{BeanFactoryFn, TypeCatalog};
pub use loader::ContextLoader;
pub use options::LoaderOptions;
pub use record::{BeanRecord, DefinitionRecord, ReferenceRecord};
pub use resolver::{ClassPathResolver, EmbeddedResources};
