//! # Bean Macros
//!
//! 这个 crate 提供用于声明对象能力的派生宏。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use bean_macros::Bean;
//!
//! pub trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! #[derive(Bean)]
//! #[bean(class = "EnglishGreeter", provides(Greeter))]
//! pub struct EnglishGreeter;
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod bean;

/// Bean 派生宏
///
/// 为类型实现 `registry_common::Bean`。
///
/// # 参数
///
/// - `class = "Name"` - 上下文记录中使用的类名（默认为类型标识符）
/// - `provides(TraitA, path::TraitB)` - 对象提供的能力 trait，类型必须实现这些 trait，
///   且 trait 需要以 `Send + Sync` 为父 trait
///
/// # 示例
///
/// ```rust,ignore
/// #[derive(Bean)]
/// #[bean(provides(Greeter, Named))]
/// pub struct FrenchGreeter {
///     name: String,
/// }
/// ```
#[proc_macro_derive(Bean, attributes(bean))]
pub fn derive_bean(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    bean::derive_bean_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
