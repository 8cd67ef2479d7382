//! Bean 派生宏实现

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parenthesized, parse::Parse, DeriveInput, LitStr, Path, Result, Token};

/// `#[bean(...)]` 参数
#[derive(Default)]
struct BeanArgs {
    /// 自定义类名
    class: Option<LitStr>,
    /// 能力 trait 路径
    provides: Vec<Path>,
}

impl BeanArgs {
    fn from_input(input: &DeriveInput) -> Result<Self> {
        let mut args = BeanArgs::default();

        for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("bean")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("class") {
                    if args.class.is_some() {
                        return Err(meta.error("重复的 class 参数"));
                    }
                    let class: LitStr = meta.value()?.parse()?;
                    if class.value().trim().is_empty() {
                        return Err(syn::Error::new(class.span(), "class 不能为空"));
                    }
                    args.class = Some(class);
                    Ok(())
                } else if meta.path.is_ident("provides") {
                    let content;
                    parenthesized!(content in meta.input);
                    let paths = content.parse_terminated(Path::parse, Token![,])?;
                    args.provides.extend(paths);
                    Ok(())
                } else {
                    Err(meta.error("不支持的 bean 参数，可用参数: class, provides"))
                }
            })?;
        }

        Ok(args)
    }
}

/// 生成 `Bean` 实现
pub fn derive_bean_impl(input: DeriveInput) -> Result<TokenStream> {
    let args = BeanArgs::from_input(&input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let class = args
        .class
        .unwrap_or_else(|| LitStr::new(&name.to_string(), name.span()));

    let provides = args.provides.iter().map(|path| {
        quote! {
            capabilities.provide::<dyn #path>(
                |it: ::std::sync::Arc<Self>| -> ::std::sync::Arc<dyn #path> { it },
            );
        }
    });

    Ok(quote! {
        impl #impl_generics ::registry_common::Bean for #name #ty_generics #where_clause {
            fn class_name() -> &'static str {
                #class
            }

            #[allow(unused_variables)]
            fn declare_capabilities(capabilities: &mut ::registry_common::CapabilitySet<Self>) {
                #(#provides)*
            }
        }
    })
}
