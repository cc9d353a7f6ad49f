//! 实现组件派生宏实现

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr, Path, Result};

/// 组件配置参数
#[derive(Debug, Clone, Default)]
pub struct ComponentArgs {
    /// 自定义全限定名称
    pub name: Option<String>,
    /// 实现的抽象类型
    pub implements: Vec<Path>,
    /// 可失败的无参构造函数
    pub constructor: Option<Path>,
}

impl ComponentArgs {
    /// 从 `#[component(...)]` 属性中收集参数
    pub fn from_attributes(attrs: &[syn::Attribute]) -> Result<Self> {
        let mut args = ComponentArgs::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("component")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    args.name = Some(lit.value());
                } else if meta.path.is_ident("constructor") {
                    let lit: LitStr = meta.value()?.parse()?;
                    args.constructor = Some(lit.parse()?);
                } else if meta.path.is_ident("implements") {
                    meta.parse_nested_meta(|inner| {
                        args.implements.push(inner.path);
                        Ok(())
                    })?;
                } else {
                    return Err(meta.error("未知参数，支持 name、implements(...)、constructor"));
                }
                Ok(())
            })?;
        }

        Ok(args)
    }
}

/// 实现 #[derive(Component)] 宏
pub fn derive_component_impl(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Component 不支持泛型参数",
        ));
    }

    let args = ComponentArgs::from_attributes(&input.attrs)?;

    let type_name = match &args.name {
        Some(name) => quote! { #name },
        None => quote! { ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#struct_name)) },
    };

    let base = match &args.constructor {
        Some(constructor) => quote! {
            ::injection_common::TypeDescriptor::with_constructor::<Self, _, _>(
                <Self as ::injection_common::Component>::TYPE_NAME,
                #constructor,
            )
        },
        None => quote! {
            ::injection_common::TypeDescriptor::concrete::<Self>(
                <Self as ::injection_common::Component>::TYPE_NAME,
            )
        },
    };

    let casts = args.implements.iter().map(|trait_path| {
        quote! {
            .implements::<Self, dyn #trait_path>(|component| ::std::boxed::Box::new(component))
        }
    });

    Ok(quote! {
        impl ::injection_common::Component for #struct_name {
            const TYPE_NAME: &'static str = #type_name;

            fn descriptor() -> ::injection_common::TypeDescriptor {
                #base
                    #(#casts)*
            }
        }
    })
}
