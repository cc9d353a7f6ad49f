//! 抽象类型宏实现

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, punctuated::Punctuated, Expr, ItemTrait,
    Lit, Meta, Result, Token,
};

/// 抽象类型宏参数
#[derive(Debug, Clone, Default)]
pub struct AbstractTypeArgs {
    /// 自定义全限定名称
    pub name: Option<String>,
}

impl Parse for AbstractTypeArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = AbstractTypeArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::NameValue(nv) if nv.path.is_ident("name") => match nv.value {
                    Expr::Lit(expr_lit) => match expr_lit.lit {
                        Lit::Str(lit_str) => args.name = Some(lit_str.value()),
                        other => {
                            return Err(syn::Error::new_spanned(other, "name 必须是字符串"));
                        }
                    },
                    other => return Err(syn::Error::new_spanned(other, "name 必须是字符串")),
                },
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "未知参数，仅支持 name = \"full.type.Name\"",
                    ));
                }
            }
        }

        Ok(args)
    }
}

/// 实现 #[abstract_type] 宏
pub fn abstract_type_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = if args.is_empty() {
        AbstractTypeArgs::default()
    } else {
        match syn::parse::<AbstractTypeArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        }
    };

    let item_trait = parse_macro_input!(input as ItemTrait);

    if !item_trait.generics.params.is_empty() {
        return syn::Error::new_spanned(&item_trait.generics, "抽象类型不支持泛型参数")
            .to_compile_error()
            .into();
    }

    let trait_name = &item_trait.ident;
    let type_name = match &args.name {
        Some(name) => quote! { #name },
        None => quote! { ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#trait_name)) },
    };

    let expanded = quote! {
        #item_trait

        impl ::injection_common::AbstractType for dyn #trait_name {
            const TYPE_NAME: &'static str = #type_name;
        }
    };

    TokenStream::from(expanded)
}
