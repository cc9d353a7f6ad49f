//! 注入目标派生宏实现

use crate::utils::{field_has_attribute, split_injectable_type, Pointer, MARKER_ATTRIBUTE};
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

/// 实现 #[derive(Injectable)] 宏
pub fn derive_injectable_impl(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "Injectable 只支持具名字段结构体",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "Injectable 只能用于结构体",
            ))
        }
    };

    let mut field_infos = Vec::with_capacity(fields.len());
    let mut write_arms = Vec::new();

    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name = ident.to_string();
        let ty = &field.ty;

        if !field_has_attribute(field, MARKER_ATTRIBUTE) {
            field_infos.push(quote! {
                ::injection_common::FieldInfo::plain(#field_name, ::core::stringify!(#ty))
            });
            continue;
        }

        let (pointer, abstract_ty) = split_injectable_type(ty).ok_or_else(|| {
            syn::Error::new_spanned(
                ty,
                "#[auto_injectable] 字段必须是 Option<Box<dyn Trait>>、Option<Arc<dyn Trait>> 或 Option<Rc<dyn Trait>>",
            )
        })?;

        field_infos.push(quote! {
            ::injection_common::FieldInfo::auto_injectable::<#abstract_ty>(#field_name)
        });

        let assign = match pointer {
            Pointer::Box => quote! { *boxed },
            Pointer::Arc => quote! { ::std::sync::Arc::from(*boxed) },
            Pointer::Rc => quote! { ::std::rc::Rc::from(*boxed) },
        };

        write_arms.push(quote! {
            #field_name => {
                let boxed = instance.downcast::<::std::boxed::Box<#abstract_ty>>()?;
                self.#ident = ::core::option::Option::Some(#assign);
                ::core::result::Result::Ok(())
            }
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::injection_common::Injectable for #struct_name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#struct_name))
            }

            fn fields(&self) -> ::std::vec::Vec<::injection_common::FieldInfo> {
                ::std::vec![#(#field_infos),*]
            }

            #[allow(unused_variables)]
            fn write_field(
                &mut self,
                field: &str,
                instance: ::injection_common::Instance,
            ) -> ::core::result::Result<(), ::injection_common::Instance> {
                match field {
                    #(#write_arms)*
                    _ => ::core::result::Result::Err(instance),
                }
            }
        }
    })
}
