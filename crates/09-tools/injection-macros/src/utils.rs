//! 宏工具函数

use syn::{Field, GenericArgument, PathArguments, Type};

/// 注入标记属性名称
pub const MARKER_ATTRIBUTE: &str = "auto_injectable";

/// 从类型中提取第一个泛型参数
pub fn extract_generic_type(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            if let PathArguments::AngleBracketed(args) = &segment.arguments {
                if let Some(GenericArgument::Type(inner_type)) = args.args.first() {
                    return Some(inner_type);
                }
            }
        }
    }
    None
}

/// 类型最后一段的标识符
pub fn last_segment_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None,
    }
}

/// 检查类型是否为 Option<T>
pub fn is_option_type(ty: &Type) -> bool {
    last_segment_name(ty).as_deref() == Some("Option")
}

/// 检查字段是否有特定属性
pub fn field_has_attribute(field: &Field, attr_name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(attr_name))
}

/// 注入字段的智能指针种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Box,
    Arc,
    Rc,
}

impl Pointer {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Box" => Some(Self::Box),
            "Arc" => Some(Self::Arc),
            "Rc" => Some(Self::Rc),
            _ => None,
        }
    }
}

/// 拆解 `Option<P<A>>`，返回指针种类和抽象类型 `A`
pub fn split_injectable_type(ty: &Type) -> Option<(Pointer, &Type)> {
    if !is_option_type(ty) {
        return None;
    }
    let pointer_ty = extract_generic_type(ty)?;
    let pointer = Pointer::from_name(&last_segment_name(pointer_ty)?)?;
    let abstract_ty = extract_generic_type(pointer_ty)?;
    Some((pointer, abstract_ty))
}
