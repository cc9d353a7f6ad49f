//! 注入点扫描

use injection_common::{FieldInfo, Injectable};

/// 注入点
///
/// 单次 `inject` 调用内派生，不被保留
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionSite {
    /// 字段信息
    pub field: FieldInfo,
    /// 字段声明顺序
    pub position: usize,
}

/// 按声明顺序列出带注入标记的字段
///
/// 未标记字段只参与枚举，不会被读取或写入
pub fn injection_sites<T: Injectable + ?Sized>(target: &T) -> Vec<InjectionSite> {
    target
        .fields()
        .into_iter()
        .enumerate()
        .filter(|(_, field)| field.is_auto_injectable())
        .map(|(position, field)| InjectionSite { field, position })
        .collect()
}
