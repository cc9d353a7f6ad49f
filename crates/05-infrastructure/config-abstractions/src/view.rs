//! 依赖配置视图

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// 依赖配置 trait
///
/// 抽象类型全限定名 → 实现类型全限定名。名称按字符串精确匹配，
/// 构造后不可变。
pub trait DependencyConfig: Send + Sync {
    /// 查找抽象类型的实现名称
    fn lookup(&self, abstract_name: &str) -> Option<&str>;

    /// 绑定数量
    fn len(&self) -> usize;

    /// 是否没有任何绑定
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DependencyConfig for HashMap<String, String> {
    fn lookup(&self, abstract_name: &str) -> Option<&str> {
        self.get(abstract_name).map(String::as_str)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl DependencyConfig for BTreeMap<String, String> {
    fn lookup(&self, abstract_name: &str) -> Option<&str> {
        self.get(abstract_name).map(String::as_str)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<C: DependencyConfig + ?Sized> DependencyConfig for Arc<C> {
    fn lookup(&self, abstract_name: &str) -> Option<&str> {
        (**self).lookup(abstract_name)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
