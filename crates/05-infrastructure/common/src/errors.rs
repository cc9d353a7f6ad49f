//! 错误类型定义
//!
//! 诊断信息中的三条俄文前缀由外部测试逐字节匹配，不得修改。

use thiserror::Error;

/// 装箱的底层错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 依赖注入错误类型
///
/// `inject` 调用与注入器构造对外暴露的唯一错误类型
#[derive(Error, Debug)]
pub enum InjectionError {
    #[error("Конфигурация зависимостей не может быть null")]
    NullConfiguration,

    #[error("Не объявлена реализация для {type_name}")]
    MissingBinding { type_name: String },

    #[error("Ошибка при предоставлении зависимости для {type_name}")]
    Provision {
        type_name: String,
        #[source]
        source: ProvisionError,
    },
}

impl InjectionError {
    /// 创建缺少绑定错误
    pub fn missing_binding(type_name: impl Into<String>) -> Self {
        Self::MissingBinding {
            type_name: type_name.into(),
        }
    }

    /// 创建提供失败错误
    pub fn provision(type_name: impl Into<String>, source: impl Into<ProvisionError>) -> Self {
        Self::Provision {
            type_name: type_name.into(),
            source: source.into(),
        }
    }

    /// 出错字段声明的抽象类型名称
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::NullConfiguration => None,
            Self::MissingBinding { type_name } | Self::Provision { type_name, .. } => {
                Some(type_name)
            }
        }
    }
}

/// 提供失败的根因
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// 类型解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("类型不存在: {type_name}")]
    TypeNotFound { type_name: String },
}

/// 实例构造错误
#[derive(Error, Debug)]
pub enum ConstructionError {
    #[error("类型不可实例化: {type_name}")]
    NotInstantiable { type_name: String },

    #[error("无参构造失败: {type_name}, 原因: {source}")]
    InitializerFailed {
        type_name: String,
        #[source]
        source: BoxError,
    },

    #[error("实例类型与构造器声明不符: {type_name}")]
    UnexpectedInstance { type_name: String },

    #[error("{implementation} 未实现 {abstract_type}")]
    NotAssignable {
        implementation: String,
        abstract_type: String,
    },

    #[error("字段拒绝写入: {field}")]
    FieldRejected { field: String },
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置文件读取失败: {source}")]
    FileReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("配置解析失败: {source}")]
    ParseError { source: BoxError },

    #[error("配置值无效: {key}, 原因: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    /// 创建解析错误
    pub fn parse_error(source: impl Into<BoxError>) -> Self {
        Self::ParseError {
            source: source.into(),
        }
    }

    /// 创建无效值错误
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}
