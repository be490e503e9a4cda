use std::fmt;

/// 单条校验失败
///
/// `index` 为批次内从 1 开始的序号。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    BatchSize { len: usize, max: usize },
    InvalidUrl { index: usize },
    InvalidShortcode { index: usize },
    InvalidValidity { index: usize },
}

impl Violation {
    /// 违规所属请求的序号（批次级别违规返回 `None`）
    pub fn index(&self) -> Option<usize> {
        match self {
            Violation::BatchSize { .. } => None,
            Violation::InvalidUrl { index }
            | Violation::InvalidShortcode { index }
            | Violation::InvalidValidity { index } => Some(*index),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::BatchSize { len, max } => write!(
                f,
                "Batch must contain between 1 and {} links (got {})",
                max, len
            ),
            Violation::InvalidUrl { index } => write!(f, "URL #{} is invalid", index),
            Violation::InvalidShortcode { index } => {
                write!(f, "Shortcode #{} must be alphanumeric", index)
            }
            Violation::InvalidValidity { index } => write!(
                f,
                "Validity #{} must be a positive whole number of minutes",
                index
            ),
        }
    }
}

/// 批次校验错误，包含整个批次内的所有违规
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// 每条违规一行的用户可读消息
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// 是否存在引用指定请求序号的违规
    pub fn references(&self, index: usize) -> bool {
        self.violations.iter().any(|v| v.index() == Some(index))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("\n"))
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone)]
pub enum QuicklinkError {
    Validation(ValidationError),
    FileOperation(String),
    Serialization(String),
    Config(String),
    StorageBackendNotFound(String),
}

impl QuicklinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            QuicklinkError::Validation(_) => "E001",
            QuicklinkError::FileOperation(_) => "E002",
            QuicklinkError::Serialization(_) => "E003",
            QuicklinkError::Config(_) => "E004",
            QuicklinkError::StorageBackendNotFound(_) => "E005",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            QuicklinkError::Validation(_) => "Validation Error",
            QuicklinkError::FileOperation(_) => "File Operation Error",
            QuicklinkError::Serialization(_) => "Serialization Error",
            QuicklinkError::Config(_) => "Configuration Error",
            QuicklinkError::StorageBackendNotFound(_) => "Storage Backend Not Found",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> String {
        match self {
            QuicklinkError::Validation(err) => err.to_string(),
            QuicklinkError::FileOperation(msg)
            | QuicklinkError::Serialization(msg)
            | QuicklinkError::Config(msg)
            | QuicklinkError::StorageBackendNotFound(msg) => msg.clone(),
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for QuicklinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for QuicklinkError {}

// 便捷的构造函数
impl QuicklinkError {
    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        QuicklinkError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        QuicklinkError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        QuicklinkError::Config(msg.into())
    }

    pub fn storage_backend_not_found<T: Into<String>>(msg: T) -> Self {
        QuicklinkError::StorageBackendNotFound(msg.into())
    }
}

impl From<ValidationError> for QuicklinkError {
    fn from(err: ValidationError) -> Self {
        QuicklinkError::Validation(err)
    }
}

impl From<std::io::Error> for QuicklinkError {
    fn from(err: std::io::Error) -> Self {
        QuicklinkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for QuicklinkError {
    fn from(err: serde_json::Error) -> Self {
        QuicklinkError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for QuicklinkError {
    fn from(err: config::ConfigError) -> Self {
        QuicklinkError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuicklinkError>;
