// ==========================================
// 考勤导入系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类: 结构性错误整批失败;单元格解析失败不在此列（容错降级为 0）
// ==========================================

use crate::domain::types::ColumnKey;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("文件无工作表: {0}")]
    EmptyWorkbook(String),

    // ===== 结构性错误（整批失败）=====
    #[error("未找到表头行: 前 {scanned} 行中没有同时包含 \"Employee ID\" 与 \"Date\" 的行")]
    HeaderNotFound { scanned: usize },

    #[error("缺少必需列: {}", format_keys(.0))]
    MissingColumns(Vec<ColumnKey>),

    // ===== 配置错误 =====
    #[error("配置读取失败 (key: {key}): {message}")]
    ConfigReadError { key: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },

    // ===== 导出错误 =====
    #[error("导出失败: {0}")]
    ExportError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),
}

fn format_keys(keys: &[ColumnKey]) -> String {
    keys.iter()
        .map(|k| k.key_name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ImportError {
    /// 是否为表格结构性错误（表头/必需列）
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ImportError::HeaderNotFound { .. } | ImportError::MissingColumns(_)
        )
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::ConfigReadError {
            key: "<json>".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_names_keys() {
        let err = ImportError::MissingColumns(vec![ColumnKey::EmpId, ColumnKey::Date]);
        assert_eq!(err.to_string(), "缺少必需列: empId, date");
        assert!(err.is_structural());
    }

    #[test]
    fn test_header_not_found_message() {
        let err = ImportError::HeaderNotFound { scanned: 20 };
        assert!(err.to_string().contains("20"));
        assert!(err.is_structural());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ImportError = io.into();
        assert!(matches!(err, ImportError::FileReadError(_)));
        assert!(!err.is_structural());
    }
}
