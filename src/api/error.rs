// ==========================================
// 考勤导入系统 - API层错误类型
// ==========================================
// 职责: 将导入层错误转换为单条可读错误消息
// ==========================================

use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 导入错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportError(String),

    #[error("表格结构错误: {0}")]
    StructureError(String),

    #[error("报表导出失败: {0}")]
    ExportError(String),

    // ==========================================
    // 状态错误
    // ==========================================
    #[error("尚未加载考勤数据")]
    NoReportLoaded,

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        if err.is_structural() {
            return ApiError::StructureError(err.to_string());
        }
        match err {
            ImportError::ExportError(msg) => ApiError::ExportError(msg),
            ImportError::InternalError(msg) => ApiError::InternalError(msg),
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
