// ==========================================
// 考勤导入系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供命令行调用
// ==========================================

pub mod attendance_api;
pub mod error;

// 重导出核心类型
pub use attendance_api::{AttendanceApi, LoadResponse};
pub use error::{ApiError, ApiResult};
