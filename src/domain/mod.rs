// ==========================================
// 考勤导入系统 - 领域模型层
// ==========================================
// 职责: 定义考勤实体与类型
// 红线: 不含文件读取逻辑,不含汇总/视图逻辑
// ==========================================

pub mod attendance;
pub mod types;

// 重导出核心类型
pub use attendance::{AttendanceRecord, AttendanceReport, CellValue, EmployeeSummary, RawGrid};
pub use types::{AttendanceStatus, ColumnKey, HoursSource, SortDirection, SortKey};
