// ==========================================
// 考勤导入系统 - 导入层
// ==========================================
// 职责: 外部考勤导出表 → 日考勤记录 → 员工汇总
// 支持: Excel (.xlsx/.xls), CSV
// ==========================================

// 模块声明
pub mod attendance_importer_impl;
pub mod column_mapper;
pub mod error;
pub mod file_parser;
pub mod header_locator;
pub mod importer_trait;
pub mod row_classifier;
pub mod value_parser;

// 重导出核心类型
pub use attendance_importer_impl::AttendanceImporterImpl;
pub use column_mapper::{ColumnMap, ColumnMapper};
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvGridReader, ExcelGridReader, UniversalGridReader};
pub use header_locator::{HeaderLocator, DEFAULT_HEADER_SCAN_ROWS};
pub use row_classifier::{HourFields, RowClassifier, HOURS_RULES};
pub use value_parser::{is_not_empty, parse_time_string_to_decimal, safe_float};

// 重导出 Trait 接口
pub use importer_trait::{AttendanceImporter, GridReader};
