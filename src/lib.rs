// ==========================================
// 考勤导入系统 - 核心库
// ==========================================
// 技术栈: Rust + calamine/csv
// 系统定位: 打卡导出表 → 日考勤记录 → 员工汇总
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部数据
pub mod importer;

// 引擎层 - 汇总与视图规则
pub mod engine;

// 导出层 - 报表文件
pub mod exporter;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 当前结果与业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AttendanceStatus, ColumnKey, HoursSource, SortDirection, SortKey};

// 领域实体
pub use domain::{AttendanceRecord, AttendanceReport, CellValue, EmployeeSummary, RawGrid};

// 导入
pub use importer::{AttendanceImporter, AttendanceImporterImpl, ImportError, ImportResult};

// 引擎
pub use engine::{apply_view, AttendanceAggregator, SortState, ViewState};

// API
pub use api::{AttendanceApi, ApiError};

// 配置
pub use config::{IngestConfig, IngestConfigReader};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "考勤导入系统";
