// ==========================================
// 考勤导入系统 - 导出层
// ==========================================
// 职责: 员工汇总视图 → Summary / Details 报表文件
// ==========================================

pub mod sheet_exporter;

pub use sheet_exporter::{default_export_stem, ExportPaths, SheetExporter};
