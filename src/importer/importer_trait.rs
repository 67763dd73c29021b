// ==========================================
// 考勤导入系统 - 导入 Trait
// ==========================================
// 职责: 定义导入接口（不包含实现）
// 流程: 文件 → RawGrid → 表头定位 → 列映射 → 行分类 → 员工汇总
// ==========================================

use crate::domain::attendance::{AttendanceReport, RawGrid};
use crate::importer::error::ImportResult;
use std::path::Path;

// ==========================================
// AttendanceImporter Trait
// ==========================================
// 用途: 考勤导入主接口
// 实现者: AttendanceImporterImpl
pub trait AttendanceImporter: Send + Sync {
    /// 从文件导入（.xlsx / .xls / .csv）
    ///
    /// # 返回
    /// - Ok(AttendanceReport): 完整导入结果
    /// - Err: 文件读取失败 / 表头未找到 / 必需列缺失（无部分结果）
    fn import_file(&self, file_path: &Path) -> ImportResult<AttendanceReport>;

    /// 从内存中的原始表格导入
    ///
    /// # 说明
    /// - 纯计算,无副作用;同一表格重复导入结果完全一致
    fn ingest_grid(&self, grid: &RawGrid) -> ImportResult<AttendanceReport>;
}

// ==========================================
// GridReader Trait
// ==========================================
// 用途: 文件解码为原始表格（外部边界）
// 实现者: CsvGridReader, ExcelGridReader, UniversalGridReader
pub trait GridReader: Send + Sync {
    /// 读取文件第一个工作表为 RawGrid（不做结构假设）
    fn read_grid(&self, file_path: &Path) -> ImportResult<RawGrid>;
}
