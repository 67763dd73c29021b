// ==========================================
// 考勤导入系统 - 考勤领域模型
// ==========================================
// 原始表格(RawGrid) → 日考勤记录(AttendanceRecord) → 员工汇总(EmployeeSummary)
// 各阶段产物一经生成即不再修改
// ==========================================

use crate::domain::types::{AttendanceStatus, HoursSource};
use serde::{Deserialize, Serialize};

// ==========================================
// CellValue - 未定型单元格
// ==========================================
// 外部解码器只产出三种值: 文本 / 数值 / 空
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// 字符串化（整数值不带小数部分）
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
        }
    }

    /// 字符串化并去首尾空白（表头匹配口径）
    pub fn trimmed(&self) -> String {
        self.display().trim().to_string()
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

// ==========================================
// RawGrid - 原始表格
// ==========================================
// 行序 = 源文件行序;表头定位前不做任何结构假设
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawGrid {
    rows: Vec<Vec<CellValue>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// 由字符串二维数组构造（空串视为空单元格）
    pub fn from_strings<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|c| CellValue::from(c.as_ref())).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ==========================================
// AttendanceRecord - 日考勤记录
// ==========================================
// 标识: (emp_id, date),同一批次内重复日期不合并,各自成一条
// 生命周期: 行分类阶段创建,之后只读,归属唯一的 EmployeeSummary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    // ===== 标识 =====
    pub emp_id: String,
    pub name: String,       // 列缺失时为 unknown_label
    pub department: String, // 列缺失时为 unknown_label
    pub date: String,       // 不做日历校验

    // ===== 打卡原始值 =====
    pub clock_in: String,
    pub clock_out: String,

    // ===== 工时原始值（审计用,原样保留）=====
    pub raw_regular_h: CellValue,
    pub raw_worked_hours: CellValue,
    pub raw_total_hours: CellValue,

    // ===== 派生 =====
    pub actual_hours: f64,
    pub is_present: bool,
    pub source: HoursSource,

    // ===== 元信息 =====
    pub row_number: usize, // 源表行号（1 起）
}

impl AttendanceRecord {
    pub fn status(&self) -> AttendanceStatus {
        AttendanceStatus::from_presence(self.is_present)
    }
}

// ==========================================
// EmployeeSummary - 员工汇总
// ==========================================
// 姓名/部门取首次出现的记录（先到先得）
// days_present / total_actual_hours 只由出勤记录累加
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub emp_id: String,
    pub name: String,
    pub department: String,
    pub days_present: u32,
    pub total_actual_hours: f64,
    pub equivalent_days: f64,
    pub records: Vec<AttendanceRecord>, // 源表行序
}

impl EmployeeSummary {
    /// 出勤但工时合计为 0（数据质量信号）
    pub fn has_issue(&self) -> bool {
        self.days_present > 0 && self.total_actual_hours == 0.0
    }
}

// ==========================================
// AttendanceReport - 一次导入的完整结果
// ==========================================
// 每次导入整体替换,不与上一次结果合并
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceReport {
    pub batch_id: String,
    pub header_row_index: usize, // 表头所在行（0 起）
    pub total_records: usize,
    pub skipped_rows: usize,
    pub summaries: Vec<EmployeeSummary>, // 首次出现顺序
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display_integral_number() {
        assert_eq!(CellValue::Number(8.0).display(), "8");
        assert_eq!(CellValue::Number(7.5).display(), "7.5");
        assert_eq!(CellValue::Empty.display(), "");
    }

    #[test]
    fn test_cell_trimmed() {
        assert_eq!(CellValue::text("  Employee ID ").trimmed(), "Employee ID");
    }

    #[test]
    fn test_grid_from_strings_maps_blank_to_empty() {
        let grid = RawGrid::from_strings(vec![vec!["E1", ""]]);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.rows()[0][0], CellValue::text("E1"));
        assert_eq!(grid.rows()[0][1], CellValue::Empty);
    }

    #[test]
    fn test_summary_issue_flag() {
        let mut summary = EmployeeSummary {
            emp_id: "E1".to_string(),
            name: "Ann".to_string(),
            department: "Ops".to_string(),
            days_present: 1,
            total_actual_hours: 0.0,
            equivalent_days: 0.0,
            records: Vec::new(),
        };
        assert!(summary.has_issue());

        summary.total_actual_hours = 8.0;
        assert!(!summary.has_issue());

        summary.days_present = 0;
        summary.total_actual_hours = 0.0;
        assert!(!summary.has_issue());
    }
}
