// ==========================================
// 考勤导入系统 - 行分类器
// ==========================================
// 职责: 数据行 → AttendanceRecord（出勤判定 + 工时来源回退）
// ==========================================
// 出勤规则: Regular(H) > 0 或 Worked Hours 非空
//           Total Hours 不参与出勤判定,只参与工时回退
// 工时回退（首个命中即停止）:
//   1. Regular(H) > 0       → Regular(H) 数值
//   2. Worked Hours 非空    → Worked Hours 解析为小时
//   3. Total Hours 非空     → Total Hours 解析为小时
//   4. 其他                 → 0, 来源 None
// 注意: Worked Hours 为 "0:00" 时 出勤=true 且 工时=0,保持原样
// ==========================================

use crate::domain::attendance::{AttendanceRecord, CellValue};
use crate::domain::types::{ColumnKey, HoursSource};
use crate::importer::column_mapper::ColumnMap;
use crate::importer::value_parser::{is_not_empty, parse_time_string_to_decimal, safe_float};
use tracing::trace;

/// 工时回退规则（按优先级排列）
pub const HOURS_RULES: [HoursSource; 4] = [
    HoursSource::RegularH,
    HoursSource::WorkedHours,
    HoursSource::TotalHours,
    HoursSource::None,
];

// ==========================================
// HourFields - 一行的三个工时原始值
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct HourFields<'a> {
    pub regular_h: &'a CellValue,
    pub worked_hours: &'a CellValue,
    pub total_hours: &'a CellValue,
}

impl<'a> HourFields<'a> {
    /// 出勤判定
    pub fn is_present(&self) -> bool {
        safe_float(self.regular_h) > 0.0 || is_not_empty(self.worked_hours)
    }

    /// 单条规则求值（不命中 → None）
    pub fn apply(&self, rule: HoursSource) -> Option<f64> {
        match rule {
            HoursSource::RegularH => {
                let value = safe_float(self.regular_h);
                (value > 0.0).then_some(value)
            }
            HoursSource::WorkedHours => is_not_empty(self.worked_hours)
                .then(|| parse_time_string_to_decimal(self.worked_hours)),
            HoursSource::TotalHours => is_not_empty(self.total_hours)
                .then(|| parse_time_string_to_decimal(self.total_hours)),
            HoursSource::None => Some(0.0),
        }
    }

    /// 按 HOURS_RULES 顺序回退,返回 (actual_hours, source)
    pub fn resolve_hours(&self) -> (f64, HoursSource) {
        HOURS_RULES
            .iter()
            .find_map(|rule| self.apply(*rule).map(|hours| (hours, *rule)))
            .unwrap_or((0.0, HoursSource::None))
    }
}

// ==========================================
// RowClassifier
// ==========================================
pub struct RowClassifier<'m> {
    columns: &'m ColumnMap,
    unknown_label: String,
}

impl<'m> RowClassifier<'m> {
    pub fn new(columns: &'m ColumnMap, unknown_label: impl Into<String>) -> Self {
        Self {
            columns,
            unknown_label: unknown_label.into(),
        }
    }

    /// 分类一行
    ///
    /// # 参数
    /// - row: 数据行
    /// - row_number: 源表行号（1 起,审计用）
    ///
    /// # 返回
    /// - Some(record): 有效数据行
    /// - None: empId 与 date 均为空（页脚/空行,直接跳过）
    pub fn classify(&self, row: &[CellValue], row_number: usize) -> Option<AttendanceRecord> {
        let emp_id = self.columns.cell(row, ColumnKey::EmpId);
        let date = self.columns.cell(row, ColumnKey::Date);
        if !is_not_empty(emp_id) && !is_not_empty(date) {
            trace!(row_number, "跳过空行");
            return None;
        }

        let hours = HourFields {
            regular_h: self.columns.cell(row, ColumnKey::RegularH),
            worked_hours: self.columns.cell(row, ColumnKey::WorkedHours),
            total_hours: self.columns.cell(row, ColumnKey::TotalHours),
        };
        let is_present = hours.is_present();
        let (actual_hours, source) = hours.resolve_hours();

        Some(AttendanceRecord {
            emp_id: emp_id.display(),
            name: self.identity_field(row, ColumnKey::Name),
            department: self.identity_field(row, ColumnKey::Dept),
            date: date.display(),
            clock_in: self.columns.cell(row, ColumnKey::ClockIn).display(),
            clock_out: self.columns.cell(row, ColumnKey::ClockOut).display(),
            raw_regular_h: hours.regular_h.clone(),
            raw_worked_hours: hours.worked_hours.clone(),
            raw_total_hours: hours.total_hours.clone(),
            actual_hours,
            is_present,
            source,
            row_number,
        })
    }

    // 姓名/部门: 列缺失时填 unknown_label
    fn identity_field(&self, row: &[CellValue], key: ColumnKey) -> String {
        if self.columns.is_mapped(key) {
            self.columns.cell(row, key).display()
        } else {
            self.unknown_label.clone()
        }
    }
}
