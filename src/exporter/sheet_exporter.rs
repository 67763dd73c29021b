// ==========================================
// 考勤导入系统 - 报表导出器
// ==========================================
// 职责: 当前视图（已过滤/排序）→ 两张表
//   - Summary: 每员工一行
//   - Details: 每条考勤记录一行
// 格式: CSV,数值统一保留 2 位小数
// ==========================================

use crate::domain::attendance::{AttendanceRecord, EmployeeSummary};
use crate::importer::error::{ImportError, ImportResult};
use chrono::NaiveDate;
use csv::Writer;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 导出文件路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub summary: PathBuf,
    pub details: PathBuf,
}

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    #[serde(rename = "Employee ID")]
    emp_id: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Department")]
    department: &'a str,
    #[serde(rename = "Days Present")]
    days_present: u32,
    #[serde(rename = "Total Actual Hours")]
    total_actual_hours: String,
    #[serde(rename = "Equivalent Days")]
    equivalent_days: String,
}

impl<'a> From<&'a EmployeeSummary> for SummaryRow<'a> {
    fn from(summary: &'a EmployeeSummary) -> Self {
        Self {
            emp_id: &summary.emp_id,
            name: &summary.name,
            department: &summary.department,
            days_present: summary.days_present,
            total_actual_hours: format_2dp(summary.total_actual_hours),
            equivalent_days: format_2dp(summary.equivalent_days),
        }
    }
}

#[derive(Debug, Serialize)]
struct DetailRow<'a> {
    #[serde(rename = "Employee ID")]
    emp_id: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Department")]
    department: &'a str,
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Clock In")]
    clock_in: &'a str,
    #[serde(rename = "Clock Out")]
    clock_out: &'a str,
    #[serde(rename = "Regular(H)")]
    regular_h: String,
    #[serde(rename = "Worked Hours")]
    worked_hours: String,
    #[serde(rename = "Total Hours")]
    total_hours: String,
    #[serde(rename = "Actual Hours")]
    actual_hours: String,
    #[serde(rename = "Source")]
    source: String,
    #[serde(rename = "Status")]
    status: String,
}

impl<'a> From<&'a AttendanceRecord> for DetailRow<'a> {
    fn from(record: &'a AttendanceRecord) -> Self {
        Self {
            emp_id: &record.emp_id,
            name: &record.name,
            department: &record.department,
            date: &record.date,
            clock_in: &record.clock_in,
            clock_out: &record.clock_out,
            regular_h: record.raw_regular_h.display(),
            worked_hours: record.raw_worked_hours.display(),
            total_hours: record.raw_total_hours.display(),
            actual_hours: format_2dp(record.actual_hours),
            source: record.source.to_string(),
            status: record.status().to_string(),
        }
    }
}

fn write_sheets(paths: &ExportPaths, summaries: &[&EmployeeSummary]) -> csv::Result<usize> {
    let mut summary_writer = Writer::from_path(&paths.summary)?;
    for summary in summaries {
        summary_writer.serialize(SummaryRow::from(*summary))?;
    }
    summary_writer.flush()?;

    let mut detail_writer = Writer::from_path(&paths.details)?;
    let mut detail_count = 0;
    for summary in summaries {
        for record in &summary.records {
            detail_writer.serialize(DetailRow::from(record))?;
            detail_count += 1;
        }
    }
    detail_writer.flush()?;

    Ok(detail_count)
}

fn format_2dp(value: f64) -> String {
    format!("{:.2}", value)
}

/// 默认导出文件名前缀: attendance_report_YYYYMMDD
pub fn default_export_stem(today: NaiveDate) -> String {
    format!("attendance_report_{}", today.format("%Y%m%d"))
}

pub struct SheetExporter;

impl SheetExporter {
    /// 写出 Summary / Details 两张表
    ///
    /// # 参数
    /// - dir: 输出目录（不存在则创建）
    /// - stem: 文件名前缀
    /// - summaries: 当前视图中的员工汇总（顺序即输出顺序）
    pub fn write(
        &self,
        dir: &Path,
        stem: &str,
        summaries: &[&EmployeeSummary],
    ) -> ImportResult<ExportPaths> {
        fs::create_dir_all(dir)
            .map_err(|e| ImportError::ExportError(format!("{}: {}", dir.display(), e)))?;

        let paths = ExportPaths {
            summary: dir.join(format!("{}_summary.csv", stem)),
            details: dir.join(format!("{}_details.csv", stem)),
        };

        let detail_count = write_sheets(&paths, summaries)
            .map_err(|e| ImportError::ExportError(e.to_string()))?;

        info!(
            summary = %paths.summary.display(),
            details = %paths.details.display(),
            employees = summaries.len(),
            records = detail_count,
            "报表导出完成"
        );
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attendance::CellValue;
    use crate::domain::types::HoursSource;
    use tempfile::TempDir;

    fn sample_summary() -> EmployeeSummary {
        let record = AttendanceRecord {
            emp_id: "E1".to_string(),
            name: "Ann".to_string(),
            department: "Ops".to_string(),
            date: "2024-01-02".to_string(),
            clock_in: "09:00".to_string(),
            clock_out: "17:15".to_string(),
            raw_regular_h: CellValue::Empty,
            raw_worked_hours: CellValue::text("8:15"),
            raw_total_hours: CellValue::Empty,
            actual_hours: 8.25,
            is_present: true,
            source: HoursSource::WorkedHours,
            row_number: 3,
        };
        EmployeeSummary {
            emp_id: "E1".to_string(),
            name: "Ann".to_string(),
            department: "Ops".to_string(),
            days_present: 1,
            total_actual_hours: 8.25,
            equivalent_days: 8.25 / 8.0,
            records: vec![record],
        }
    }

    #[test]
    fn test_default_export_stem() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(default_export_stem(date), "attendance_report_20240309");
    }

    #[test]
    fn test_write_summary_and_details() {
        let dir = TempDir::new().unwrap();
        let summary = sample_summary();

        let paths = SheetExporter
            .write(dir.path(), "report", &[&summary])
            .unwrap();

        let summary_csv = fs::read_to_string(&paths.summary).unwrap();
        let mut lines = summary_csv.lines();
        assert_eq!(
            lines.next(),
            Some("Employee ID,Name,Department,Days Present,Total Actual Hours,Equivalent Days")
        );
        assert_eq!(lines.next(), Some("E1,Ann,Ops,1,8.25,1.03"));

        let details_csv = fs::read_to_string(&paths.details).unwrap();
        let mut lines = details_csv.lines();
        assert_eq!(
            lines.next(),
            Some("Employee ID,Name,Department,Date,Clock In,Clock Out,Regular(H),Worked Hours,Total Hours,Actual Hours,Source,Status")
        );
        assert_eq!(
            lines.next(),
            Some("E1,Ann,Ops,2024-01-02,09:00,17:15,,8:15,,8.25,Worked Hours,Present")
        );
    }

    #[test]
    fn test_write_empty_view() {
        let dir = TempDir::new().unwrap();
        let paths = SheetExporter.write(dir.path(), "empty", &[]).unwrap();

        assert!(paths.summary.exists());
        assert!(paths.details.exists());
    }
}
