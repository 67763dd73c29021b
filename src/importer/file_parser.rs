// ==========================================
// 考勤导入系统 - 文件解析器实现
// ==========================================
// 职责: 文件 → RawGrid（只解码,不识别表头）
// 支持: Excel (.xlsx/.xls) / CSV (.csv),仅第一个工作表
// ==========================================

use crate::domain::attendance::{CellValue, RawGrid};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::GridReader;
use calamine::{open_workbook_auto, Data, ExcelDateTime, Reader};
use chrono::Timelike;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// 支持的扩展名
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "csv"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// CSV Reader 实现
// ==========================================
pub struct CsvGridReader;

impl GridReader for CsvGridReader {
    fn read_grid(&self, file_path: &Path) -> ImportResult<RawGrid> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false) // 表头位置未知,交给表头定位器
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<CellValue> = record
                .iter()
                .map(|value| CellValue::from(value.trim_start_matches('\u{feff}')))
                .collect();
            rows.push(row);
        }

        debug!(rows = rows.len(), "CSV 解码完成");
        Ok(RawGrid::new(rows))
    }
}

// ==========================================
// Excel Reader 实现
// ==========================================
pub struct ExcelGridReader;

impl GridReader for ExcelGridReader {
    fn read_grid(&self, file_path: &Path) -> ImportResult<RawGrid> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        // 只读第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::EmptyWorkbook(file_path.display().to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        // range 从首个非空单元格开始,补齐到工作表绝对坐标
        let (start_row, start_col) = range
            .start()
            .map(|(r, c)| (r as usize, c as usize))
            .unwrap_or((0, 0));

        let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); start_row];
        for data_row in range.rows() {
            let mut row = vec![CellValue::Empty; start_col];
            row.extend(data_row.iter().map(cell_from_excel));
            rows.push(row);
        }

        debug!(sheet = %sheet_name, rows = rows.len(), "Excel 解码完成");
        Ok(RawGrid::new(rows))
    }
}

/// calamine 单元格 → CellValue
///
/// 日期/时间单元格按显示习惯转为文本:
/// - 时长格式（[h]:mm）→ 累计 "H:MM"（可超过 24 小时）
/// - 序列值 < 1（纯时间）→ "H:MM"
/// - 零点整 → "YYYY-MM-DD"
/// - 其余 → "YYYY-MM-DD HH:MM"
fn cell_from_excel(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(n) => CellValue::Number(*n),
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Bool(b) => CellValue::text(if *b { "TRUE" } else { "FALSE" }),
        Data::Error(e) => CellValue::Text(format!("#{:?}", e)),
        Data::DateTime(dt) => excel_datetime_to_text(dt)
            .map(CellValue::Text)
            .unwrap_or(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

fn excel_datetime_to_text(dt: &ExcelDateTime) -> Option<String> {
    if dt.is_duration() {
        let millis = dt.as_duration()?.num_milliseconds();
        let total_minutes = (millis as f64 / 60_000.0).round() as i64;
        if total_minutes < 0 {
            return None;
        }
        return Some(format!("{}:{:02}", total_minutes / 60, total_minutes % 60));
    }

    // 1900/1904 日期系统由 calamine 处理
    let datetime = dt.as_datetime()?;
    if (0.0..1.0).contains(&dt.as_f64()) {
        return Some(datetime.format("%-H:%M").to_string());
    }
    if datetime.time().num_seconds_from_midnight() == 0 {
        Some(datetime.format("%Y-%m-%d").to_string())
    } else {
        Some(datetime.format("%Y-%m-%d %H:%M").to_string())
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalGridReader;

impl GridReader for UniversalGridReader {
    fn read_grid(&self, file_path: &Path) -> ImportResult<RawGrid> {
        let ext = extension_of(file_path);
        if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        match ext.as_str() {
            "csv" => CsvGridReader.read_grid(file_path),
            _ => ExcelGridReader.read_grid(file_path),
        }
    }
}
