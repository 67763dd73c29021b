// ==========================================
// 考勤导入系统 - 表头定位器
// ==========================================
// 职责: 在标题/横幅行之下找到真正的列头行
// 规则: 扫描前 N 行（默认 20）,首个同时包含 "Employee ID" 与 "Date" 的行胜出
// ==========================================

use crate::domain::attendance::RawGrid;
use crate::domain::types::ColumnKey;
use tracing::debug;

/// 默认扫描行数
pub const DEFAULT_HEADER_SCAN_ROWS: usize = 20;

pub struct HeaderLocator {
    scan_rows: usize,
}

impl HeaderLocator {
    pub fn new(scan_rows: usize) -> Self {
        Self { scan_rows }
    }

    /// 实际扫描窗口大小
    pub fn scan_window(&self, grid: &RawGrid) -> usize {
        self.scan_rows.min(grid.len())
    }

    /// 定位表头行
    ///
    /// # 返回
    /// - Some(index): 表头行下标（0 起）
    /// - None: 扫描窗口内无表头（调用方按致命错误处理）
    pub fn locate(&self, grid: &RawGrid) -> Option<usize> {
        let emp_label = ColumnKey::EmpId.header_label();
        let date_label = ColumnKey::Date.header_label();

        let found = grid
            .rows()
            .iter()
            .take(self.scan_rows)
            .position(|row| {
                let labels: Vec<String> = row.iter().map(|c| c.trimmed()).collect();
                labels.iter().any(|l| l == emp_label) && labels.iter().any(|l| l == date_label)
            });

        debug!(
            scanned = self.scan_window(grid),
            header_row = ?found,
            "表头定位完成"
        );
        found
    }
}

impl Default for HeaderLocator {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_SCAN_ROWS)
    }
}
