// ==========================================
// 考勤导入系统 - 考勤导入器实现
// ==========================================
// 职责: 整合导入流程,从文件到员工汇总
// 流程: 解码 → 表头定位 → 列映射 → 行分类 → 汇总
// 红线: 结构性错误整批失败,不返回部分结果
// ==========================================

use crate::config::IngestConfigReader;
use crate::domain::attendance::{AttendanceReport, RawGrid};
use crate::engine::aggregator::AttendanceAggregator;
use crate::importer::column_mapper::ColumnMapper;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::header_locator::HeaderLocator;
use crate::importer::importer_trait::{AttendanceImporter, GridReader};
use crate::importer::row_classifier::RowClassifier;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

// ==========================================
// AttendanceImporterImpl - 考勤导入器实现
// ==========================================
pub struct AttendanceImporterImpl<C>
where
    C: IngestConfigReader,
{
    // 配置读取器
    config: C,

    // 文件解码器
    grid_reader: Box<dyn GridReader>,
}

impl<C> AttendanceImporterImpl<C>
where
    C: IngestConfigReader,
{
    /// 创建新的 AttendanceImporter 实例
    ///
    /// # 参数
    /// - config: 配置读取器
    /// - grid_reader: 文件解码器
    pub fn new(config: C, grid_reader: Box<dyn GridReader>) -> Self {
        Self {
            config,
            grid_reader,
        }
    }
}

impl<C> AttendanceImporter for AttendanceImporterImpl<C>
where
    C: IngestConfigReader,
{
    #[instrument(skip(self, file_path), fields(file = %file_path.display()))]
    fn import_file(&self, file_path: &Path) -> ImportResult<AttendanceReport> {
        // === 步骤 0: 解码文件 ===
        debug!("步骤 0: 解码文件");
        let grid = self.grid_reader.read_grid(file_path).map_err(|e| {
            error!(error = %e, "文件解码失败");
            e
        })?;

        self.ingest_grid(&grid)
    }

    #[instrument(skip(self, grid), fields(batch_id))]
    fn ingest_grid(&self, grid: &RawGrid) -> ImportResult<AttendanceReport> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());
        info!(rows = grid.len(), "开始导入考勤数据");

        // === 步骤 1: 表头定位 ===
        debug!("步骤 1: 表头定位");
        let locator = HeaderLocator::new(self.config.header_scan_rows());
        let header_index = locator.locate(grid).ok_or_else(|| {
            let err = ImportError::HeaderNotFound {
                scanned: locator.scan_window(grid),
            };
            error!(error = %err, "表头定位失败");
            err
        })?;

        // === 步骤 2: 列映射 ===
        debug!(header_index, "步骤 2: 列映射");
        let header_row = grid.row(header_index).ok_or_else(|| {
            ImportError::InternalError(format!("表头行越界: {}", header_index))
        })?;
        let columns = ColumnMapper.map(header_row).map_err(|e| {
            error!(error = %e, "列映射失败");
            e
        })?;
        debug!(mapped = ?columns.mapped_keys(), "列映射完成");

        // === 步骤 3: 行分类 + 汇总 ===
        debug!("步骤 3: 行分类与汇总");
        let classifier = RowClassifier::new(&columns, self.config.unknown_label());
        let mut aggregator = AttendanceAggregator::new(self.config.hours_per_day());
        let mut total_records = 0;
        let mut skipped_rows = 0;

        for (idx, row) in grid.rows().iter().enumerate().skip(header_index + 1) {
            match classifier.classify(row, idx + 1) {
                Some(record) => {
                    total_records += 1;
                    aggregator.push(record);
                }
                None => skipped_rows += 1,
            }
        }

        // === 步骤 4: 汇总完成 ===
        let employees = aggregator.employee_count();
        let summaries = aggregator.finish();

        info!(
            employees,
            records = total_records,
            skipped = skipped_rows,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "考勤导入完成"
        );

        Ok(AttendanceReport {
            batch_id,
            header_row_index: header_index,
            total_records,
            skipped_rows,
            summaries,
        })
    }
}
