// ==========================================
// 考勤导入系统 - 考勤API
// ==========================================
// 职责: 持有"当前结果",提供 加载 / 查询 / 导出
// 规则:
//   - 加载成功 → 整体替换当前结果
//   - 加载失败 → 清空当前结果（不保留旧表格）,返回单条错误
//   - 查询与导出只作用于当前结果的汇总列表
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::IngestConfig;
use crate::domain::attendance::{AttendanceReport, EmployeeSummary, RawGrid};
use crate::engine::view::{apply_view, ViewState};
use crate::exporter::{ExportPaths, SheetExporter};
use crate::importer::{AttendanceImporter, AttendanceImporterImpl, UniversalGridReader};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// 加载响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadResponse {
    /// 导入批次ID
    pub batch_id: String,
    /// 表头所在行（0 起）
    pub header_row_index: usize,
    /// 员工数
    pub employees: usize,
    /// 考勤记录数
    pub records: usize,
    /// 跳过的空行数
    pub skipped_rows: usize,
}

impl From<&AttendanceReport> for LoadResponse {
    fn from(report: &AttendanceReport) -> Self {
        Self {
            batch_id: report.batch_id.clone(),
            header_row_index: report.header_row_index,
            employees: report.summaries.len(),
            records: report.total_records,
            skipped_rows: report.skipped_rows,
        }
    }
}

/// 考勤API
pub struct AttendanceApi {
    importer: Box<dyn AttendanceImporter>,
    current: Arc<Mutex<Option<Arc<AttendanceReport>>>>,
}

impl AttendanceApi {
    /// 创建新的AttendanceApi实例
    pub fn new(importer: Box<dyn AttendanceImporter>) -> Self {
        Self {
            importer,
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// 使用给定配置与通用文件解码器创建
    pub fn with_config(config: IngestConfig) -> Self {
        Self::new(Box::new(AttendanceImporterImpl::new(
            config,
            Box::new(UniversalGridReader),
        )))
    }

    /// 从文件加载考勤数据
    pub fn load_file(&self, file_path: &Path) -> ApiResult<LoadResponse> {
        let result = self.importer.import_file(file_path);
        self.replace_current(result)
    }

    /// 从内存表格加载考勤数据
    pub fn load_grid(&self, grid: &RawGrid) -> ApiResult<LoadResponse> {
        let result = self.importer.ingest_grid(grid);
        self.replace_current(result)
    }

    /// 当前结果（未加载时为 None）
    pub fn current_report(&self) -> ApiResult<Option<Arc<AttendanceReport>>> {
        let guard = self
            .current
            .lock()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))?;
        Ok(guard.clone())
    }

    /// 按视图条件查询员工汇总
    pub fn query(&self, view: &ViewState) -> ApiResult<Vec<EmployeeSummary>> {
        let report = self.current_report()?.ok_or(ApiError::NoReportLoaded)?;
        Ok(apply_view(&report.summaries, view)
            .into_iter()
            .cloned()
            .collect())
    }

    /// 导出当前视图（与 query 结果一致）
    pub fn export(&self, view: &ViewState, dir: &Path, stem: &str) -> ApiResult<ExportPaths> {
        let report = self.current_report()?.ok_or(ApiError::NoReportLoaded)?;
        let visible = apply_view(&report.summaries, view);
        Ok(SheetExporter.write(dir, stem, &visible)?)
    }

    fn replace_current(
        &self,
        result: crate::importer::ImportResult<AttendanceReport>,
    ) -> ApiResult<LoadResponse> {
        let mut guard = self
            .current
            .lock()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))?;

        match result {
            Ok(report) => {
                let response = LoadResponse::from(&report);
                *guard = Some(Arc::new(report));
                info!(batch_id = %response.batch_id, "当前考勤结果已替换");
                Ok(response)
            }
            Err(e) => {
                // 失败时丢弃旧结果
                *guard = None;
                warn!(error = %e, "考勤加载失败,已清空当前结果");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{SortDirection, SortKey};
    use crate::engine::view::SortState;
    use tempfile::TempDir;

    fn good_grid() -> RawGrid {
        RawGrid::from_strings(vec![
            vec!["Employee ID", "First Name", "Department", "Date", "Regular(H)", "Worked Hours"],
            vec!["E2", "Bob", "Ops", "2024-01-01", "8", ""],
            vec!["E1", "Ann", "Ops", "2024-01-01", "", "0:00"],
        ])
    }

    #[test]
    fn test_query_before_load() {
        let api = AttendanceApi::with_config(IngestConfig::default());
        assert!(matches!(
            api.query(&ViewState::default()),
            Err(ApiError::NoReportLoaded)
        ));
    }

    #[test]
    fn test_load_and_query() {
        let api = AttendanceApi::with_config(IngestConfig::default());
        let response = api.load_grid(&good_grid()).unwrap();
        assert_eq!(response.employees, 2);
        assert_eq!(response.records, 2);

        let all = api.query(&ViewState::default()).unwrap();
        assert_eq!(all[0].emp_id, "E1");

        let issues = api
            .query(&ViewState {
                issues_only: true,
                ..ViewState::default()
            })
            .unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].emp_id, "E1");
    }

    #[test]
    fn test_failed_load_clears_previous_result() {
        let api = AttendanceApi::with_config(IngestConfig::default());
        api.load_grid(&good_grid()).unwrap();
        assert!(api.current_report().unwrap().is_some());

        let bad = RawGrid::from_strings(vec![vec!["Employee ID", "Day"]]);
        let err = api.load_grid(&bad).unwrap_err();
        assert!(matches!(err, ApiError::StructureError(_)));
        assert!(api.current_report().unwrap().is_none());
    }

    #[test]
    fn test_export_matches_view() {
        let api = AttendanceApi::with_config(IngestConfig::default());
        api.load_grid(&good_grid()).unwrap();
        let dir = TempDir::new().unwrap();

        let view = ViewState {
            sort: SortState {
                key: SortKey::TotalActualHours,
                direction: SortDirection::Desc,
            },
            ..ViewState::default()
        };
        let paths = api.export(&view, dir.path(), "view").unwrap();

        let summary_csv = std::fs::read_to_string(paths.summary).unwrap();
        let rows: Vec<&str> = summary_csv.lines().skip(1).collect();
        assert_eq!(rows, vec!["E2,Bob,Ops,1,8.00,1.00", "E1,Ann,Ops,1,0.00,0.00"]);
    }
}
