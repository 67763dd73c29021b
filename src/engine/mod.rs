// ==========================================
// 考勤导入系统 - 引擎层
// ==========================================
// 职责: 员工汇总规则 + 查询视图规则
// 红线: 不读文件,不改动上游产物
// ==========================================

pub mod aggregator;
pub mod view;

// 重导出
pub use aggregator::AttendanceAggregator;
pub use view::{apply_view, compare_by_key, natural_cmp, SortState, ViewState};
