// ==========================================
// 考勤导入系统 - 配置层
// ==========================================
// 职责: 导入管道参数（表头扫描窗口 / 每日标准工时 / 占位文本）
// 来源: 默认值 → JSON 文件 → 环境变量
// ==========================================

pub mod ingest_config;
pub mod ingest_config_trait;

// 重导出核心配置
pub use ingest_config::{config_keys, IngestConfig};
pub use ingest_config_trait::IngestConfigReader;
