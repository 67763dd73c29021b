// ==========================================
// 考勤导入系统 - 导入配置
// ==========================================
// 来源优先级: 环境变量 > JSON 配置文件 > 默认值
// ==========================================

use crate::config::ingest_config_trait::IngestConfigReader;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::header_locator::DEFAULT_HEADER_SCAN_ROWS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// 配置键（JSON 字段名 / 环境变量名）
pub mod config_keys {
    pub const HEADER_SCAN_ROWS: &str = "header_scan_rows";
    pub const HOURS_PER_DAY: &str = "hours_per_day";
    pub const UNKNOWN_LABEL: &str = "unknown_label";

    pub const ENV_HEADER_SCAN_ROWS: &str = "ATTENDANCE_HEADER_SCAN_ROWS";
    pub const ENV_HOURS_PER_DAY: &str = "ATTENDANCE_HOURS_PER_DAY";
}

pub const DEFAULT_HOURS_PER_DAY: f64 = 8.0;
pub const DEFAULT_UNKNOWN_LABEL: &str = "Unknown";

// ==========================================
// IngestConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub header_scan_rows: usize,
    pub hours_per_day: f64,
    pub unknown_label: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            header_scan_rows: DEFAULT_HEADER_SCAN_ROWS,
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            unknown_label: DEFAULT_UNKNOWN_LABEL.to_string(),
        }
    }
}

impl IngestConfig {
    /// 从 JSON 文件加载（缺省字段取默认值）
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ImportError::ConfigReadError {
            key: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: IngestConfig = serde_json::from_str(&raw)?;
        config.validate()?;

        info!(path = %path.display(), ?config, "配置文件加载完成");
        Ok(config)
    }

    /// 应用环境变量覆写
    pub fn with_env_overrides(self) -> ImportResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// 应用覆写（lookup 返回 None 表示不覆写）
    pub fn with_overrides<F>(mut self, lookup: F) -> ImportResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(config_keys::ENV_HEADER_SCAN_ROWS) {
            self.header_scan_rows =
                raw.trim()
                    .parse::<usize>()
                    .map_err(|e| ImportError::ConfigValueError {
                        key: config_keys::ENV_HEADER_SCAN_ROWS.to_string(),
                        value: raw.clone(),
                        message: e.to_string(),
                    })?;
            debug!(header_scan_rows = self.header_scan_rows, "表头扫描行数已覆写");
        }

        if let Some(raw) = lookup(config_keys::ENV_HOURS_PER_DAY) {
            self.hours_per_day =
                raw.trim()
                    .parse::<f64>()
                    .map_err(|e| ImportError::ConfigValueError {
                        key: config_keys::ENV_HOURS_PER_DAY.to_string(),
                        value: raw.clone(),
                        message: e.to_string(),
                    })?;
            debug!(hours_per_day = self.hours_per_day, "每日标准工时已覆写");
        }

        self.validate()?;
        Ok(self)
    }

    /// 校验配置值
    pub fn validate(&self) -> ImportResult<()> {
        if self.header_scan_rows == 0 {
            return Err(ImportError::ConfigValueError {
                key: config_keys::HEADER_SCAN_ROWS.to_string(),
                value: self.header_scan_rows.to_string(),
                message: "必须大于 0".to_string(),
            });
        }
        if !self.hours_per_day.is_finite() || self.hours_per_day <= 0.0 {
            return Err(ImportError::ConfigValueError {
                key: config_keys::HOURS_PER_DAY.to_string(),
                value: self.hours_per_day.to_string(),
                message: "必须为正数".to_string(),
            });
        }
        Ok(())
    }
}

impl IngestConfigReader for IngestConfig {
    fn header_scan_rows(&self) -> usize {
        self.header_scan_rows
    }

    fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }

    fn unknown_label(&self) -> &str {
        &self.unknown_label
    }
}
