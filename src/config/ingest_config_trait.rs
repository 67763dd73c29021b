// ==========================================
// 考勤导入系统 - 导入配置读取 Trait
// ==========================================
// 职责: 定义导入管道所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

// ==========================================
// IngestConfigReader Trait
// ==========================================
// 用途: 导入管道所需的配置读取接口
// 实现者: IngestConfig（默认值 / JSON 文件 / 环境变量）
pub trait IngestConfigReader: Send + Sync {
    /// 表头扫描行数
    ///
    /// # 默认值
    /// - 20
    fn header_scan_rows(&self) -> usize;

    /// 每日标准工时（折算天数的除数）
    ///
    /// # 默认值
    /// - 8.0
    fn hours_per_day(&self) -> f64;

    /// 姓名/部门列缺失时的占位文本
    ///
    /// # 默认值
    /// - "Unknown"
    fn unknown_label(&self) -> &str;
}
