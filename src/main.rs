// ==========================================
// 考勤导入系统 - 命令行入口
// ==========================================
// 流程: 读取配置 → 加载文件 → 过滤/排序 → 打印汇总 → 导出报表
// ==========================================

use anyhow::Context;
use attendance_ingest::api::AttendanceApi;
use attendance_ingest::config::IngestConfig;
use attendance_ingest::domain::types::{SortDirection, SortKey};
use attendance_ingest::domain::EmployeeSummary;
use attendance_ingest::engine::{SortState, ViewState};
use attendance_ingest::exporter::default_export_stem;
use clap::Parser;
use std::path::PathBuf;

/// 考勤导出表汇总工具
#[derive(Parser, Debug)]
#[command(
    name = "attendance-report",
    about = "Summarize time-and-attendance export sheets (.xlsx/.xls/.csv) per employee",
    version
)]
struct Args {
    /// 考勤导出文件
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// JSON 配置文件
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 按员工编号/姓名/部门过滤（不区分大小写）
    #[arg(short, long, default_value = "")]
    search: String,

    /// 只显示"有出勤但工时为 0"的员工
    #[arg(long)]
    issues_only: bool,

    /// 排序键: empId/name/dept/daysPresent/totalActualHours/equivalentDays
    #[arg(long, default_value = "empId")]
    sort: SortKey,

    /// 降序排序
    #[arg(long)]
    desc: bool,

    /// 报表输出目录（默认: 下载目录）
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// 不导出报表文件
    #[arg(long)]
    no_export: bool,

    /// 以 JSON 输出汇总
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    attendance_ingest::logging::init_with_default("warn");
    let args = Args::parse();

    tracing::info!("{} v{}", attendance_ingest::APP_NAME, attendance_ingest::VERSION);

    // 配置: 文件 → 环境变量
    let config = match &args.config {
        Some(path) => IngestConfig::from_json_file(path)?,
        None => IngestConfig::default(),
    }
    .with_env_overrides()?;

    let api = AttendanceApi::with_config(config);
    let loaded = api
        .load_file(&args.input)
        .with_context(|| format!("无法导入 {}", args.input.display()))?;

    let view = ViewState {
        search: args.search.clone(),
        issues_only: args.issues_only,
        sort: SortState {
            key: args.sort,
            direction: if args.desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            },
        },
    };
    let summaries = api.query(&view)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        eprintln!(
            "表头行: {}  员工: {}  记录: {}  跳过空行: {}",
            loaded.header_row_index + 1,
            loaded.employees,
            loaded.records,
            loaded.skipped_rows
        );
        print_table(&summaries);
    }

    if !args.no_export {
        let out_dir = args
            .out_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let stem = default_export_stem(chrono::Local::now().date_naive());
        let paths = api.export(&view, &out_dir, &stem)?;
        eprintln!("Summary: {}", paths.summary.display());
        eprintln!("Details: {}", paths.details.display());
    }

    Ok(())
}

fn print_table(summaries: &[EmployeeSummary]) {
    println!(
        "{:<14} {:<20} {:<16} {:>12} {:>12} {:>10}",
        "Employee ID", "Name", "Department", "Days Present", "Total Hours", "Equiv Days"
    );
    for s in summaries {
        let flag = if s.has_issue() { " !" } else { "" };
        println!(
            "{:<14} {:<20} {:<16} {:>12} {:>12.2} {:>10.2}{}",
            s.emp_id,
            s.name,
            s.department,
            s.days_present,
            s.total_actual_hours,
            s.equivalent_days,
            flag
        );
    }
}
