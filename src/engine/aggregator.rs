// ==========================================
// 考勤导入系统 - 员工汇总器
// ==========================================
// 职责: 日考勤记录按员工分组累加
// 规则:
//   - 首次见到 empId 时创建汇总,姓名/部门取该行（后续行不覆盖）
//   - 所有记录按源表行序归入员工,重复日期不合并
//   - 只有出勤记录累加 days_present / total_actual_hours
//   - 完成后 equivalent_days = total_actual_hours / hours_per_day
// ==========================================

use crate::domain::attendance::{AttendanceRecord, EmployeeSummary};
use std::collections::HashMap;

pub struct AttendanceAggregator {
    hours_per_day: f64,
    summaries: Vec<EmployeeSummary>,
    index: HashMap<String, usize>, // emp_id → summaries 下标
}

impl AttendanceAggregator {
    pub fn new(hours_per_day: f64) -> Self {
        Self {
            hours_per_day,
            summaries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// 归入一条记录
    pub fn push(&mut self, record: AttendanceRecord) {
        let slot = match self.index.get(&record.emp_id) {
            Some(slot) => *slot,
            None => {
                // 先到先得: 只在首次出现时写入显示身份
                let slot = self.summaries.len();
                self.summaries.push(EmployeeSummary {
                    emp_id: record.emp_id.clone(),
                    name: record.name.clone(),
                    department: record.department.clone(),
                    days_present: 0,
                    total_actual_hours: 0.0,
                    equivalent_days: 0.0,
                    records: Vec::new(),
                });
                self.index.insert(record.emp_id.clone(), slot);
                slot
            }
        };

        let summary = &mut self.summaries[slot];
        if record.is_present {
            summary.days_present += 1;
            summary.total_actual_hours += record.actual_hours;
        }
        summary.records.push(record);
    }

    pub fn employee_count(&self) -> usize {
        self.summaries.len()
    }

    /// 完成汇总（首次出现顺序）
    pub fn finish(self) -> Vec<EmployeeSummary> {
        let hours_per_day = self.hours_per_day;
        self.summaries
            .into_iter()
            .map(|mut summary| {
                summary.equivalent_days = summary.total_actual_hours / hours_per_day;
                summary
            })
            .collect()
    }
}
