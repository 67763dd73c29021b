// ==========================================
// 考勤导入系统 - 领域类型定义
// ==========================================
// 依据: 考勤导出表字段约定 - 表头标签 / 工时来源 / 排序键
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 语义列 (Column Key)
// ==========================================
// 封闭集合: 9 个语义键,表头标签精确匹配(区分大小写,去首尾空白)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKey {
    EmpId,      // 员工编号(必需)
    Name,       // 姓名
    Dept,       // 部门
    Date,       // 日期(必需)
    ClockIn,    // 上班打卡
    ClockOut,   // 下班打卡
    TotalHours, // 总工时
    WorkedHours, // 实际工作时长
    RegularH,   // 正常工时(小数)
}

impl ColumnKey {
    /// 全部语义键(固定顺序)
    pub const ALL: [ColumnKey; 9] = [
        ColumnKey::EmpId,
        ColumnKey::Name,
        ColumnKey::Dept,
        ColumnKey::Date,
        ColumnKey::ClockIn,
        ColumnKey::ClockOut,
        ColumnKey::TotalHours,
        ColumnKey::WorkedHours,
        ColumnKey::RegularH,
    ];

    /// 必需键: 缺失即整批失败
    pub const REQUIRED: [ColumnKey; 2] = [ColumnKey::EmpId, ColumnKey::Date];

    /// 表头中的原始标签
    pub fn header_label(&self) -> &'static str {
        match self {
            ColumnKey::EmpId => "Employee ID",
            ColumnKey::Name => "First Name",
            ColumnKey::Dept => "Department",
            ColumnKey::Date => "Date",
            ColumnKey::ClockIn => "Clock In",
            ColumnKey::ClockOut => "Clock Out",
            ColumnKey::TotalHours => "Total Hours",
            ColumnKey::WorkedHours => "Worked Hours",
            ColumnKey::RegularH => "Regular(H)",
        }
    }

    /// 语义键名(错误信息中使用)
    pub fn key_name(&self) -> &'static str {
        match self {
            ColumnKey::EmpId => "empId",
            ColumnKey::Name => "name",
            ColumnKey::Dept => "dept",
            ColumnKey::Date => "date",
            ColumnKey::ClockIn => "clockIn",
            ColumnKey::ClockOut => "clockOut",
            ColumnKey::TotalHours => "totalHours",
            ColumnKey::WorkedHours => "workedHours",
            ColumnKey::RegularH => "regularH",
        }
    }

    /// 在 ALL 中的位置(ColumnMap 内部下标)
    pub(crate) fn slot(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key_name())
    }
}

// ==========================================
// 工时来源 (Hours Source)
// ==========================================
// 审计标签: 记录 actual_hours 取自哪一列
// 优先级: RegularH > WorkedHours > TotalHours > None
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoursSource {
    #[serde(rename = "Regular(H)")]
    RegularH,
    #[serde(rename = "Worked Hours")]
    WorkedHours,
    #[serde(rename = "Total Hours")]
    TotalHours,
    #[serde(rename = "None")]
    None,
}

impl fmt::Display for HoursSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoursSource::RegularH => write!(f, "Regular(H)"),
            HoursSource::WorkedHours => write!(f, "Worked Hours"),
            HoursSource::TotalHours => write!(f, "Total Hours"),
            HoursSource::None => write!(f, "None"),
        }
    }
}

// ==========================================
// 出勤状态 (Attendance Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present, // 出勤
    Absent,  // 缺勤
}

impl AttendanceStatus {
    pub fn from_presence(is_present: bool) -> Self {
        if is_present {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Absent
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
        }
    }
}

// ==========================================
// 排序键 (Sort Key)
// ==========================================
// 数值键按数值比较,其余按自然序(数字感知)比较
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    EmpId,
    Name,
    Dept,
    DaysPresent,
    TotalActualHours,
    EquivalentDays,
}

impl SortKey {
    /// 是否为数值字段
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SortKey::DaysPresent | SortKey::TotalActualHours | SortKey::EquivalentDays
        )
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::EmpId => write!(f, "empId"),
            SortKey::Name => write!(f, "name"),
            SortKey::Dept => write!(f, "dept"),
            SortKey::DaysPresent => write!(f, "daysPresent"),
            SortKey::TotalActualHours => write!(f, "totalActualHours"),
            SortKey::EquivalentDays => write!(f, "equivalentDays"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "empId" => Ok(SortKey::EmpId),
            "name" => Ok(SortKey::Name),
            "dept" => Ok(SortKey::Dept),
            "daysPresent" => Ok(SortKey::DaysPresent),
            "totalActualHours" => Ok(SortKey::TotalActualHours),
            "equivalentDays" => Ok(SortKey::EquivalentDays),
            other => Err(format!(
                "未知排序键: {}（可选: empId/name/dept/daysPresent/totalActualHours/equivalentDays）",
                other
            )),
        }
    }
}

// ==========================================
// 排序方向 (Sort Direction)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_key_slots_follow_all_order() {
        for (idx, key) in ColumnKey::ALL.iter().enumerate() {
            assert_eq!(key.slot(), idx);
        }
    }

    #[test]
    fn test_hours_source_display_labels() {
        assert_eq!(HoursSource::RegularH.to_string(), "Regular(H)");
        assert_eq!(HoursSource::WorkedHours.to_string(), "Worked Hours");
        assert_eq!(HoursSource::TotalHours.to_string(), "Total Hours");
        assert_eq!(HoursSource::None.to_string(), "None");
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("empId".parse::<SortKey>().unwrap(), SortKey::EmpId);
        assert_eq!(
            "totalActualHours".parse::<SortKey>().unwrap(),
            SortKey::TotalActualHours
        );
        assert!("salary".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_hours_source_serde_uses_audit_label() {
        let json = serde_json::to_string(&HoursSource::RegularH).unwrap();
        assert_eq!(json, "\"Regular(H)\"");
    }
}
