// ==========================================
// 考勤导入系统 - 查询视图
// ==========================================
// 职责: 员工汇总列表的 文本过滤 / 问题过滤 / 单键排序
// 口径:
//   - 只作用于汇总列表,不读原始行
//   - 文本过滤: 不区分大小写,匹配 empId / 姓名 / 部门 任一
//   - 问题过滤: days_present > 0 且 total_actual_hours == 0,与文本过滤 AND
//   - 排序: 数值键按数值,其余按自然序（"2" 在 "10" 之前）
// ==========================================

use crate::domain::attendance::EmployeeSummary;
use crate::domain::types::{SortDirection, SortKey};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ==========================================
// SortState - 当前排序
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    /// 初始排序: empId 升序
    fn default() -> Self {
        Self {
            key: SortKey::EmpId,
            direction: SortDirection::Asc,
        }
    }
}

impl SortState {
    /// 选择排序键: 同键切换方向,换键重置为升序
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.reversed(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Asc,
            }
        }
    }
}

// ==========================================
// ViewState - 查询条件（不可变,每次查询整体传入）
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub search: String,
    pub issues_only: bool,
    pub sort: SortState,
}

impl ViewState {
    /// 汇总是否通过过滤条件
    pub fn matches(&self, summary: &EmployeeSummary) -> bool {
        matches_search(summary, &self.search) && (!self.issues_only || summary.has_issue())
    }
}

/// 过滤并排序
pub fn apply_view<'a>(
    summaries: &'a [EmployeeSummary],
    view: &ViewState,
) -> Vec<&'a EmployeeSummary> {
    let mut visible: Vec<&EmployeeSummary> =
        summaries.iter().filter(|s| view.matches(s)).collect();

    // 稳定排序: 相等元素保持首次出现顺序
    visible.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, view.sort.key);
        match view.sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    visible
}

fn matches_search(summary: &EmployeeSummary, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    [&summary.emp_id, &summary.name, &summary.department]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// 按单个排序键比较（升序）
pub fn compare_by_key(a: &EmployeeSummary, b: &EmployeeSummary, key: SortKey) -> Ordering {
    match key {
        SortKey::EmpId => natural_cmp(&a.emp_id, &b.emp_id),
        SortKey::Name => natural_cmp(&a.name, &b.name),
        SortKey::Dept => natural_cmp(&a.department, &b.department),
        SortKey::DaysPresent => a.days_present.cmp(&b.days_present),
        SortKey::TotalActualHours => a.total_actual_hours.total_cmp(&b.total_actual_hours),
        SortKey::EquivalentDays => a.equivalent_days.total_cmp(&b.equivalent_days),
    }
}

// ==========================================
// 自然序比较
// ==========================================
// 文本段不区分大小写,数字段按数值;仅大小写不同时小写在前
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return case_tie_break(a, b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = compare_chunk(x, y);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

// 逐字符比较,同一字母小写排在大写之前
fn case_tie_break(a: &str, b: &str) -> Ordering {
    let swapped = |s: &str| -> String {
        s.chars()
            .map(|c| {
                if c.is_ascii_uppercase() {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                }
            })
            .collect()
    };
    swapped(a).cmp(&swapped(b))
}

fn compare_chunk(x: &str, y: &str) -> Ordering {
    let x_digit = x.starts_with(|c: char| c.is_ascii_digit());
    let y_digit = y.starts_with(|c: char| c.is_ascii_digit());

    match (x_digit, y_digit) {
        (true, true) => {
            let x_trim = x.trim_start_matches('0');
            let y_trim = y.trim_start_matches('0');
            x_trim
                .len()
                .cmp(&y_trim.len())
                .then_with(|| x_trim.cmp(y_trim))
        }
        // 数字段排在文本段之前
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => x.to_lowercase().cmp(&y.to_lowercase()),
    }
}

// 将字符串切分为 连续数字段 / 连续非数字段
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let is_digit = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != is_digit)
            .map(|(idx, _)| idx)
            .unwrap_or(self.rest.len());

        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(emp_id: &str, name: &str, dept: &str, days: u32, hours: f64) -> EmployeeSummary {
        EmployeeSummary {
            emp_id: emp_id.to_string(),
            name: name.to_string(),
            department: dept.to_string(),
            days_present: days,
            total_actual_hours: hours,
            equivalent_days: hours / 8.0,
            records: Vec::new(),
        }
    }

    fn ids(list: &[&EmployeeSummary]) -> Vec<String> {
        list.iter().map(|s| s.emp_id.clone()).collect()
    }

    fn sample() -> Vec<EmployeeSummary> {
        vec![
            summary("E10", "carol", "Finance", 2, 16.0),
            summary("E2", "Alice", "Ops", 3, 24.0),
            summary("E1", "bob", "Ops", 1, 0.0),
            summary("E3", "Dave", "Sales", 0, 0.0),
        ]
    }

    #[test]
    fn test_natural_cmp() {
        assert_eq!(natural_cmp("2", "10"), Ordering::Less);
        assert_eq!(natural_cmp("E2", "E10"), Ordering::Less);
        assert_eq!(natural_cmp("alice", "Bob"), Ordering::Less);
        assert_eq!(natural_cmp("E010", "E9"), Ordering::Greater);
        assert_eq!(natural_cmp("abc", "abc"), Ordering::Equal);
        assert_eq!(natural_cmp("E1", "E1a"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_lowercase_first_on_case_tie() {
        assert_eq!(natural_cmp("ann", "Ann"), Ordering::Less);
        assert_eq!(natural_cmp("Ann", "ann"), Ordering::Greater);
        assert_eq!(natural_cmp("e1", "E1"), Ordering::Less);
        // 大小写差异只在其余完全相同时生效
        assert_eq!(natural_cmp("Ann", "bob"), Ordering::Less);
    }

    #[test]
    fn test_default_sort_emp_id_ascending() {
        let data = sample();
        let view = ViewState::default();

        assert_eq!(ids(&apply_view(&data, &view)), vec!["E1", "E2", "E3", "E10"]);
    }

    #[test]
    fn test_sort_toggle() {
        let state = SortState::default();
        let toggled = state.toggle(SortKey::EmpId);
        assert_eq!(toggled.direction, SortDirection::Desc);

        let switched = toggled.toggle(SortKey::Name);
        assert_eq!(switched.key, SortKey::Name);
        assert_eq!(switched.direction, SortDirection::Asc);

        assert_eq!(switched.toggle(SortKey::Name).direction, SortDirection::Desc);
    }

    #[test]
    fn test_numeric_sort_descending() {
        let data = sample();
        let view = ViewState {
            sort: SortState {
                key: SortKey::TotalActualHours,
                direction: SortDirection::Desc,
            },
            ..ViewState::default()
        };

        let sorted = apply_view(&data, &view);
        assert_eq!(sorted[0].emp_id, "E2");
        assert_eq!(sorted[1].emp_id, "E10");
    }

    #[test]
    fn test_name_sort_case_insensitive() {
        let data = sample();
        let view = ViewState {
            sort: SortState::default().toggle(SortKey::Name),
            ..ViewState::default()
        };

        let names: Vec<&str> = apply_view(&data, &view)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "bob", "carol", "Dave"]);
    }

    #[test]
    fn test_search_matches_any_field() {
        let data = sample();
        let mut view = ViewState {
            search: "OPS".to_string(),
            ..ViewState::default()
        };
        assert_eq!(ids(&apply_view(&data, &view)), vec!["E1", "E2"]);

        view.search = "car".to_string();
        assert_eq!(ids(&apply_view(&data, &view)), vec!["E10"]);

        view.search = "e3".to_string();
        assert_eq!(ids(&apply_view(&data, &view)), vec!["E3"]);

        view.search = "   ".to_string();
        assert_eq!(apply_view(&data, &view).len(), 4);
    }

    #[test]
    fn test_issue_filter() {
        let data = sample();
        let view = ViewState {
            issues_only: true,
            ..ViewState::default()
        };

        // E1: 出勤但工时为 0;E3 无出勤不算问题
        assert_eq!(ids(&apply_view(&data, &view)), vec!["E1"]);
    }

    #[test]
    fn test_issue_filter_and_search_combined() {
        let data = sample();
        let view = ViewState {
            search: "sales".to_string(),
            issues_only: true,
            ..ViewState::default()
        };
        assert!(apply_view(&data, &view).is_empty());
    }

    #[test]
    fn test_filter_and_sort_commute_on_membership() {
        let data = sample();
        let sort = SortState {
            key: SortKey::DaysPresent,
            direction: SortDirection::Desc,
        };

        // 先过滤后排序
        let filtered_then_sorted = apply_view(
            &data,
            &ViewState {
                issues_only: true,
                sort,
                ..ViewState::default()
            },
        );

        // 先排序后过滤
        let sorted_all = apply_view(
            &data,
            &ViewState {
                sort,
                ..ViewState::default()
            },
        );
        let sorted_then_filtered: Vec<&EmployeeSummary> =
            sorted_all.into_iter().filter(|s| s.has_issue()).collect();

        let mut left = ids(&filtered_then_sorted);
        let mut right = ids(&sorted_then_filtered);
        left.sort();
        right.sort();
        assert_eq!(left, right);
    }
}
