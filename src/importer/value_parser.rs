// ==========================================
// 考勤导入系统 - 单元格值解析器
// ==========================================
// 职责: 原始单元格 → 小数工时 / 数值 / 非空判定
// 口径: 容错解析,任何非法输入降级为 0（不报错）
// 注意: 返回 0 时无法区分"确为 0"与"无法解析"
// ==========================================

use crate::domain::attendance::CellValue;

/// "HH:MM" → 小数小时
///
/// # 规则
/// - 只接受文本单元格;数值/空单元格 → 0
/// - 按 ':' 切分,取前两段（"8:15:00" 的秒段忽略）
/// - 两段均须为非负整数,否则 → 0
/// - 结果 = hours + minutes / 60
pub fn parse_time_string_to_decimal(value: &CellValue) -> f64 {
    let text = match value {
        CellValue::Text(s) if !s.trim().is_empty() => s,
        _ => return 0.0,
    };

    let mut parts = text.split(':');
    let (hours, minutes) = match (parts.next(), parts.next()) {
        (Some(h), Some(m)) => (h, m),
        _ => return 0.0,
    };

    match (parse_unsigned(hours), parse_unsigned(minutes)) {
        (Some(h), Some(m)) => h as f64 + m as f64 / 60.0,
        _ => 0.0,
    }
}

/// 数值解析（失败 → 0）
///
/// # 规则
/// - 数值单元格原样返回
/// - 文本先整体解析,失败则取最长的数值前缀（"7.5h" → 7.5）
/// - 非有限值（NaN/inf）→ 0
pub fn safe_float(value: &CellValue) -> f64 {
    let parsed = match value {
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .or_else(|| leading_decimal(trimmed))
        }
        CellValue::Empty => None,
    };

    match parsed {
        Some(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// 非空判定
///
/// - 空单元格 / 去空白后为空的文本 → false
/// - 任意数值（包括 0）→ true
pub fn is_not_empty(value: &CellValue) -> bool {
    match value {
        CellValue::Empty => false,
        CellValue::Text(s) => !s.trim().is_empty(),
        CellValue::Number(_) => true,
    }
}

fn parse_unsigned(part: &str) -> Option<u64> {
    let trimmed = part.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<u64>().ok()
}

/// 提取文本开头的十进制数（可带符号/小数点/指数）
fn leading_decimal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // 指数部分须完整才计入
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::text(s)
    }

    #[test]
    fn test_parse_time_well_formed() {
        assert_eq!(parse_time_string_to_decimal(&text("8:15")), 8.25);
        assert_eq!(parse_time_string_to_decimal(&text("08:30")), 8.5);
        assert_eq!(parse_time_string_to_decimal(&text("0:00")), 0.0);
        assert_eq!(parse_time_string_to_decimal(&text(" 7:45 ")), 7.75);
    }

    #[test]
    fn test_parse_time_matches_formula_for_all_minutes() {
        for h in [0u32, 1, 7, 12, 23] {
            for m in 0..60u32 {
                let value = text(&format!("{}:{:02}", h, m));
                let expected = h as f64 + m as f64 / 60.0;
                assert_eq!(parse_time_string_to_decimal(&value), expected);
            }
        }
    }

    #[test]
    fn test_parse_time_ignores_seconds_part() {
        assert_eq!(parse_time_string_to_decimal(&text("8:15:59")), 8.25);
    }

    #[test]
    fn test_parse_time_invalid_degrades_to_zero() {
        assert_eq!(parse_time_string_to_decimal(&CellValue::Empty), 0.0);
        assert_eq!(parse_time_string_to_decimal(&text("   ")), 0.0);
        assert_eq!(parse_time_string_to_decimal(&text("815")), 0.0);
        assert_eq!(parse_time_string_to_decimal(&text("ab:cd")), 0.0);
        assert_eq!(parse_time_string_to_decimal(&text("8:xx")), 0.0);
        assert_eq!(parse_time_string_to_decimal(&text(":30")), 0.0);
        assert_eq!(parse_time_string_to_decimal(&text("-1:30")), 0.0);
        // 非文本输入
        assert_eq!(parse_time_string_to_decimal(&CellValue::Number(8.25)), 0.0);
    }

    #[test]
    fn test_safe_float() {
        assert_eq!(safe_float(&text("7.5")), 7.5);
        assert_eq!(safe_float(&text(" 8 ")), 8.0);
        assert_eq!(safe_float(&CellValue::Number(6.0)), 6.0);
        assert_eq!(safe_float(&text("7.5h")), 7.5);
        assert_eq!(safe_float(&text("-2")), -2.0);
        assert_eq!(safe_float(&text("1e1x")), 10.0);
    }

    #[test]
    fn test_safe_float_unparseable_is_zero() {
        assert_eq!(safe_float(&CellValue::Empty), 0.0);
        assert_eq!(safe_float(&text("")), 0.0);
        assert_eq!(safe_float(&text("abc")), 0.0);
        assert_eq!(safe_float(&text("NaN")), 0.0);
        assert_eq!(safe_float(&text("inf")), 0.0);
        assert_eq!(safe_float(&text(".")), 0.0);
        assert_eq!(safe_float(&CellValue::Number(f64::NAN)), 0.0);
    }

    #[test]
    fn test_is_not_empty() {
        assert!(!is_not_empty(&CellValue::Empty));
        assert!(!is_not_empty(&text("")));
        assert!(!is_not_empty(&text("  \t")));
        assert!(is_not_empty(&text("0:00")));
        assert!(is_not_empty(&text("x")));
        assert!(is_not_empty(&CellValue::Number(0.0)));
    }
}
