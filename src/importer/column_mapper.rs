// ==========================================
// 考勤导入系统 - 列映射器
// ==========================================
// 职责: 语义键 → 表头列下标
// 规则: 去空白后精确匹配标签,首个匹配列胜出;未匹配 → 缺失（非错误）
// 红线: empId / date 必须解析到真实列,否则整批失败
// ==========================================

use crate::domain::attendance::CellValue;
use crate::domain::types::ColumnKey;
use crate::importer::error::{ImportError, ImportResult};
use serde::Serialize;

// ==========================================
// ColumnMap - 语义列映射结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnMap {
    positions: [Option<usize>; 9],
}

impl ColumnMap {
    /// 语义键对应的列下标（None = 缺失列）
    pub fn get(&self, key: ColumnKey) -> Option<usize> {
        self.positions[key.slot()]
    }

    pub fn is_mapped(&self, key: ColumnKey) -> bool {
        self.get(key).is_some()
    }

    /// 取数据行中某语义列的值
    ///
    /// 缺失列或短行 → CellValue::Empty
    pub fn cell<'a>(&self, row: &'a [CellValue], key: ColumnKey) -> &'a CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.get(key).and_then(|idx| row.get(idx)).unwrap_or(&EMPTY)
    }

    /// 已映射的语义键
    pub fn mapped_keys(&self) -> Vec<ColumnKey> {
        ColumnKey::ALL
            .iter()
            .copied()
            .filter(|k| self.is_mapped(*k))
            .collect()
    }
}

pub struct ColumnMapper;

impl ColumnMapper {
    /// 解析表头行
    ///
    /// # 返回
    /// - Ok(ColumnMap): 必需列均已解析
    /// - Err(MissingColumns): 列出全部缺失的必需键
    pub fn map(&self, header_row: &[CellValue]) -> ImportResult<ColumnMap> {
        let labels: Vec<String> = header_row.iter().map(|c| c.trimmed()).collect();

        let mut positions = [None; 9];
        for key in ColumnKey::ALL {
            positions[key.slot()] = labels.iter().position(|l| l == key.header_label());
        }
        let map = ColumnMap { positions };

        let missing: Vec<ColumnKey> = ColumnKey::REQUIRED
            .iter()
            .copied()
            .filter(|k| !map.is_mapped(*k))
            .collect();
        if !missing.is_empty() {
            return Err(ImportError::MissingColumns(missing));
        }

        Ok(map)
    }
}
