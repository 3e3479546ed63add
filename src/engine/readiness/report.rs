use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::ChildPartStatus;
use crate::i18n;

// ==========================================
// ReadyItem - 已齐套子件
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyItem {
    /// 子件ID
    pub child_part_id: String,

    /// 子件名称
    pub child_part_name: String,

    /// 实际齐套时间
    pub ready_at: Option<NaiveDateTime>,

    /// 已产出数量
    pub quantity: u32,
}

// ==========================================
// BlockingItem - 阻塞子件
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockingItem {
    /// 子件ID
    pub child_part_id: String,

    /// 子件名称
    pub child_part_name: String,

    /// 当前生产状态
    pub status: ChildPartStatus,

    /// 计划完成时间
    pub expected_at: NaiveDateTime,

    /// 延期天数 (未到期为空;已到期按整天向上取整)
    pub delay_days: Option<i64>,
}

// ==========================================
// AssemblyReadinessReport - 齐套报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyReadinessReport {
    /// 订单ID
    pub order_id: String,

    /// 评估时间
    pub evaluated_at: NaiveDateTime,

    /// 是否齐套 (阻塞为空且子件非空)
    pub is_ready: bool,

    /// 齐套率 (0-100,四舍五入;无子件时为 0)
    pub readiness_pct: u32,

    /// 已齐套子件列表
    pub ready_items: Vec<ReadyItem>,

    /// 阻塞子件列表
    pub blocking_items: Vec<BlockingItem>,
}

impl AssemblyReadinessReport {
    /// 判断可否开始总装
    pub fn can_start_assembly(&self) -> bool {
        self.is_ready
    }

    /// 阻塞原因描述 (本地化)
    ///
    /// - 无阻塞: None
    /// - 单个阻塞: 单数句式
    /// - 多个阻塞: 数量前缀 + 逗号连接的子件名称
    pub fn blocked_reason(&self) -> Option<String> {
        match self.blocking_items.as_slice() {
            [] => None,
            [only] => Some(i18n::t_with_args(
                "readiness.blocked_single",
                &[("name", only.child_part_name.as_str())],
            )),
            items => {
                let names = items
                    .iter()
                    .map(|i| i.child_part_name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                let count = items.len().to_string();
                Some(i18n::t_with_args(
                    "readiness.blocked_multi",
                    &[("count", count.as_str()), ("names", names.as_str())],
                ))
            }
        }
    }
}
