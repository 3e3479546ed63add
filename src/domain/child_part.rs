// ==========================================
// 装配车间生产跟踪系统 - 子件生产记录模型
// ==========================================
// 子件生产记录为外部输入,由齐套检查引擎消费
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::ChildPartStatus;

// ==========================================
// ChildPartProductionOrder - 子件生产记录
// ==========================================
// ready_for_assembly_at 仅在状态为 READY_FOR_ASSEMBLY 时有值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildPartProductionOrder {
    pub child_part_id: String,                        // 子件ID
    pub child_part_name: String,                      // 子件名称
    pub status: ChildPartStatus,                      // 生产状态
    pub planned_completion: NaiveDateTime,            // 计划完成时间
    pub quantity_produced: u32,                       // 已产出数量
    pub ready_for_assembly_at: Option<NaiveDateTime>, // 实际齐套时间
}

impl ChildPartProductionOrder {
    /// 判断是否已可总装
    pub fn is_ready_for_assembly(&self) -> bool {
        self.status == ChildPartStatus::ReadyForAssembly
    }
}
