use chrono::{Duration, NaiveDateTime};
use tracing::{debug, instrument};

use crate::domain::child_part::ChildPartProductionOrder;

use super::report::{AssemblyReadinessReport, BlockingItem, ReadyItem};

// 一天的秒数 (延期取整用)
const SECONDS_PER_DAY: i64 = 86_400;

// 总装准备缓冲: 最晚子件计划完成后留一天
const ASSEMBLY_BUFFER_DAYS: i64 = 1;

// ==========================================
// ReadinessEvaluator - 齐套检查引擎
// ==========================================
pub struct ReadinessEvaluator {
    // 无状态引擎,不需要注入依赖
}

impl ReadinessEvaluator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 评估订单齐套状态
    ///
    /// 规则:
    /// 1) 状态为 READY_FOR_ASSEMBLY 的子件入就绪分区,其余入阻塞分区
    /// 2) 阻塞子件计算延期天数 (未到期为空)
    /// 3) is_ready 当且仅当阻塞为空且子件非空
    /// 4) 齐套率 = round(就绪数/总数×100),无子件时为 0
    ///
    /// # 参数
    /// - `order_id`: 订单ID
    /// - `child_parts`: 该订单的子件生产记录
    /// - `now`: 当前时间 (显式传入,保证可测)
    #[instrument(skip(self, child_parts), fields(order_id = %order_id, parts = child_parts.len()))]
    pub fn evaluate(
        &self,
        order_id: &str,
        child_parts: &[ChildPartProductionOrder],
        now: NaiveDateTime,
    ) -> AssemblyReadinessReport {
        let mut ready_items: Vec<ReadyItem> = Vec::new();
        let mut blocking_items: Vec<BlockingItem> = Vec::new();

        for part in child_parts {
            if part.is_ready_for_assembly() {
                ready_items.push(ReadyItem {
                    child_part_id: part.child_part_id.clone(),
                    child_part_name: part.child_part_name.clone(),
                    ready_at: part.ready_for_assembly_at,
                    quantity: part.quantity_produced,
                });
            } else {
                blocking_items.push(BlockingItem {
                    child_part_id: part.child_part_id.clone(),
                    child_part_name: part.child_part_name.clone(),
                    status: part.status,
                    expected_at: part.planned_completion,
                    delay_days: self.delay_days(part.planned_completion, now),
                });
            }
        }

        let total = child_parts.len();
        let readiness_pct = if total == 0 {
            0
        } else {
            ((ready_items.len() * 100) as f64 / total as f64).round() as u32
        };
        let is_ready = blocking_items.is_empty() && total > 0;

        debug!(
            order_id = %order_id,
            ready = ready_items.len(),
            blocking = blocking_items.len(),
            readiness_pct,
            "齐套评估完成"
        );

        AssemblyReadinessReport {
            order_id: order_id.to_string(),
            evaluated_at: now,
            is_ready,
            readiness_pct,
            ready_items,
            blocking_items,
        }
    }

    // ==========================================
    // 派生计算
    // ==========================================

    /// 延期天数
    ///
    /// 计划完成时间晚于或等于 now 时为空;
    /// 否则按已过整天数向上取整
    pub fn delay_days(&self, planned: NaiveDateTime, now: NaiveDateTime) -> Option<i64> {
        let elapsed_secs = now.signed_duration_since(planned).num_seconds();
        if elapsed_secs <= 0 {
            None
        } else {
            Some((elapsed_secs + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY)
        }
    }

    /// 预计总装开始时间
    ///
    /// 全部子件计划完成时间的最大值加一天缓冲;
    /// 无子件时为空
    pub fn expected_assembly_start(
        &self,
        child_parts: &[ChildPartProductionOrder],
    ) -> Option<NaiveDateTime> {
        child_parts
            .iter()
            .map(|p| p.planned_completion)
            .max()
            .map(|latest| latest + Duration::days(ASSEMBLY_BUFFER_DAYS))
    }
}

impl Default for ReadinessEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
