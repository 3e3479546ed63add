use indexmap::IndexMap;
use tracing::{debug, instrument, warn};

use crate::domain::job_card::JobCard;
use crate::domain::types::{JobCardRole, JobCardStatus, QcStatus};

use super::view::{ChildPartProgress, OrderProductionView};

// ==========================================
// GroupingEngine - 生产分组引擎
// ==========================================
pub struct GroupingEngine {
    // 无状态引擎,不需要注入依赖
}

impl GroupingEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 构建全部订单的进度视图
    ///
    /// 规则:
    /// 1) 按订单ID分组,保持工单首次出现顺序
    /// 2) 订单内: 非总装工单按子件ID再分组,组内按工序号升序
    /// 3) 总装工单按角色标记识别,至多一张(多张保留首张并告警)
    /// 4) 无工单的订单不产生视图
    #[instrument(skip(self, cards), fields(cards = cards.len()))]
    pub fn build_views(&self, cards: &[JobCard]) -> Vec<OrderProductionView> {
        let mut by_order: IndexMap<String, Vec<&JobCard>> = IndexMap::new();
        for card in cards {
            by_order.entry(card.order_id.clone()).or_default().push(card);
        }

        let views: Vec<OrderProductionView> = by_order
            .into_iter()
            .map(|(_, order_cards)| self.build_order_view(&order_cards))
            .collect();

        debug!(orders = views.len(), "进度视图构建完成");
        views
    }

    /// 构建单个订单的进度视图
    ///
    /// 工单列表中不含该订单时返回 None (而非空视图)
    pub fn order_view(&self, cards: &[JobCard], order_id: &str) -> Option<OrderProductionView> {
        let order_cards: Vec<&JobCard> =
            cards.iter().filter(|c| c.order_id == order_id).collect();
        if order_cards.is_empty() {
            return None;
        }
        Some(self.build_order_view(&order_cards))
    }

    // ==========================================
    // 派生查询
    // ==========================================

    /// 订单当前活动工序
    ///
    /// 按子件分组的迭代顺序扫描: 先找首个 IN_PROGRESS,
    /// 再找首个 READY;都没有时回退到总装工单
    /// (其状态为 IN_PROGRESS/READY 时),否则为空。
    /// 该顺序只是子件迭代顺序,不是全局优先级。
    pub fn current_active_step<'a>(
        &self,
        view: &'a OrderProductionView,
    ) -> Option<&'a JobCard> {
        for group in &view.child_parts {
            if let Some(card) = group
                .cards
                .iter()
                .find(|c| c.status == JobCardStatus::InProgress)
            {
                return Some(card);
            }
        }
        for group in &view.child_parts {
            if let Some(card) = group
                .cards
                .iter()
                .find(|c| c.status == JobCardStatus::Ready)
            {
                return Some(card);
            }
        }
        match &view.assembly_card {
            Some(card)
                if card.status == JobCardStatus::InProgress
                    || card.status == JobCardStatus::Ready =>
            {
                Some(card)
            }
            _ => None,
        }
    }

    // ==========================================
    // 内部构建
    // ==========================================

    fn build_order_view(&self, order_cards: &[&JobCard]) -> OrderProductionView {
        let first = order_cards[0];

        // 总装工单识别 + 子件分组
        let mut assembly_card: Option<JobCard> = None;
        let mut groups: IndexMap<Option<String>, Vec<JobCard>> = IndexMap::new();

        for card in order_cards {
            if card.role == JobCardRole::AssemblyStep {
                if assembly_card.is_some() {
                    warn!(
                        order_id = %card.order_id,
                        job_card_id = %card.job_card_id,
                        "订单存在多张总装工单,保留首张"
                    );
                } else {
                    assembly_card = Some((*card).clone());
                }
                continue;
            }
            groups
                .entry(card.child_part_id.clone())
                .or_default()
                .push((*card).clone());
        }

        let child_parts: Vec<ChildPartProgress> = groups
            .into_iter()
            .map(|(child_part_id, mut group_cards)| {
                group_cards.sort_by_key(|c| c.step_no);
                let completed_count = group_cards
                    .iter()
                    .filter(|c| c.status == JobCardStatus::Completed)
                    .count();
                let current = group_cards
                    .iter()
                    .find(|c| c.status == JobCardStatus::InProgress)
                    .or_else(|| {
                        group_cards
                            .iter()
                            .find(|c| c.status == JobCardStatus::Ready)
                    })
                    .cloned();
                ChildPartProgress {
                    child_part_id,
                    total_count: group_cards.len(),
                    completed_count,
                    current,
                    cards: group_cards,
                }
            })
            .collect();

        // 订单级步数统计: pending 吸收其余全部状态,三桶恒等于总数
        let total_steps = order_cards.len();
        let completed_steps = order_cards
            .iter()
            .filter(|c| c.status == JobCardStatus::Completed)
            .count();
        let in_progress_steps = order_cards
            .iter()
            .filter(|c| c.status == JobCardStatus::InProgress)
            .count();
        let pending_steps = total_steps - completed_steps - in_progress_steps;

        let qc_status = if total_steps > 0 && completed_steps == total_steps {
            QcStatus::Completed
        } else {
            QcStatus::Pending
        };

        OrderProductionView {
            order_id: first.order_id.clone(),
            order_no: first.order_no.clone(),
            customer_name: first.customer_name.clone(),
            product_name: first.product_name.clone(),
            child_parts,
            assembly_card,
            qc_status,
            total_steps,
            completed_steps,
            in_progress_steps,
            pending_steps,
        }
    }
}

impl Default for GroupingEngine {
    fn default() -> Self {
        Self::new()
    }
}
