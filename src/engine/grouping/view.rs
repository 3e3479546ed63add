use serde::{Deserialize, Serialize};

use crate::domain::job_card::JobCard;
use crate::domain::types::QcStatus;

// ==========================================
// ChildPartProgress - 子件进度分组
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildPartProgress {
    /// 子件ID (None 表示不挂子件的订单级工序)
    pub child_part_id: Option<String>,

    /// 分组内工单 (按工序号升序)
    pub cards: Vec<JobCard>,

    /// 已完工工单数
    pub completed_count: usize,

    /// 分组内工单总数
    pub total_count: usize,

    /// 当前工序 (首个 IN_PROGRESS,否则首个 READY)
    pub current: Option<JobCard>,
}

// ==========================================
// OrderProductionView - 订单生产进度视图
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderProductionView {
    /// 订单ID
    pub order_id: String,

    /// 订单编号
    pub order_no: String,

    /// 客户名称快照
    pub customer_name: Option<String>,

    /// 产品名称快照
    pub product_name: Option<String>,

    /// 子件进度分组 (按工单首次出现顺序)
    pub child_parts: Vec<ChildPartProgress>,

    /// 总装工单 (每订单至多一张)
    pub assembly_card: Option<JobCard>,

    /// 质检总状态 (全部完工才为 COMPLETED)
    pub qc_status: QcStatus,

    /// 订单内工单总数
    pub total_steps: usize,

    /// 已完工步数
    pub completed_steps: usize,

    /// 执行中步数
    pub in_progress_steps: usize,

    /// 待处理步数 (其余全部状态)
    pub pending_steps: usize,
}
