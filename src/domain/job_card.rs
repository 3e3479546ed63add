// ==========================================
// 装配车间生产跟踪系统 - 工单领域模型
// ==========================================
// 红线: depends_on 创建后不可变,生命周期内只允许
//       blocked_by 与 status 变化
// 红线: blocked_by 非空的工单不允许开工
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{JobCardRole, JobCardStatus};

// ==========================================
// JobCard - 工序工单
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCard {
    // ===== 标识字段 (由订单号+工序号确定性派生) =====
    pub job_card_id: String, // 工单ID
    pub job_card_no: String, // 工单编号

    // ===== 关联字段 =====
    pub order_id: String,              // 订单ID
    pub order_no: String,              // 订单编号
    pub process_id: String,            // 工艺ID
    pub process_name: String,          // 工艺名称
    pub process_code: String,          // 工艺代码
    pub step_no: u32,                  // 工序号
    pub template_id: String,           // 工艺路线模板ID
    pub child_part_id: Option<String>, // 所属子件
    pub role: JobCardRole,             // 工序角色

    // ===== 依赖字段 =====
    pub depends_on: Vec<String>, // 前序工单ID (创建后不可变)
    pub blocked_by: Vec<String>, // 未完成的前序工单ID (解锁后清空)

    // ===== 状态 =====
    pub status: JobCardStatus, // 工单状态

    // ===== 数量字段 (completed+rejected+reworked+in_progress <= target) =====
    pub target_qty: u32,      // 目标数量
    pub completed_qty: u32,   // 完工数量
    pub rejected_qty: u32,    // 报废数量
    pub reworked_qty: u32,    // 返工数量
    pub in_progress_qty: u32, // 在制数量

    // ===== 工时字段 (分钟) =====
    pub setup_time_min: i64,           // 准备工时
    pub cycle_time_min_per_unit: i64,  // 单件节拍
    pub estimated_total_time_min: i64, // 预计总工时 = setup + cycle × target
    pub actual_time_min: Option<i64>,  // 实际工时 (由执行层回填)

    // ===== 排程字段 (派工前为空) =====
    pub machine_code: Option<String>,           // 机台
    pub operator_id: Option<String>,            // 操作工
    pub scheduled_start: Option<NaiveDateTime>, // 计划开始
    pub scheduled_end: Option<NaiveDateTime>,   // 计划结束
    pub actual_start: Option<NaiveDateTime>,    // 实际开始
    pub actual_end: Option<NaiveDateTime>,      // 实际结束

    // ===== 展示与审计字段 (不承载不变式) =====
    pub customer_name: Option<String>, // 客户名称快照
    pub product_name: Option<String>,  // 产品名称快照
    pub instructions: Option<String>,  // 作业指导
    pub created_at: NaiveDateTime,     // 创建时间
    pub updated_at: NaiveDateTime,     // 更新时间
}

impl JobCard {
    /// 判断是否被前序阻塞
    pub fn is_blocked(&self) -> bool {
        !self.blocked_by.is_empty()
    }

    /// 判断是否可开工 (状态 READY 且无阻塞)
    pub fn can_start(&self) -> bool {
        self.status == JobCardStatus::Ready && self.blocked_by.is_empty()
    }

    /// 已分配去向的数量合计
    pub fn quantity_accounted(&self) -> u32 {
        self.completed_qty + self.rejected_qty + self.reworked_qty + self.in_progress_qty
    }

    /// 数量不变式: 各去向合计不超过目标数量
    pub fn quantities_consistent(&self) -> bool {
        self.quantity_accounted() <= self.target_qty
    }

    /// 剩余待投产数量
    pub fn remaining_qty(&self) -> u32 {
        self.target_qty.saturating_sub(self.quantity_accounted())
    }

    /// 标记某前序工单已完工
    ///
    /// 从 blocked_by 中移除该前序;全部前序完工后
    /// BLOCKED 状态自动转为 READY。depends_on 保持不变。
    pub fn mark_dependency_completed(&mut self, job_card_id: &str, now: NaiveDateTime) {
        self.blocked_by.retain(|id| id != job_card_id);
        if self.blocked_by.is_empty() && self.status == JobCardStatus::Blocked {
            self.status = JobCardStatus::Ready;
        }
        self.updated_at = now;
    }
}
