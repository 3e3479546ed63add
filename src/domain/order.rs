// ==========================================
// 装配车间生产跟踪系统 - 订单与工艺路线模型
// ==========================================
// 生产订单与工艺路线模板均为外部输入,生成期间不可变
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{JobCardRole, OrderPriority};

// ==========================================
// ProductionOrder - 生产订单
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionOrder {
    pub order_id: String,          // 订单ID
    pub order_no: String,          // 订单编号
    pub quantity: u32,             // 订单数量
    pub priority: OrderPriority,   // 优先级
    pub customer_id: String,       // 客户ID
    pub customer_name: String,     // 客户名称
    pub product_id: String,        // 产品ID
    pub product_name: String,      // 产品名称
    pub created_at: NaiveDateTime, // 创建时间
}

// ==========================================
// ProcessStep - 工艺路线工序
// ==========================================
// step_no 在模板内唯一且单调递增,但不要求连续
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessStep {
    pub step_no: u32,                   // 工序号 (模板内全序)
    pub process_id: String,             // 工艺ID
    pub process_name: String,           // 工艺名称
    pub process_code: String,           // 工艺代码
    pub role: JobCardRole,              // 工序角色 (子件/总装/质检)
    pub child_part_id: Option<String>,  // 所属子件 (总装/订单级工序为空)
    pub instructions: Option<String>,   // 作业指导 (可选)
}

// ==========================================
// ProcessTemplate - 工艺路线模板
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessTemplate {
    pub template_id: String,      // 模板ID
    pub template_name: String,    // 模板名称
    pub steps: Vec<ProcessStep>,  // 工序列表 (按工艺顺序)
}

impl ProcessTemplate {
    /// 按工序号查找工序
    pub fn step_by_no(&self, step_no: u32) -> Option<&ProcessStep> {
        self.steps.iter().find(|s| s.step_no == step_no)
    }

    /// 模板内全部工序号
    pub fn step_nos(&self) -> Vec<u32> {
        self.steps.iter().map(|s| s.step_no).collect()
    }

    /// 判断模板是否为空
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
