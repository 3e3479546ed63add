// ==========================================
// 装配车间生产跟踪系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod child_part;
pub mod job_card;
pub mod order;
pub mod types;

// 重导出核心类型
pub use child_part::ChildPartProductionOrder;
pub use job_card::JobCard;
pub use order::{ProcessStep, ProcessTemplate, ProductionOrder};
pub use types::{
    ChildPartStatus, JobCardRole, JobCardStatus, OrderPriority, QcStatus, ScheduleStrategy,
};
