// ==========================================
// 装配车间生产跟踪系统 - 引擎层
// ==========================================
// 职责: 实现无状态业务规则引擎
// 红线: 引擎不读墙钟,所有时间参数显式传入
// 红线: 引擎不做外键校验,输入结构完整性由上游保证
// ==========================================

pub mod generator;
pub mod grouping;
pub mod readiness;

// 重导出核心引擎
pub use generator::{
    JobCardGenerator, DEFAULT_CYCLE_TIME_MIN_PER_UNIT, DEFAULT_SETUP_TIME_MIN,
};
pub use grouping::{ChildPartProgress, GroupingEngine, OrderProductionView};
pub use readiness::{AssemblyReadinessReport, BlockingItem, ReadinessEvaluator, ReadyItem};
