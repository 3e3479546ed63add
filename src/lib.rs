// ==========================================
// 装配车间生产跟踪系统 - 核心库
// ==========================================
// 技术栈: Rust (纯计算核心, 无持久化/网络面)
// 系统定位: 工单生成 + 齐套检查 + 生产进度分组
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 生成参数与策略档案
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    ChildPartStatus, JobCardRole, JobCardStatus, OrderPriority, QcStatus, ScheduleStrategy,
};

// 领域实体
pub use domain::{
    ChildPartProductionOrder, JobCard, ProcessStep, ProcessTemplate, ProductionOrder,
};

// 引擎
pub use engine::{GroupingEngine, JobCardGenerator, ReadinessEvaluator};

// 派生视图与报告
pub use engine::grouping::{ChildPartProgress, OrderProductionView};
pub use engine::readiness::{AssemblyReadinessReport, BlockingItem, ReadyItem};

// 配置
pub use config::{ConfigError, GenerationProfile, ProfileStore, TimingParameters};

// API
pub use api::{ApiError, ApiResult, TrackingApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "装配车间生产跟踪系统";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
