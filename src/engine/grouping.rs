// ==========================================
// 装配车间生产跟踪系统 - 生产分组引擎
// ==========================================
// 职责: 扁平工单集合 → 按订单/子件分层的进度视图
// 输入: 任意订单混合的工单列表
// 输出: 订单进度视图 (子件分组 + 总装工单 + 步数统计)
// ==========================================
// 红线: 总装工单按角色标记识别,不按工序名称匹配
// 注: 当前工序扫描遵循子件首次出现顺序,非全局优先级
// ==========================================

mod core;
mod view;


pub use self::core::GroupingEngine;
pub use self::view::{ChildPartProgress, OrderProductionView};
