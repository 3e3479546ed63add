// ==========================================
// 装配车间生产跟踪系统 - 齐套检查引擎
// ==========================================
// 职责: 判定订单的子件是否齐套,可否开始总装
// 输入: 订单ID + 子件生产记录列表
// 输出: 齐套报告 (就绪/阻塞分区 + 延期天数 + 齐套率)
// ==========================================
// 注: 零子件订单永不判定为齐套
// ==========================================

mod core;
mod report;


pub use self::core::ReadinessEvaluator;
pub use self::report::{AssemblyReadinessReport, BlockingItem, ReadyItem};
