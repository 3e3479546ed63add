// ==========================================
// 装配车间生产跟踪系统 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工单状态 (Job Card Status)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与外部系统一致)
// READY/BLOCKED 由依赖链决定; IN_PROGRESS/COMPLETED 由执行层驱动
// CANCELLED/ON_HOLD 为执行层扩展状态,核心只透传
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobCardStatus {
    Ready,      // 可开工
    Blocked,    // 前序未完成
    InProgress, // 执行中
    Completed,  // 已完工
    Cancelled,  // 已取消
    OnHold,     // 暂停
}

impl fmt::Display for JobCardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobCardStatus::Ready => write!(f, "READY"),
            JobCardStatus::Blocked => write!(f, "BLOCKED"),
            JobCardStatus::InProgress => write!(f, "IN_PROGRESS"),
            JobCardStatus::Completed => write!(f, "COMPLETED"),
            JobCardStatus::Cancelled => write!(f, "CANCELLED"),
            JobCardStatus::OnHold => write!(f, "ON_HOLD"),
        }
    }
}

// ==========================================
// 工单角色 (Job Card Role)
// ==========================================
// 红线: 总装工序靠角色标记识别,禁止按工序名称猜测
// 角色在生成时一次性写入,分组引擎只读
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobCardRole {
    ChildPartStep, // 子件工序
    AssemblyStep,  // 总装工序
    QcStep,        // 质检工序
}

impl fmt::Display for JobCardRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobCardRole::ChildPartStep => write!(f, "CHILD_PART_STEP"),
            JobCardRole::AssemblyStep => write!(f, "ASSEMBLY_STEP"),
            JobCardRole::QcStep => write!(f, "QC_STEP"),
        }
    }
}

// ==========================================
// 子件生产状态 (Child Part Status)
// ==========================================
// 终态为 READY_FOR_ASSEMBLY,其余状态均视为齐套阻塞
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChildPartStatus {
    Pending,          // 未开工
    InProduction,     // 生产中
    QualityCheck,     // 质检中
    ReadyForAssembly, // 可总装
}

impl fmt::Display for ChildPartStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildPartStatus::Pending => write!(f, "PENDING"),
            ChildPartStatus::InProduction => write!(f, "IN_PRODUCTION"),
            ChildPartStatus::QualityCheck => write!(f, "QUALITY_CHECK"),
            ChildPartStatus::ReadyForAssembly => write!(f, "READY_FOR_ASSEMBLY"),
        }
    }
}

// ==========================================
// 质检总状态 (QC Status)
// ==========================================
// 粗粒度: 订单内全部工单完工才算 COMPLETED,否则 PENDING
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QcStatus {
    Pending,   // 待完成
    Completed, // 已完成
}

impl fmt::Display for QcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QcStatus::Pending => write!(f, "PENDING"),
            QcStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

// ==========================================
// 订单优先级 (Order Priority)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderPriority {
    Low,    // 低
    Normal, // 正常
    High,   // 高
    Urgent, // 紧急
}

impl fmt::Display for OrderPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderPriority::Low => write!(f, "LOW"),
            OrderPriority::Normal => write!(f, "NORMAL"),
            OrderPriority::High => write!(f, "HIGH"),
            OrderPriority::Urgent => write!(f, "URGENT"),
        }
    }
}

// ==========================================
// 排程策略 (Schedule Strategy)
// ==========================================
// 生成配置携带的策略标签;核心只透传,不解释取值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStrategy {
    Sequential,
    Parallel,
    Manual,
}

impl ScheduleStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStrategy::Sequential => "sequential",
            ScheduleStrategy::Parallel => "parallel",
            ScheduleStrategy::Manual => "manual",
        }
    }

    pub fn title_cn(&self) -> &'static str {
        match self {
            ScheduleStrategy::Sequential => "顺序流转",
            ScheduleStrategy::Parallel => "并行流转",
            ScheduleStrategy::Manual => "人工排程",
        }
    }
}

impl Default for ScheduleStrategy {
    fn default() -> Self {
        ScheduleStrategy::Sequential
    }
}

impl std::str::FromStr for ScheduleStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(ScheduleStrategy::Sequential),
            "parallel" => Ok(ScheduleStrategy::Parallel),
            "manual" => Ok(ScheduleStrategy::Manual),
            other => Err(format!("未知策略类型: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_serde_format() {
        let json = serde_json::to_string(&JobCardStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let back: JobCardStatus = serde_json::from_str("\"BLOCKED\"").unwrap();
        assert_eq!(back, JobCardStatus::Blocked);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(JobCardStatus::OnHold.to_string(), "ON_HOLD");
        assert_eq!(ChildPartStatus::ReadyForAssembly.to_string(), "READY_FOR_ASSEMBLY");
        assert_eq!(JobCardRole::AssemblyStep.to_string(), "ASSEMBLY_STEP");
    }

    #[test]
    fn test_priority_ordering() {
        assert!(OrderPriority::Urgent > OrderPriority::High);
        assert!(OrderPriority::Normal > OrderPriority::Low);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(
            ScheduleStrategy::from_str("parallel").unwrap(),
            ScheduleStrategy::Parallel
        );
        assert!(ScheduleStrategy::from_str("random").is_err());
        assert_eq!(ScheduleStrategy::default(), ScheduleStrategy::Sequential);
    }
}
