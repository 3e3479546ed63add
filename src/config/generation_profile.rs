use serde::{Deserialize, Serialize};

use crate::domain::types::ScheduleStrategy;

/// 工单生成档案（持久化对象）
///
/// 存储位置：配置目录下 profiles/{profile_id}.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationProfile {
    /// 档案 ID（用于选择/引用）
    pub profile_id: String,

    /// 显示名称（中文）
    pub title: String,

    /// 说明（可选）
    #[serde(default)]
    pub description: Option<String>,

    /// 参与生成的工序号选择集
    pub include_steps: Vec<u32>,

    /// 排程策略标签（核心只透传，不解释取值）
    #[serde(default)]
    pub strategy: ScheduleStrategy,

    /// 自动派工标志（派工本身由外部调度层执行，生成时机台仍置空）
    #[serde(default)]
    pub auto_assign: bool,

    /// 工时参数（未覆盖的维度回落到引擎缺省常量）
    #[serde(default)]
    pub parameters: TimingParameters,
}

/// 工时参数（轻量版：仅覆盖估算所需的两个维度）
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TimingParameters {
    /// 准备工时（分钟）
    #[serde(default)]
    pub setup_time_min: Option<i64>,

    /// 单件节拍（分钟/件）
    #[serde(default)]
    pub cycle_time_min_per_unit: Option<i64>,
}

impl GenerationProfile {
    /// 以缺省参数构造一个只含工序选择集的档案
    pub fn with_steps(include_steps: Vec<u32>) -> Self {
        Self {
            profile_id: "default".to_string(),
            title: "缺省生成档案".to_string(),
            description: None,
            include_steps,
            strategy: ScheduleStrategy::default(),
            auto_assign: false,
            parameters: TimingParameters::default(),
        }
    }
}
