// ==========================================
// 装配车间生产跟踪系统 - 工单生成引擎
// ==========================================
// 职责: 订单下达时按工艺路线批量生成工单
// 输入: 生产订单 + 工艺路线模板 + 生成档案
// 输出: 带前序依赖链的工单列表 (首序 READY,其余 BLOCKED)
// ==========================================
// 红线: 工单ID由订单+工序号确定性派生,同输入必得同ID
// 红线: 依赖链为单前序线性链,不建模汇入/分叉
// ==========================================

use chrono::{Duration, NaiveDateTime};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

use crate::config::GenerationProfile;
use crate::domain::job_card::JobCard;
use crate::domain::order::{ProcessTemplate, ProductionOrder};
use crate::domain::types::JobCardStatus;

// ==========================================
// 缺省工时常量
// ==========================================
// 占位策略: 工艺级实际工时来自外部数据源,本核心不建模;
// 档案未覆盖时按下列常量估算
pub const DEFAULT_SETUP_TIME_MIN: i64 = 15;
pub const DEFAULT_CYCLE_TIME_MIN_PER_UNIT: i64 = 30;

// ==========================================
// JobCardGenerator - 工单生成引擎
// ==========================================
pub struct JobCardGenerator {
    // 无状态引擎,不需要注入依赖
}

impl JobCardGenerator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 批量生成工单
    ///
    /// 规则:
    /// 1) 按档案中的工序号筛选模板工序,保持模板顺序(选择集不重排)
    /// 2) 模板中不存在的工序号静默过滤,仅记录告警
    /// 3) 首张工单 READY 且无阻塞;其余 BLOCKED,blocked_by 为唯一前序
    /// 4) 机台/操作工一律置空,自动派工属外部调度层
    ///
    /// # 参数
    /// - `order`: 生产订单
    /// - `template`: 工艺路线模板
    /// - `profile`: 生成档案 (工序选择集 + 策略标签 + 工时参数)
    /// - `now`: 当前时间 (显式传入,保证可测)
    ///
    /// # 返回
    /// 按工序顺序排列的工单列表
    #[instrument(skip(self, order, template, profile), fields(order_no = %order.order_no, selected = profile.include_steps.len()))]
    pub fn generate(
        &self,
        order: &ProductionOrder,
        template: &ProcessTemplate,
        profile: &GenerationProfile,
        now: NaiveDateTime,
    ) -> Vec<JobCard> {
        // 选择集中不在模板内的工序号: 静默过滤,仅告警
        let known: HashSet<u32> = template.steps.iter().map(|s| s.step_no).collect();
        let missing: Vec<u32> = profile
            .include_steps
            .iter()
            .filter(|n| !known.contains(n))
            .copied()
            .collect();
        if !missing.is_empty() {
            warn!(
                order_no = %order.order_no,
                template_id = %template.template_id,
                ?missing,
                "选择集包含模板中不存在的工序号,已忽略"
            );
        }

        let setup = profile
            .parameters
            .setup_time_min
            .unwrap_or(DEFAULT_SETUP_TIME_MIN);
        let cycle = profile
            .parameters
            .cycle_time_min_per_unit
            .unwrap_or(DEFAULT_CYCLE_TIME_MIN_PER_UNIT);
        let estimated_total = setup + cycle * i64::from(order.quantity);

        let mut cards: Vec<JobCard> = Vec::new();
        let mut prev_id: Option<String> = None;

        for step in template
            .steps
            .iter()
            .filter(|s| profile.include_steps.contains(&s.step_no))
        {
            let job_card_id = Self::job_card_id(&order.order_id, step.step_no);
            let job_card_no = Self::job_card_no(&order.order_no, step.step_no);

            // 线性链: 除首序外,前序即上一张工单
            let depends_on: Vec<String> = prev_id.iter().cloned().collect();
            let status = if depends_on.is_empty() {
                JobCardStatus::Ready
            } else {
                JobCardStatus::Blocked
            };

            debug!(
                job_card_id = %job_card_id,
                step_no = step.step_no,
                %status,
                "生成工单"
            );

            cards.push(JobCard {
                job_card_id: job_card_id.clone(),
                job_card_no,
                order_id: order.order_id.clone(),
                order_no: order.order_no.clone(),
                process_id: step.process_id.clone(),
                process_name: step.process_name.clone(),
                process_code: step.process_code.clone(),
                step_no: step.step_no,
                template_id: template.template_id.clone(),
                child_part_id: step.child_part_id.clone(),
                role: step.role,
                blocked_by: depends_on.clone(),
                depends_on,
                status,
                target_qty: order.quantity,
                completed_qty: 0,
                rejected_qty: 0,
                reworked_qty: 0,
                in_progress_qty: 0,
                setup_time_min: setup,
                cycle_time_min_per_unit: cycle,
                estimated_total_time_min: estimated_total,
                actual_time_min: None,
                machine_code: None,
                operator_id: None,
                scheduled_start: None,
                scheduled_end: None,
                actual_start: None,
                actual_end: None,
                customer_name: Some(order.customer_name.clone()),
                product_name: Some(order.product_name.clone()),
                instructions: step.instructions.clone(),
                created_at: now,
                updated_at: now,
            });

            prev_id = Some(job_card_id);
        }

        info!(
            order_no = %order.order_no,
            cards = cards.len(),
            strategy = profile.strategy.as_str(),
            "工单生成完成"
        );

        cards
    }

    // ==========================================
    // 派生辅助
    // ==========================================

    /// 工单集合的预计总工时 (分钟)
    pub fn total_estimated_time(&self, cards: &[JobCard]) -> i64 {
        cards.iter().map(|c| c.estimated_total_time_min).sum()
    }

    /// 预计完工时间 = now + 预计总工时
    ///
    /// 串行时间模型: 假设全路线在单一时间线上执行,
    /// 不考虑多机台并行(已知简化)
    pub fn expected_completion(&self, cards: &[JobCard], now: NaiveDateTime) -> NaiveDateTime {
        now + Duration::minutes(self.total_estimated_time(cards))
    }

    // ==========================================
    // 确定性标识派生
    // ==========================================

    /// 工单ID: 订单ID + 工序号
    pub fn job_card_id(order_id: &str, step_no: u32) -> String {
        format!("JC-{}-{:03}", order_id, step_no)
    }

    /// 工单编号: 订单编号 + 工序号
    pub fn job_card_no(order_no: &str, step_no: u32) -> String {
        format!("{}-OP{:03}", order_no, step_no)
    }
}

impl Default for JobCardGenerator {
    fn default() -> Self {
        Self::new()
    }
}
