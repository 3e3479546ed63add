// ==========================================
// 装配车间生产跟踪系统 - 生产跟踪接口
// ==========================================
// 职责: 组合三个引擎,为上游提供订单级业务入口
// 注: 引擎之间无隐藏依赖,数据流由调用方可见地传递
// ==========================================

use chrono::NaiveDateTime;
use tracing::{info, instrument};

use crate::api::error::ApiResult;
use crate::api::validator;
use crate::config::GenerationProfile;
use crate::domain::child_part::ChildPartProductionOrder;
use crate::domain::job_card::JobCard;
use crate::domain::order::{ProcessTemplate, ProductionOrder};
use crate::engine::grouping::{GroupingEngine, OrderProductionView};
use crate::engine::readiness::{AssemblyReadinessReport, ReadinessEvaluator};
use crate::engine::JobCardGenerator;
use crate::i18n;

// ==========================================
// TrackingApi - 生产跟踪接口
// ==========================================
pub struct TrackingApi {
    generator: JobCardGenerator,
    evaluator: ReadinessEvaluator,
    grouping: GroupingEngine,
}

impl TrackingApi {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            generator: JobCardGenerator::new(),
            evaluator: ReadinessEvaluator::new(),
            grouping: GroupingEngine::new(),
        }
    }

    // ==========================================
    // 订单下达
    // ==========================================

    /// 下达订单: 校验输入并批量生成工单
    ///
    /// # 返回
    /// 按工序顺序排列的工单列表
    #[instrument(skip_all, fields(order_no = %order.order_no))]
    pub fn release_order(
        &self,
        order: &ProductionOrder,
        template: &ProcessTemplate,
        profile: &GenerationProfile,
        now: NaiveDateTime,
    ) -> ApiResult<Vec<JobCard>> {
        validator::validate_release_inputs(order, template, profile)?;
        let cards = self.generator.generate(order, template, profile, now);

        let count = cards.len().to_string();
        info!(
            "{}",
            i18n::t_with_args(
                "job_card.released",
                &[("order_no", order.order_no.as_str()), ("count", count.as_str())]
            )
        );
        Ok(cards)
    }

    /// 工单集合的预计完工时间
    pub fn expected_completion(&self, cards: &[JobCard], now: NaiveDateTime) -> NaiveDateTime {
        self.generator.expected_completion(cards, now)
    }

    // ==========================================
    // 齐套检查
    // ==========================================

    /// 评估订单齐套状态
    pub fn evaluate_readiness(
        &self,
        order_id: &str,
        child_parts: &[ChildPartProductionOrder],
        now: NaiveDateTime,
    ) -> AssemblyReadinessReport {
        self.evaluator.evaluate(order_id, child_parts, now)
    }

    /// 预计总装开始时间
    pub fn expected_assembly_start(
        &self,
        child_parts: &[ChildPartProductionOrder],
    ) -> Option<NaiveDateTime> {
        self.evaluator.expected_assembly_start(child_parts)
    }

    // ==========================================
    // 进度视图
    // ==========================================

    /// 构建全部订单的进度视图
    pub fn build_overview(&self, cards: &[JobCard]) -> Vec<OrderProductionView> {
        self.grouping.build_views(cards)
    }

    /// 构建单个订单的进度视图 (订单无工单时为 None)
    pub fn order_view(&self, cards: &[JobCard], order_id: &str) -> Option<OrderProductionView> {
        self.grouping.order_view(cards, order_id)
    }

    /// 订单当前活动工序
    pub fn current_active_step<'a>(
        &self,
        view: &'a OrderProductionView,
    ) -> Option<&'a JobCard> {
        self.grouping.current_active_step(view)
    }
}

impl Default for TrackingApi {
    fn default() -> Self {
        Self::new()
    }
}
