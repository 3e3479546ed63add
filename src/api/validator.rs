// ==========================================
// 装配车间生产跟踪系统 - 输入校验器
// ==========================================
// 职责: 订单下达前的结构完整性校验
// 红线: 引擎层不做外键/结构校验,上游在此兜底
// ==========================================

use std::collections::HashSet;

use crate::api::error::{ApiError, ApiResult};
use crate::config::GenerationProfile;
use crate::domain::order::{ProcessTemplate, ProductionOrder};

/// 校验生产订单结构完整性
///
/// # 校验规则
/// 1. 订单ID/订单编号不能为空
/// 2. 订单数量必须大于 0
pub fn validate_order(order: &ProductionOrder) -> ApiResult<()> {
    if order.order_id.trim().is_empty() {
        return Err(ApiError::ValidationError("订单ID不能为空".to_string()));
    }
    if order.order_no.trim().is_empty() {
        return Err(ApiError::ValidationError("订单编号不能为空".to_string()));
    }
    if order.quantity == 0 {
        return Err(ApiError::ValidationError(format!(
            "订单 {} 数量必须大于 0",
            order.order_no
        )));
    }
    Ok(())
}

/// 校验工艺路线模板结构完整性
///
/// # 校验规则
/// 1. 模板必须至少包含一个工序
/// 2. 工序号在模板内唯一
pub fn validate_template(template: &ProcessTemplate) -> ApiResult<()> {
    if template.steps.is_empty() {
        return Err(ApiError::ValidationError(format!(
            "工艺路线模板 {} 不含任何工序",
            template.template_id
        )));
    }

    let mut seen: HashSet<u32> = HashSet::new();
    for step in &template.steps {
        if !seen.insert(step.step_no) {
            return Err(ApiError::ValidationError(format!(
                "工艺路线模板 {} 工序号 {} 重复",
                template.template_id, step.step_no
            )));
        }
    }
    Ok(())
}

/// 校验订单下达输入（订单 + 模板 + 生成档案）
pub fn validate_release_inputs(
    order: &ProductionOrder,
    template: &ProcessTemplate,
    profile: &GenerationProfile,
) -> ApiResult<()> {
    validate_order(order)?;
    validate_template(template)?;
    if profile.include_steps.is_empty() {
        return Err(ApiError::ValidationError(format!(
            "生成档案 {} 的工序选择集为空",
            profile.profile_id
        )));
    }
    Ok(())
}
