// ==========================================
// JobCardGenerator 引擎集成测试
// ==========================================
// 测试范围:
// 1. 工序选择与模板顺序保持
// 2. 线性依赖链与初始状态
// 3. 确定性工单标识
// 4. 工时估算与派生辅助
// ==========================================


use chrono::Duration;

use assembly_flow::config::GenerationProfile;
use assembly_flow::domain::types::{JobCardRole, JobCardStatus};
use assembly_flow::engine::{
    JobCardGenerator, DEFAULT_CYCLE_TIME_MIN_PER_UNIT, DEFAULT_SETUP_TIME_MIN,
};
use test_helpers::{create_test_order, create_test_template, test_now};

// ==========================================
// 工序选择
// ==========================================

#[test]
fn test_generates_one_card_per_selected_step() {
    let order = create_test_order("MO001", 10);
    let template = create_test_template();
    // 选择集乱序给出: 生成顺序仍按模板顺序
    let profile = GenerationProfile::with_steps(vec![40, 10, 20]);

    let cards = JobCardGenerator::new().generate(&order, &template, &profile, test_now());

    assert_eq!(cards.len(), 3);
    assert_eq!(
        cards.iter().map(|c| c.step_no).collect::<Vec<_>>(),
        vec![10, 20, 40]
    );
}

#[test]
fn test_unknown_step_numbers_are_silently_filtered() {
    let order = create_test_order("MO001", 10);
    let template = create_test_template();
    let profile = GenerationProfile::with_steps(vec![10, 99, 120]);

    let cards = JobCardGenerator::new().generate(&order, &template, &profile, test_now());

    // 99/120 不在模板中: 无对应工单,也不报错
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].step_no, 10);
}

#[test]
fn test_empty_selection_yields_no_cards() {
    let order = create_test_order("MO001", 10);
    let template = create_test_template();
    let profile = GenerationProfile::with_steps(vec![]);

    let cards = JobCardGenerator::new().generate(&order, &template, &profile, test_now());
    assert!(cards.is_empty());
}

// ==========================================
// 依赖链与初始状态
// ==========================================

#[test]
fn test_linear_dependency_chain() {
    let order = create_test_order("MO001", 10);
    let template = create_test_template();
    let profile = GenerationProfile::with_steps(vec![10, 20, 30, 40]);

    let cards = JobCardGenerator::new().generate(&order, &template, &profile, test_now());

    // 首序: 无依赖,READY
    assert!(cards[0].depends_on.is_empty());
    assert!(cards[0].blocked_by.is_empty());
    assert_eq!(cards[0].status, JobCardStatus::Ready);
    assert!(cards[0].can_start());

    // 其余: 单前序,BLOCKED,blocked_by 等于 depends_on
    for i in 1..cards.len() {
        assert_eq!(cards[i].depends_on, vec![cards[i - 1].job_card_id.clone()]);
        assert_eq!(cards[i].blocked_by, cards[i].depends_on);
        assert_eq!(cards[i].status, JobCardStatus::Blocked);
        assert!(!cards[i].can_start());
    }
}

#[test]
fn test_role_and_child_part_stamped_from_template() {
    let order = create_test_order("MO001", 10);
    let template = create_test_template();
    let profile = GenerationProfile::with_steps(vec![10, 40, 50]);

    let cards = JobCardGenerator::new().generate(&order, &template, &profile, test_now());

    assert_eq!(cards[0].role, JobCardRole::ChildPartStep);
    assert_eq!(cards[0].child_part_id.as_deref(), Some("CP-1"));
    assert_eq!(cards[1].role, JobCardRole::AssemblyStep);
    assert!(cards[1].child_part_id.is_none());
    assert_eq!(cards[2].role, JobCardRole::QcStep);
}

// ==========================================
// 确定性标识
// ==========================================

#[test]
fn test_ids_are_deterministic_across_generations() {
    let order = create_test_order("MO001", 10);
    let template = create_test_template();
    let profile = GenerationProfile::with_steps(vec![10, 20]);
    let generator = JobCardGenerator::new();

    let first = generator.generate(&order, &template, &profile, test_now());
    let second = generator.generate(&order, &template, &profile, test_now());

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.job_card_id, b.job_card_id);
        assert_eq!(a.job_card_no, b.job_card_no);
    }
    assert_eq!(first[0].job_card_id, JobCardGenerator::job_card_id("MO001", 10));
}

// ==========================================
// 数量与派工初始化
// ==========================================

#[test]
fn test_quantities_and_assignment_initialization() {
    let order = create_test_order("MO001", 25);
    let template = create_test_template();
    let mut profile = GenerationProfile::with_steps(vec![10, 20]);
    // auto_assign 打开也不落机台: 派工属外部调度层
    profile.auto_assign = true;

    let cards = JobCardGenerator::new().generate(&order, &template, &profile, test_now());

    for card in &cards {
        assert_eq!(card.target_qty, 25);
        assert_eq!(card.completed_qty, 0);
        assert_eq!(card.rejected_qty, 0);
        assert_eq!(card.reworked_qty, 0);
        assert_eq!(card.in_progress_qty, 0);
        assert!(card.quantities_consistent());
        assert!(card.machine_code.is_none());
        assert!(card.operator_id.is_none());
        assert!(card.actual_time_min.is_none());
    }
}

// ==========================================
// 工时估算
// ==========================================

#[test]
fn test_estimated_time_uses_default_constants() {
    let quantity = 10;
    let order = create_test_order("MO001", quantity);
    let template = create_test_template();
    let profile = GenerationProfile::with_steps(vec![10, 20]);

    let cards = JobCardGenerator::new().generate(&order, &template, &profile, test_now());

    let expected = DEFAULT_SETUP_TIME_MIN + DEFAULT_CYCLE_TIME_MIN_PER_UNIT * i64::from(quantity);
    for card in &cards {
        assert_eq!(card.setup_time_min, DEFAULT_SETUP_TIME_MIN);
        assert_eq!(card.cycle_time_min_per_unit, DEFAULT_CYCLE_TIME_MIN_PER_UNIT);
        assert_eq!(card.estimated_total_time_min, expected);
    }
}

#[test]
fn test_estimated_time_honors_profile_overrides() {
    let order = create_test_order("MO001", 10);
    let template = create_test_template();
    let mut profile = GenerationProfile::with_steps(vec![10]);
    profile.parameters.setup_time_min = Some(5);
    profile.parameters.cycle_time_min_per_unit = Some(12);

    let cards = JobCardGenerator::new().generate(&order, &template, &profile, test_now());

    assert_eq!(cards[0].estimated_total_time_min, 5 + 12 * 10);
}

#[test]
fn test_total_time_and_expected_completion() {
    let order = create_test_order("MO001", 10);
    let template = create_test_template();
    let profile = GenerationProfile::with_steps(vec![10, 20, 30]);
    let generator = JobCardGenerator::new();
    let now = test_now();

    let cards = generator.generate(&order, &template, &profile, now);

    // 3 张工单 × (15 + 30×10) = 945 分钟
    let total = generator.total_estimated_time(&cards);
    assert_eq!(total, 3 * (15 + 30 * 10));
    assert_eq!(
        generator.expected_completion(&cards, now),
        now + Duration::minutes(total)
    );
}
