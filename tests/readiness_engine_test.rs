// ==========================================
// ReadinessEvaluator 引擎集成测试
// ==========================================
// 测试范围:
// 1. 齐套判定与齐套率
// 2. 延期天数计算
// 3. 阻塞原因与预计总装开始
// 4. 零子件边界
// ==========================================


use chrono::Duration;

use assembly_flow::domain::types::ChildPartStatus;
use assembly_flow::engine::ReadinessEvaluator;
use test_helpers::{create_test_child_part, test_now};

// ==========================================
// 齐套判定
// ==========================================

#[test]
fn test_all_ready_is_fully_ready() {
    let now = test_now();
    let parts = vec![
        create_test_child_part("CP-1", ChildPartStatus::ReadyForAssembly, now - Duration::days(1)),
        create_test_child_part("CP-2", ChildPartStatus::ReadyForAssembly, now - Duration::days(2)),
        create_test_child_part("CP-3", ChildPartStatus::ReadyForAssembly, now),
    ];

    let report = ReadinessEvaluator::new().evaluate("MO001", &parts, now);

    assert!(report.is_ready);
    assert!(report.can_start_assembly());
    assert_eq!(report.readiness_pct, 100);
    assert_eq!(report.ready_items.len(), 3);
    assert!(report.blocking_items.is_empty());
    assert!(report.blocked_reason().is_none());
}

#[test]
fn test_one_of_four_blocking() {
    let now = test_now();
    let parts = vec![
        create_test_child_part("CP-1", ChildPartStatus::ReadyForAssembly, now),
        create_test_child_part("CP-2", ChildPartStatus::ReadyForAssembly, now),
        create_test_child_part("CP-3", ChildPartStatus::ReadyForAssembly, now),
        create_test_child_part("CP-4", ChildPartStatus::QualityCheck, now + Duration::days(2)),
    ];

    let report = ReadinessEvaluator::new().evaluate("MO001", &parts, now);

    assert!(!report.is_ready);
    assert!(!report.can_start_assembly());
    assert_eq!(report.readiness_pct, 75);
    assert_eq!(report.blocking_items.len(), 1);
    assert_eq!(report.blocking_items[0].child_part_id, "CP-4");
    assert_eq!(report.blocking_items[0].status, ChildPartStatus::QualityCheck);
    // 未到期: 无延期
    assert!(report.blocking_items[0].delay_days.is_none());

    // 单个阻塞: 单数句式,含子件名称
    let reason = report.blocked_reason().unwrap();
    assert!(reason.contains("子件-CP-4"));
}

// ==========================================
// 延期计算
// ==========================================

#[test]
fn test_delay_days_five_days_overdue() {
    let now = test_now();
    let parts = vec![create_test_child_part(
        "CP-1",
        ChildPartStatus::InProduction,
        now - Duration::days(5),
    )];

    let report = ReadinessEvaluator::new().evaluate("MO001", &parts, now);

    assert_eq!(report.blocking_items[0].delay_days, Some(5));
}

#[test]
fn test_delay_days_future_is_none() {
    let now = test_now();
    let parts = vec![create_test_child_part(
        "CP-1",
        ChildPartStatus::Pending,
        now + Duration::days(3),
    )];

    let report = ReadinessEvaluator::new().evaluate("MO001", &parts, now);

    assert!(report.blocking_items[0].delay_days.is_none());
}

// ==========================================
// 阻塞原因与预计总装开始
// ==========================================

#[test]
fn test_blocked_reason_lists_multiple_parts() {
    let now = test_now();
    let parts = vec![
        create_test_child_part("CP-1", ChildPartStatus::InProduction, now + Duration::days(1)),
        create_test_child_part("CP-2", ChildPartStatus::Pending, now + Duration::days(2)),
        create_test_child_part("CP-3", ChildPartStatus::QualityCheck, now + Duration::days(3)),
    ];

    let report = ReadinessEvaluator::new().evaluate("MO001", &parts, now);

    let reason = report.blocked_reason().unwrap();
    assert!(reason.contains('3'));
    assert!(reason.contains("子件-CP-1, 子件-CP-2, 子件-CP-3"));
}

#[test]
fn test_expected_assembly_start_adds_buffer_day() {
    let now = test_now();
    let latest = now + Duration::days(6);
    let parts = vec![
        create_test_child_part("CP-1", ChildPartStatus::ReadyForAssembly, now + Duration::days(2)),
        create_test_child_part("CP-2", ChildPartStatus::InProduction, latest),
    ];

    let evaluator = ReadinessEvaluator::new();
    assert_eq!(
        evaluator.expected_assembly_start(&parts),
        Some(latest + Duration::days(1))
    );
}

// ==========================================
// 零子件边界
// ==========================================

#[test]
fn test_zero_child_parts_never_ready() {
    let now = test_now();
    let evaluator = ReadinessEvaluator::new();

    let report = evaluator.evaluate("MO001", &[], now);

    assert!(!report.is_ready);
    assert_eq!(report.readiness_pct, 0);
    assert!(report.ready_items.is_empty());
    assert!(report.blocking_items.is_empty());
    assert!(evaluator.expected_assembly_start(&[]).is_none());
}
