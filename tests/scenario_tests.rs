use debtplan::application::engine::PayoffEngine;
use debtplan::domain::debt::Debt;
use debtplan::domain::ledger::PlanStatus;
use debtplan::domain::strategy::Strategy;
use debtplan::error::{PayoffError, ValidationError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn two_debts(first_rate: Decimal, second_rate: Decimal) -> Vec<Debt> {
    vec![
        Debt::new("D1", dec!(500), first_rate, dec!(50)),
        Debt::new("D2", dec!(1000), second_rate, dec!(50)),
    ]
}

#[test]
fn test_single_interest_free_debt_takes_twelve_months() {
    let debts = vec![Debt::new("D1", dec!(1200), dec!(0), dec!(100))];
    let plan = PayoffEngine::plan(&debts, Strategy::Snowball, dec!(0)).unwrap();

    assert_eq!(plan.months(), 12);
    assert_eq!(plan.status, PlanStatus::Done);
    assert_eq!(plan.remaining_balances(), vec![("D1".to_string(), dec!(0))]);
    assert_eq!(plan.total_interest(), dec!(0));
    for record in &plan.records {
        assert_eq!(record.total_payment, dec!(100));
    }
}

#[test]
fn test_snowball_retires_smaller_balance_first_and_rolls_its_pool() {
    let debts = two_debts(dec!(20), dec!(10));
    let plan = PayoffEngine::plan(&debts, Strategy::Snowball, dec!(100)).unwrap();

    let d1_done = plan.payoff_month("D1").unwrap();
    let d2_done = plan.payoff_month("D2").unwrap();
    assert!(d1_done < d2_done);
    assert_eq!((d1_done, d2_done), (4, 9));

    // In D1's final month the pool it did not need goes to D2.
    let record = &plan.records[d1_done as usize - 1];
    let d1 = record.debt("D1").unwrap();
    let d2 = record.debt("D2").unwrap();
    let consumed_by_d1 = (d1.payment - (d1.interest + dec!(50))).max(Decimal::ZERO);
    assert_eq!(d2.payment, dec!(50) + dec!(100) - consumed_by_d1);
    assert!(d2.payment > dec!(100));

    // From the next month on D2 alone receives the minimum plus the whole pool.
    let next = &plan.records[d1_done as usize];
    assert_eq!(next.debt("D1").unwrap().payment, dec!(0));
    assert_eq!(next.debt("D2").unwrap().payment, dec!(150));
}

#[test]
fn test_avalanche_matches_snowball_when_smaller_debt_has_higher_rate() {
    let debts = two_debts(dec!(20), dec!(10));
    let snowball = PayoffEngine::plan(&debts, Strategy::Snowball, dec!(100)).unwrap();
    let avalanche = PayoffEngine::plan(&debts, Strategy::Avalanche, dec!(100)).unwrap();

    assert_eq!(avalanche.order, vec!["D1", "D2"]);
    assert_eq!(snowball.records, avalanche.records);
}

#[test]
fn test_strategies_diverge_when_larger_debt_has_higher_rate() {
    let debts = two_debts(dec!(10), dec!(20));
    let snowball = PayoffEngine::plan(&debts, Strategy::Snowball, dec!(100)).unwrap();
    let avalanche = PayoffEngine::plan(&debts, Strategy::Avalanche, dec!(100)).unwrap();

    assert_eq!(snowball.order, vec!["D1", "D2"]);
    assert_eq!(avalanche.order, vec!["D2", "D1"]);

    // Month one: the pool goes to the first debt in priority order.
    assert_eq!(snowball.records[0].debt("D1").unwrap().payment, dec!(150));
    assert_eq!(avalanche.records[0].debt("D2").unwrap().payment, dec!(150));

    assert_eq!(snowball.months(), 10);
    assert_eq!(avalanche.months(), 8);
    assert!(avalanche.total_interest() < snowball.total_interest());
    assert_eq!(snowball.total_interest().round_dp(2), dec!(113.49));
    assert_eq!(avalanche.total_interest().round_dp(2), dec!(88.57));
}

#[test]
fn test_empty_portfolio_produces_no_plan() {
    let result = PayoffEngine::plan(&[], Strategy::Avalanche, dec!(0));

    assert!(matches!(
        result,
        Err(PayoffError::ValidationError(ValidationError::EmptyPortfolio))
    ));
}

#[test]
fn test_uncovered_interest_without_extra_produces_no_plan() {
    let debts = vec![Debt::new("D1", dec!(6000), dec!(24), dec!(120))];
    let result = PayoffEngine::plan(&debts, Strategy::Snowball, dec!(0));

    match result {
        Err(PayoffError::ValidationError(err)) => {
            assert_eq!(err.debt(), Some("D1"));
            assert_eq!(err.field(), "min_payment");
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn test_caller_debts_are_not_mutated() {
    let debts = two_debts(dec!(20), dec!(10));
    let before = debts.clone();
    PayoffEngine::plan(&debts, Strategy::Snowball, dec!(100)).unwrap();

    assert_eq!(debts, before);
}
