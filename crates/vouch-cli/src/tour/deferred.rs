//! Deferred values: cases that await before asserting

use std::time::Duration;
use vouch_runtime::prelude::*;

pub fn register(registry: &mut Registry) {
    registry
        .register_async("Deferred values", deferred_value)
        .register_async("Joining deferred values", joining)
        .register_async("Rejected deferred values", rejected);
}

async fn deferred_value() -> CaseResult {
    let value = delayed_value(1, Duration::from_millis(50)).await;
    assert_equal(value, 1)?;
    Ok(())
}

async fn settle(value: i32, ms: u64) -> Result<i32, CaseError> {
    Ok(delayed_value(value, Duration::from_millis(ms)).await)
}

async fn joining() -> CaseResult {
    // Results keep input order, not completion order
    let values = join_all([settle(1, 30), settle(2, 10), settle(3, 1)]).await?;
    assert_deep_equal(values, [1, 2, 3])?;
    Ok(())
}

async fn rejected() -> CaseResult {
    assert_rejects(delayed_rejection::<i32>("not today", Duration::from_millis(5))).await?;
    Ok(())
}
