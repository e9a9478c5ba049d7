use super::GENERATION_DELAY_MS;
use contracts::domain::a002_assessment::Assessment;
use contracts::usecases::common::UseCaseResult;
use contracts::usecases::u102_generate_assessment::generated_assessment;
use gloo_timers::future::TimeoutFuture;

/// Produce one "generated" assessment after the fixed delay.
///
/// The delay is the entire simulation; there is no model behind it and
/// the record content is fixed. Always returns `Ok` today.
pub async fn generate_assessment() -> UseCaseResult<Assessment> {
    TimeoutFuture::new(GENERATION_DELAY_MS).await;
    Ok(generated_assessment())
}
