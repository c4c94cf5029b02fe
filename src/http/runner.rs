use std::time::{Duration, Instant};

use reqwest::Client;

use crate::error::{AppError, AppResult, HttpError};

use super::request::RequestDescriptor;

/// Upper bound on the sample buffer reserved up front.
const MAX_PREALLOCATED_SAMPLES: usize = 4096;

/// How many requests to send and how long to pause after each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPlan {
    pub nreqs: u64,
    pub wait: Option<Duration>,
}

/// Sends `descriptor` `plan.nreqs` times, one after another, and returns the delay of
/// each request in microseconds.
///
/// A delay spans from sending the request to receiving the response headers. When
/// `plan.wait` is set the loop sleeps after every request, including the last.
///
/// # Errors
///
/// The first failed request aborts the loop; samples from this batch are discarded.
pub async fn run_requests(
    client: &Client,
    descriptor: &RequestDescriptor,
    plan: RunPlan,
) -> AppResult<Vec<u64>> {
    let capacity = usize::try_from(plan.nreqs).map_or(MAX_PREALLOCATED_SAMPLES, |n| {
        n.min(MAX_PREALLOCATED_SAMPLES)
    });
    let mut delays = Vec::with_capacity(capacity);

    for index in 1..=plan.nreqs {
        let request = descriptor.to_request(client)?;
        let started = Instant::now();
        let response = client
            .execute(request)
            .await
            .map_err(|err| request_failed(index, plan.nreqs, err))?;
        let delay_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

        let status = response.status();
        response
            .bytes()
            .await
            .map_err(|err| request_failed(index, plan.nreqs, err))?;
        tracing::trace!(
            "request {}/{}: status {} in {}us",
            index,
            plan.nreqs,
            status,
            delay_us
        );
        delays.push(delay_us);

        if let Some(wait) = plan.wait {
            tokio::time::sleep(wait).await;
        }
    }

    Ok(delays)
}

fn request_failed(index: u64, total: u64, source: reqwest::Error) -> AppError {
    AppError::http(HttpError::RequestFailed {
        index,
        total,
        source,
    })
}
