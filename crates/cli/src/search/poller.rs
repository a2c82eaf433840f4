//! Result Poller: waits for an ad-hoc job's results.
//!
//! Each step is one results request: 200 ends the poll with results, 204
//! keeps waiting, anything else ends it with an error. The "still waiting"
//! line is rate-limited per poll invocation.

use std::time::{Duration, Instant};

use splunk_client::{JobState, ResultSet, ResultsPoll, SearchJob, SearchJobsClient};
use splunk_config::PollingConfig;
use tracing::{debug, info};

use crate::error::{AlertError, Operation};

/// Allows one log line per `interval`, measured from the last allowed line.
#[derive(Debug, Clone)]
pub struct WaitLogLimiter {
    interval: Duration,
    last_logged_at: Instant,
}

impl WaitLogLimiter {
    /// The first interval is measured from `started_at`.
    pub fn new(interval: Duration, started_at: Instant) -> Self {
        Self {
            interval,
            last_logged_at: started_at,
        }
    }

    pub fn should_log(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_logged_at) >= self.interval {
            self.last_logged_at = now;
            true
        } else {
            false
        }
    }
}

pub struct ResultPoller<'a> {
    transport: &'a SearchJobsClient,
    polling: &'a PollingConfig,
}

impl<'a> ResultPoller<'a> {
    pub fn new(transport: &'a SearchJobsClient, polling: &'a PollingConfig) -> Self {
        Self { transport, polling }
    }

    /// Poll `job` until its results are ready, it fails, or `max_wait` elapses.
    ///
    /// `job.state` is updated to `Complete` or `Failed` before returning.
    pub async fn poll(&self, job: &mut SearchJob) -> Result<ResultSet, AlertError> {
        let started_at = Instant::now();
        let mut limiter = WaitLogLimiter::new(self.polling.wait_log_interval, started_at);
        let mut requests: u64 = 0;

        loop {
            requests += 1;
            let outcome = self.transport.fetch_results(&job.sid).await;

            match outcome {
                Ok(ResultsPoll::Ready(results)) => {
                    job.state = JobState::Complete;
                    debug!(requests, "Job {} complete", job.sid);
                    info!(
                        count = results.len(),
                        "AdHoc Search results retrieved successfully."
                    );
                    for record in &results {
                        debug!("{}", record);
                    }
                    return Ok(results);
                }
                Ok(ResultsPoll::Pending) => {
                    let now = Instant::now();
                    if let Some(max_wait) = self.polling.max_wait
                        && now.saturating_duration_since(started_at) >= max_wait
                    {
                        job.state = JobState::Failed;
                        return Err(AlertError::PollTimeout {
                            sid: job.sid.clone(),
                            waited: max_wait,
                        });
                    }

                    if limiter.should_log(now) {
                        info!("Waiting for AdHoc Search results...");
                    }

                    if self.polling.poll_interval.is_zero() {
                        tokio::task::yield_now().await;
                    } else {
                        tokio::time::sleep(self.polling.poll_interval).await;
                    }
                }
                Err(e) => {
                    job.state = JobState::Failed;
                    return Err(AlertError::from_client(Operation::FetchResults, e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::logging::capture::capture;
    use crate::test_support::{jobs_client, results_path};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SID: &str = "1700000000.42";
    const WAITING: &str = "INFO Waiting for AdHoc Search results...";

    fn polling(wait_log_interval: Duration, max_wait: Option<Duration>) -> PollingConfig {
        PollingConfig {
            max_wait,
            poll_interval: Duration::ZERO,
            wait_log_interval,
        }
    }

    /// Two 204s then a 200 with two rows.
    async fn mount_two_pending_then_ready(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path(results_path(SID)))
            .respond_with(ResponseTemplate::new(204))
            .up_to_n_times(2)
            .with_priority(1)
            .expect(2)
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path(results_path(SID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{"host": "a"}, {"host": "b"}]
            })))
            .with_priority(2)
            .expect(1)
            .mount(server)
            .await;
    }

    #[test]
    fn test_limiter_first_interval_measured_from_start() {
        let start = Instant::now();
        let mut limiter = WaitLogLimiter::new(Duration::from_secs(30), start);

        assert!(!limiter.should_log(start));
        assert!(!limiter.should_log(start + Duration::from_secs(29)));
        assert!(limiter.should_log(start + Duration::from_secs(30)));
    }

    #[test]
    fn test_limiter_measures_from_last_log() {
        let start = Instant::now();
        let mut limiter = WaitLogLimiter::new(Duration::from_secs(30), start);

        assert!(limiter.should_log(start + Duration::from_secs(45)));
        assert!(!limiter.should_log(start + Duration::from_secs(70)));
        assert!(limiter.should_log(start + Duration::from_secs(75)));
        assert!(limiter.should_log(start + Duration::from_secs(200)));
    }

    #[test]
    fn test_limiter_zero_interval_always_logs() {
        let start = Instant::now();
        let mut limiter = WaitLogLimiter::new(Duration::ZERO, start);
        assert!(limiter.should_log(start));
        assert!(limiter.should_log(start));
    }

    #[tokio::test]
    async fn test_pending_then_ready_within_interval() {
        let server = MockServer::start().await;
        mount_two_pending_then_ready(&server).await;

        let transport = jobs_client(&server);
        let config = polling(Duration::from_secs(30), Some(Duration::from_secs(60)));
        let mut job = SearchJob::new(SID);

        let (logs, _guard) = capture();
        let results = ResultPoller::new(&transport, &config)
            .poll(&mut job)
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(job.state, JobState::Complete);
        assert!(logs.count_starting_with(WAITING) <= 1);
        assert!(logs.contains("INFO AdHoc Search results retrieved successfully. count=2"));
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_pending_logs_each_time_when_interval_elapsed() {
        let server = MockServer::start().await;
        mount_two_pending_then_ready(&server).await;

        let transport = jobs_client(&server);
        let config = polling(Duration::ZERO, None);
        let mut job = SearchJob::new(SID);

        let (logs, _guard) = capture();
        ResultPoller::new(&transport, &config)
            .poll(&mut job)
            .await
            .unwrap();

        assert_eq!(logs.count_starting_with(WAITING), 2);
    }

    #[tokio::test]
    async fn test_error_status_stops_polling() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(results_path(SID)))
            .respond_with(ResponseTemplate::new(500).set_body_string("search process died"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = jobs_client(&server);
        let config = polling(Duration::from_secs(30), None);
        let mut job = SearchJob::new(SID);

        let err = ResultPoller::new(&transport, &config)
            .poll(&mut job)
            .await
            .unwrap_err();

        assert_eq!(job.state, JobState::Failed);
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(
            err.to_string(),
            "Failed to fetch AdHoc Search results: 500, search process died"
        );
    }

    #[tokio::test]
    async fn test_bounded_wait_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(results_path(SID)))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let transport = jobs_client(&server);
        let config = PollingConfig {
            max_wait: Some(Duration::from_millis(200)),
            poll_interval: Duration::from_millis(20),
            wait_log_interval: Duration::from_secs(30),
        };
        let mut job = SearchJob::new(SID);

        let err = ResultPoller::new(&transport, &config)
            .poll(&mut job)
            .await
            .unwrap_err();

        assert!(matches!(err, AlertError::PollTimeout { .. }));
        assert_eq!(job.state, JobState::Failed);
        assert!(err.to_string().contains(SID));
    }
}
