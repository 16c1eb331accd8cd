use crate::errors::AllServicesFailed;
use crate::services::CounterService;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Get,
    Increment,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Get => "get",
            Action::Increment => "increment",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    pub value: i64,
    pub service: &'static str,
}

pub struct ServicePool {
    services: Vec<Box<dyn CounterService>>,
    active: AtomicUsize,
}

impl ServicePool {
    pub fn new(services: Vec<Box<dyn CounterService>>) -> Self {
        Self {
            services,
            active: AtomicUsize::new(0),
        }
    }

    pub async fn get_count(&self) -> Result<Outcome, AllServicesFailed> {
        self.attempt(Action::Get).await
    }

    pub async fn increment(&self) -> Result<Outcome, AllServicesFailed> {
        self.attempt(Action::Increment).await
    }

    // Linear scan starting from the last service that answered; the winner
    // becomes the starting point for the next action.
    async fn attempt(&self, action: Action) -> Result<Outcome, AllServicesFailed> {
        let attempts = self.services.len();
        let start = self.active.load(Ordering::Relaxed);

        for offset in 0..attempts {
            let index = (start + offset) % attempts;
            let service = &self.services[index];

            let result = match action {
                Action::Get => service.get_count().await,
                Action::Increment => service.increment().await,
            };

            match result {
                Ok(value) => {
                    self.active.store(index, Ordering::Relaxed);
                    return Ok(Outcome {
                        value,
                        service: service.name(),
                    });
                }
                Err(err) => {
                    error!("like service {} {} failed: {err}", service.name(), action.as_str());
                }
            }
        }

        Err(AllServicesFailed {
            action: action.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ServiceError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    struct FakeService {
        name: &'static str,
        calls: Arc<AtomicUsize>,
        results: Mutex<VecDeque<Result<i64, ServiceError>>>,
    }

    impl FakeService {
        fn next(&self) -> Result<i64, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(ServiceError::UnexpectedPayload {
                    service: self.name,
                    action: "get",
                }))
        }
    }

    #[async_trait]
    impl CounterService for FakeService {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn get_count(&self) -> Result<i64, ServiceError> {
            self.next()
        }

        async fn increment(&self) -> Result<i64, ServiceError> {
            self.next()
        }
    }

    fn service(
        name: &'static str,
        results: Vec<Result<i64, ServiceError>>,
    ) -> (Box<dyn CounterService>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let fake = FakeService {
            name,
            calls: calls.clone(),
            results: Mutex::new(results.into()),
        };
        (Box::new(fake), calls)
    }

    fn status_err(name: &'static str) -> ServiceError {
        ServiceError::Status {
            service: name,
            action: "get",
            status: 500,
        }
    }

    #[tokio::test]
    async fn falls_back_and_remembers_the_working_service() {
        let (a, a_calls) = service("a", vec![Err(status_err("a"))]);
        let (b, b_calls) = service("b", vec![Ok(7), Ok(8)]);
        let pool = ServicePool::new(vec![a, b]);

        let first = pool.get_count().await.unwrap();
        assert_eq!(first.value, 7);
        assert_eq!(first.service, "b");

        let second = pool.get_count().await.unwrap();
        assert_eq!(second.value, 8);
        assert_eq!(second.service, "b");

        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
        assert_eq!(b_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn wraps_around_when_the_active_service_stops_answering() {
        let (a, a_calls) = service("a", vec![Err(status_err("a")), Ok(3)]);
        let (b, _) = service("b", vec![Ok(1), Err(status_err("b"))]);
        let pool = ServicePool::new(vec![a, b]);

        let first = pool.get_count().await.unwrap();
        assert_eq!(first.service, "b");
        assert_eq!(first.value, 1);

        let second = pool.get_count().await.unwrap();
        assert_eq!(second.service, "a");
        assert_eq!(second.value, 3);
        assert_eq!(a_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn reports_when_every_service_fails() {
        let (a, _) = service("a", vec![]);
        let (b, _) = service("b", vec![]);
        let pool = ServicePool::new(vec![a, b]);

        let err = pool.increment().await.unwrap_err();
        assert_eq!(err.to_string(), "all like services failed to increment");
    }
}
