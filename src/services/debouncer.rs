use log::{debug, error, info};
use std::future::Future;
use std::time::Duration;
use tokio::select;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{sleep, Instant};

/// Runs `handler` with the last submitted value once no new value has
/// arrived for `quiet_period`. Every submission resets the timer, measured
/// from the moment [`Debouncer::call`] was made.
///
/// Handlers run on their own tasks so input keeps being timed while one is
/// still in flight. Stopping the debouncer aborts handlers that have not
/// finished.
pub struct Debouncer<T> {
    input_tx: mpsc::UnboundedSender<(Instant, T)>,
    stop_tx: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl<T> Debouncer<T>
where
    T: Send + 'static,
{
    pub fn spawn<F, Fut>(quiet_period: Duration, handler: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (input_tx, mut input_rx) = mpsc::unbounded_channel::<(Instant, T)>();
        let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);

        let handle = tokio::spawn(async move {
            let mut pending: Option<T> = None;
            let mut in_flight = JoinSet::new();
            let timer = sleep(quiet_period);
            tokio::pin!(timer);

            loop {
                select! {
                    biased;

                    _ = stop_rx.recv() => {
                        debug!(
                            "Debouncer stopped, dropping pending input: {}, aborting {} running handler(s)",
                            pending.is_some(),
                            in_flight.len()
                        );
                        break;
                    }
                    received = input_rx.recv() => match received {
                        Some((submitted_at, value)) => {
                            pending = Some(value);
                            timer.as_mut().reset(submitted_at + quiet_period);
                        }
                        None => break,
                    },
                    _ = &mut timer, if pending.is_some() => {
                        if let Some(value) = pending.take() {
                            in_flight.spawn(handler(value));
                        }
                    }
                    Some(finished) = in_flight.join_next(), if !in_flight.is_empty() => {
                        if let Err(e) = finished {
                            error!("Debounced handler ended abnormally: {}", e);
                        }
                    }
                }
            }

            in_flight.shutdown().await;
        });

        info!("Debouncer started with a {:?} quiet period", quiet_period);

        Self {
            input_tx,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Submit a value, cancelling any value still waiting for the timer
    pub fn call(&self, value: T) {
        if self.input_tx.send((Instant::now(), value)).is_err() {
            error!("Debouncer is no longer running, input dropped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the background task; input still waiting for the timer is dropped
    pub async fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(()).await;
        }

        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                error!("Debouncer task ended abnormally: {}", e);
            }
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_debouncer(quiet_period: Duration) -> (Debouncer<String>, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let calls_clone = calls.clone();

        let debouncer = Debouncer::spawn(quiet_period, move |value: String| {
            let calls = calls_clone.clone();
            async move {
                calls.lock().unwrap().push(value);
            }
        });

        (debouncer, calls)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_triggers_one_call_with_last_value() {
        let (debouncer, calls) = recording_debouncer(Duration::from_millis(300));

        for value in ["1", "12", "123", "1234"] {
            debouncer.call(value.to_string());
            sleep(Duration::from_millis(100)).await;
        }
        sleep(Duration::from_millis(1000)).await;

        assert_eq!(*calls.lock().unwrap(), vec!["1234".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_fires_before_quiet_period() {
        let (debouncer, calls) = recording_debouncer(Duration::from_millis(300));

        debouncer.call("5".to_string());
        sleep(Duration::from_millis(299)).await;
        assert!(calls.lock().unwrap().is_empty());

        sleep(Duration::from_millis(10)).await;
        assert_eq!(*calls.lock().unwrap(), vec!["5".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separated_inputs_fire_separately() {
        let (debouncer, calls) = recording_debouncer(Duration::from_millis(300));

        debouncer.call("1".to_string());
        sleep(Duration::from_millis(500)).await;
        debouncer.call("2".to_string());
        sleep(Duration::from_millis(500)).await;

        assert_eq!(*calls.lock().unwrap(), vec!["1".to_string(), "2".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_drops_pending_input() {
        let (mut debouncer, calls) = recording_debouncer(Duration::from_millis(300));

        debouncer.call("7".to_string());
        sleep(Duration::from_millis(100)).await;
        debouncer.stop().await;
        sleep(Duration::from_millis(1000)).await;

        assert!(calls.lock().unwrap().is_empty());
        assert!(!debouncer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_during_slow_handler_is_timed_from_submission() {
        let start = Instant::now();
        let fired = Arc::new(Mutex::new(Vec::new()));
        let fired_clone = fired.clone();

        let debouncer = Debouncer::spawn(Duration::from_millis(300), move |value: String| {
            let fired = fired_clone.clone();
            async move {
                fired.lock().unwrap().push((value, start.elapsed().as_millis()));
                sleep(Duration::from_millis(500)).await;
            }
        });

        debouncer.call("5".to_string());
        sleep(Duration::from_millis(350)).await;
        debouncer.call("50".to_string());
        sleep(Duration::from_millis(1500)).await;

        assert_eq!(
            *fired.lock().unwrap(),
            vec![("5".to_string(), 300), ("50".to_string(), 650)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_aborts_running_handler() {
        let finished = Arc::new(Mutex::new(false));
        let finished_clone = finished.clone();

        let mut debouncer = Debouncer::spawn(Duration::from_millis(300), move |_: String| {
            let finished = finished_clone.clone();
            async move {
                sleep(Duration::from_millis(500)).await;
                *finished.lock().unwrap() = true;
            }
        });

        debouncer.call("1".to_string());
        sleep(Duration::from_millis(400)).await;
        debouncer.stop().await;
        sleep(Duration::from_secs(1)).await;

        assert!(!*finished.lock().unwrap());
    }
}
