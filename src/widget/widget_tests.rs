//! Tests for widgets, the selection stream and refresh tasks.

use super::*;
use crate::network::{FetchError, InterfaceAddress};
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use tokio_stream::StreamExt;

fn bind(name: &str, address: &str) -> InterfaceAddress {
    InterfaceAddress::new(name, address.parse().unwrap())
}

fn eth0() -> Vec<InterfaceAddress> {
    vec![bind("lo", "127.0.0.1"), bind("eth0", "10.0.0.9")]
}

fn wlan0() -> Vec<InterfaceAddress> {
    vec![bind("lo", "127.0.0.1"), bind("wlan0", "192.168.1.5")]
}

/// Fetcher that replays scripted results, repeating the last table forever.
struct ScriptedFetcher {
    script: Mutex<VecDeque<Result<Vec<InterfaceAddress>, FetchError>>>,
    last: Mutex<Vec<InterfaceAddress>>,
}

impl ScriptedFetcher {
    fn new(script: Vec<Result<Vec<InterfaceAddress>, FetchError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(vec![]),
        }
    }

    fn tables(tables: Vec<Vec<InterfaceAddress>>) -> Self {
        Self::new(tables.into_iter().map(Ok).collect())
    }
}

impl AddressFetcher for ScriptedFetcher {
    fn fetch(&self) -> Result<Vec<InterfaceAddress>, FetchError> {
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(table)) => {
                self.last.lock().unwrap().clone_from(&table);
                Ok(table)
            }
            Some(Err(e)) => Err(e),
            None => Ok(self.last.lock().unwrap().clone()),
        }
    }
}

/// Sink recording every update into shared storage.
#[derive(Clone, Default)]
struct RecordingSink {
    rendered: Arc<Mutex<Vec<DisplayText>>>,
}

impl RecordingSink {
    fn rendered(&self) -> Vec<DisplayText> {
        self.rendered.lock().unwrap().clone()
    }
}

impl DisplaySink for RecordingSink {
    fn render(&mut self, display: &DisplayText) -> io::Result<()> {
        self.rendered.lock().unwrap().push(display.clone());
        Ok(())
    }
}

/// Sink that always fails.
struct FailingSink;

impl DisplaySink for FailingSink {
    fn render(&mut self, _display: &DisplayText) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

mod factory {
    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut factory = WidgetFactory::new();

        let first = factory.create(ScriptedFetcher::tables(vec![]), RecordingSink::default());
        let second = factory.create(ScriptedFetcher::tables(vec![]), RecordingSink::default());

        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
        assert_eq!(factory.instance_count(), 2);
    }

    #[test]
    fn factories_count_independently() {
        let mut a = WidgetFactory::new();
        let mut b = WidgetFactory::default();

        let _ = a.create(ScriptedFetcher::tables(vec![]), RecordingSink::default());
        let _ = a.create(ScriptedFetcher::tables(vec![]), RecordingSink::default());
        let only = b.create(ScriptedFetcher::tables(vec![]), RecordingSink::default());

        assert_eq!(a.instance_count(), 2);
        assert_eq!(b.instance_count(), 1);
        assert_eq!(only.id(), 1);
    }

    #[test]
    fn debug_shows_id() {
        let mut factory = WidgetFactory::new();
        let widget = factory.create(ScriptedFetcher::tables(vec![]), RecordingSink::default());

        assert!(format!("{widget:?}").contains("id: 1"));
    }
}

mod refresh {
    use super::*;

    #[test]
    fn renders_found_address_with_interface_tooltip() {
        let sink = RecordingSink::default();
        let mut widget = WidgetFactory::new().create(ScriptedFetcher::tables(vec![eth0()]), sink.clone());

        let result = widget.refresh();

        assert_eq!(result, SelectionResult::found("10.0.0.9", "eth0"));
        assert_eq!(sink.rendered(), vec![DisplayText::new("10.0.0.9", "eth0")]);
    }

    #[test]
    fn renders_no_ip_found_for_loopback_only() {
        let sink = RecordingSink::default();
        let fetcher = ScriptedFetcher::tables(vec![vec![bind("lo", "127.0.0.1")]]);
        let mut widget = WidgetFactory::new().create(fetcher, sink.clone());

        assert_eq!(widget.refresh(), SelectionResult::NotFound);
        assert_eq!(sink.rendered(), vec![DisplayText::new("No IP found", "")]);
    }

    #[test]
    fn renders_no_ip_found_on_fetch_error() {
        let sink = RecordingSink::default();
        let fetcher = ScriptedFetcher::new(vec![Err(FetchError::Platform {
            message: "enumeration failed".to_string(),
        })]);
        let mut widget = WidgetFactory::new().create(fetcher, sink.clone());

        assert_eq!(widget.refresh(), SelectionResult::NotFound);
        assert_eq!(sink.rendered(), vec![DisplayText::new("No IP found", "")]);
    }

    #[test]
    fn render_failure_still_returns_selection() {
        let mut widget = WidgetFactory::new().create(ScriptedFetcher::tables(vec![eth0()]), FailingSink);

        assert_eq!(widget.refresh(), SelectionResult::found("10.0.0.9", "eth0"));
    }
}

mod selection_stream {
    use super::*;

    fn stream(fetcher: ScriptedFetcher, changes_only: bool) -> SelectionStream<ScriptedFetcher> {
        SelectionStream::new(
            InterfaceAddressSelector::new(fetcher),
            Duration::from_secs(4),
            changes_only,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn first_result_is_immediate() {
        let mut stream = stream(ScriptedFetcher::tables(vec![eth0()]), false);
        let start = tokio::time::Instant::now();

        let first = stream.next().await;

        assert_eq!(first, Some(SelectionResult::found("10.0.0.9", "eth0")));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn emits_every_tick_by_default() {
        let stream = stream(ScriptedFetcher::tables(vec![eth0()]), false);

        let results: Vec<_> = stream.take(3).collect().await;

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| *r == SelectionResult::found("10.0.0.9", "eth0")));
    }

    #[tokio::test(start_paused = true)]
    async fn changes_only_suppresses_repeats() {
        let fetcher = ScriptedFetcher::tables(vec![eth0(), eth0(), eth0(), wlan0()]);
        let mut stream = stream(fetcher, true);
        let start = tokio::time::Instant::now();

        assert_eq!(
            stream.next().await,
            Some(SelectionResult::found("10.0.0.9", "eth0"))
        );
        assert_eq!(
            stream.next().await,
            Some(SelectionResult::found("192.168.1.5", "wlan0"))
        );
        // Fourth fetch happens on the fourth tick
        assert_eq!(start.elapsed(), Duration::from_secs(12));
        assert_eq!(
            stream.last(),
            Some(&SelectionResult::found("192.168.1.5", "wlan0"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_error_yields_not_found_then_recovers() {
        let fetcher = ScriptedFetcher::new(vec![
            Err(FetchError::Platform {
                message: "transient".to_string(),
            }),
            Ok(eth0()),
        ]);
        let stream = stream(fetcher, false);

        let results: Vec<_> = stream.take(2).collect().await;

        assert_eq!(
            results,
            vec![
                SelectionResult::NotFound,
                SelectionResult::found("10.0.0.9", "eth0"),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn period_is_reported() {
        let stream = stream(ScriptedFetcher::tables(vec![]), false);
        assert_eq!(stream.period(), Duration::from_secs(4));
    }
}

mod refresh_task {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn renders_each_tick_until_cancelled() {
        let sink = RecordingSink::default();
        let widget = WidgetFactory::new().create(ScriptedFetcher::tables(vec![eth0()]), sink.clone());

        let handle = widget.spawn(Duration::from_secs(4), false);
        assert_eq!(handle.id(), 1);

        // Ticks at 0s, 4s and 8s
        tokio::time::sleep(Duration::from_secs(9)).await;
        handle.cancel().await.unwrap();

        let rendered = sink.rendered();
        assert_eq!(rendered.len(), 3);
        assert!(rendered.iter().all(|d| *d == DisplayText::new("10.0.0.9", "eth0")));

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(sink.rendered().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn changes_only_renders_transitions() {
        let sink = RecordingSink::default();
        let fetcher = ScriptedFetcher::tables(vec![eth0(), eth0(), wlan0(), wlan0(), eth0()]);
        let widget = WidgetFactory::new().create(fetcher, sink.clone());

        let handle = widget.spawn(Duration::from_secs(4), true);
        // Ticks at 0s, 4s, 8s, 12s and 16s
        tokio::time::sleep(Duration::from_secs(17)).await;
        handle.cancel().await.unwrap();

        assert_eq!(
            sink.rendered(),
            vec![
                DisplayText::new("10.0.0.9", "eth0"),
                DisplayText::new("192.168.1.5", "wlan0"),
                DisplayText::new("10.0.0.9", "eth0"),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handle_stops_rendering() {
        let sink = RecordingSink::default();
        let widget = WidgetFactory::new().create(ScriptedFetcher::tables(vec![eth0()]), sink.clone());

        let handle = widget.spawn(Duration::from_secs(4), false);
        tokio::time::sleep(Duration::from_secs(1)).await;
        drop(handle);

        let before = sink.rendered().len();
        tokio::time::sleep(Duration::from_secs(20)).await;

        assert_eq!(before, 1);
        assert_eq!(sink.rendered().len(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_a_running_task() {
        let widget =
            WidgetFactory::new().create(ScriptedFetcher::tables(vec![eth0()]), RecordingSink::default());
        let handle = widget.spawn(Duration::from_secs(4), false);

        assert!(!handle.is_finished());
        assert!(handle.cancel().await.is_ok());
    }
}
