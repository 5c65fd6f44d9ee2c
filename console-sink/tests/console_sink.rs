use futures::FutureExt;
use std::sync::{Arc, Mutex};
use std::thread;
use workflow_console_sink::prelude::*;
use workflow_console_sink::Error;

#[derive(Debug, Clone, PartialEq)]
struct Call {
    channel: Channel,
    message: String,
    args: Vec<Argument>,
}

#[derive(Default)]
struct RecordingConsole {
    calls: Mutex<Vec<Call>>,
}

impl RecordingConsole {
    fn record(&self, channel: Channel, message: &str, args: &[Argument]) {
        self.calls.lock().unwrap().push(Call {
            channel,
            message: message.to_string(),
            args: args.to_vec(),
        });
    }

    fn calls_on(&self, channel: Channel) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.channel == channel)
            .cloned()
            .collect()
    }

    fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn reset(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Console for RecordingConsole {
    fn debug(&self, message: &str, args: &[Argument]) {
        self.record(Channel::Debug, message, args);
    }
    fn log(&self, message: &str, args: &[Argument]) {
        self.record(Channel::Log, message, args);
    }
    fn warn(&self, message: &str, args: &[Argument]) {
        self.record(Channel::Warn, message, args);
    }
    fn error(&self, message: &str, args: &[Argument]) {
        self.record(Channel::Error, message, args);
    }
}

fn terminal_sink(include_metadata: bool) -> (Arc<RecordingConsole>, ConsoleSink) {
    let console = Arc::new(RecordingConsole::default());
    let sink = ConsoleSink::with_options(
        console.clone(),
        Options::default()
            .with_include_metadata(include_metadata)
            .with_environment(Environment::Terminal),
    );
    (console, sink)
}

#[tokio::test]
async fn test_info_entry_without_meta() -> Result<(), Error> {
    let (console, sink) = terminal_sink(false);
    let entry = LogEntry::new("test", Level::Info, "hello, console!");

    sink.write(&[entry]).await?;

    assert_eq!(sink.messages_written(), 1);
    let calls = console.calls_on(Channel::Log);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].message, "✅ [test]: hello, console!");
    assert!(calls[0].args.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_trace_entry_with_meta() -> Result<(), Error> {
    let (console, sink) = terminal_sink(true);

    sink.write(&[LogEntry::new("test", Level::Info, "hello, console!")])
        .await?;
    console.reset();

    let entry = LogEntry::new("test", Level::Trace, "hello, debug!").with_meta("number", 1);
    sink.write(std::slice::from_ref(&entry)).await?;

    assert_eq!(sink.messages_written(), 2);
    let calls = console.calls_on(Channel::Debug);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].message, "✴︎ [test]: hello, debug!");
    assert_eq!(calls[0].args, vec![Argument::Metadata(entry.metadata)]);
    assert_eq!(console.count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_counter_tracks_batch_lengths() -> Result<(), Error> {
    let (console, sink) = terminal_sink(false);
    let mut expected = 0;

    for len in [3usize, 0, 1, 5, 0] {
        let batch: Vec<_> = (0..len)
            .map(|i| LogEntry::new("batch", Level::ALL[i % Level::ALL.len()], format!("#{i}")))
            .collect();
        sink.write(&batch).await?;
        expected += len;
        assert_eq!(sink.messages_written(), expected);
    }

    assert_eq!(console.count(), expected);
    Ok(())
}

#[tokio::test]
async fn test_entries_rendered_in_order() -> Result<(), Error> {
    let (console, sink) = terminal_sink(false);
    sink.write(&[
        LogEntry::new("svc", Level::Error, "first"),
        LogEntry::new("svc", Level::Warn, "second"),
        LogEntry::new("svc", Level::Debug, "third"),
    ])
    .await?;

    let calls = console.calls.lock().unwrap().clone();
    let order: Vec<_> = calls.iter().map(|call| call.channel).collect();
    assert_eq!(order, vec![Channel::Error, Channel::Warn, Channel::Debug]);
    assert_eq!(calls[0].message, "💥 [svc]: first");
    assert_eq!(calls[1].message, "⚠ [svc]: second");
    assert_eq!(calls[2].message, "⇒ [svc]: third");
    Ok(())
}

#[test]
fn test_write_settles_without_suspension() {
    let (console, sink) = terminal_sink(false);
    let entries = [
        LogEntry::new("now", Level::Info, "a"),
        LogEntry::new("now", Level::Warn, "b"),
    ];

    let outcome = sink.write(&entries).now_or_never();

    assert!(matches!(outcome, Some(Ok(()))));
    assert_eq!(sink.messages_written(), 2);
    assert_eq!(console.count(), 2);
}

#[test]
fn test_unknown_level_is_not_counted() {
    let (console, sink) = terminal_sink(false);
    let entry: LogEntry = serde_json::from_str(
        r#"{"timestamp":0,"logger":"test","level":"verbose","message":"?","meta":{}}"#,
    )
    .unwrap();

    let outcome = sink.write(&[entry]).now_or_never();

    assert!(matches!(outcome, Some(Err(Error::InvalidLevel(level))) if level == "verbose"));
    assert_eq!(sink.messages_written(), 0);
    assert_eq!(console.count(), 0);
}

#[test]
fn test_formatter_stable_across_writes() -> Result<(), Error> {
    let console = Arc::new(RecordingConsole::default());
    let sink = ConsoleSink::with_options(
        console.clone(),
        Options::default().with_environment(Environment::browser("Mozilla/5.0 Chrome/126.0")),
    );

    sink.write_sync(&[LogEntry::new("ui", Level::Info, "one")])?;
    sink.write_sync(&[LogEntry::new("ui", Level::Info, "two")])?;

    let calls = console.calls_on(Channel::Log);
    assert_eq!(sink.formatter(), Formatter::Styled);
    assert_eq!(calls[0].message, "%c%c[%cui%c]%c one");
    assert_eq!(calls[1].message, "%c%c[%cui%c]%c two");
    assert_eq!(calls[0].args, calls[1].args);
    Ok(())
}

#[test]
fn test_concurrent_writes_keep_count() {
    let (console, sink) = terminal_sink(false);
    let sink = Arc::new(sink);

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let sink = sink.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    let batch = [
                        LogEntry::new(format!("worker-{n}"), Level::Debug, format!("{i}")),
                        LogEntry::new(format!("worker-{n}"), Level::Info, format!("{i}")),
                    ];
                    sink.write_sync(&batch).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(sink.messages_written(), 8 * 50 * 2);
    assert_eq!(console.count(), 8 * 50 * 2);
}
