use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log to stdout. `RUST_LOG` wins over the configured level.
pub fn init(loglevel: &str) {
    subscriber(loglevel, std::io::stdout).init();
}

/// Log to stderr, leaving stdout to the program's own output.
pub fn init_stderr(loglevel: &str) {
    subscriber(loglevel, std::io::stderr).init();
}

fn subscriber<W>(loglevel: &str, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(loglevel));
    tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_level(true)
            .with_target(false),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn events_go_to_the_given_writer() {
        let captured = Captured::default();
        let sink = captured.clone();
        let sub = subscriber("info", move || sink.clone());

        tracing::subscriber::with_default(sub, || {
            tracing::warn!(username = "admin", "reset failed");
        });

        let out = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("WARN"));
        assert!(out.contains("reset failed"));
        assert!(out.contains("admin"));
    }
}
