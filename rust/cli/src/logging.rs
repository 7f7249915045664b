use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber.
///
/// `RUST_LOG` wins over `default_filter`. Returns `false` if a global
/// subscriber was already installed.
pub fn init_logging(default_filter: &str) -> bool {
    use tracing_subscriber::fmt;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gunslinger_world::Game;
    use std::sync::{Arc, Mutex, PoisonError};
    use tracing::field::{Field, Visit};
    use tracing::{info, warn, Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::{Layer, Registry};

    #[derive(Debug, Clone)]
    struct Captured {
        level: Level,
        message: String,
        fields: Vec<(String, String)>,
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<Captured>>>);

    impl Capture {
        fn events(&self) -> Vec<Captured> {
            self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
        }
    }

    #[derive(Default)]
    struct Fields {
        message: String,
        rest: Vec<(String, String)>,
    }

    impl Visit for Fields {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.message = format!("{:?}", value);
            } else {
                self.rest.push((field.name().to_string(), format!("{:?}", value)));
            }
        }
    }

    impl<S: Subscriber> Layer<S> for Capture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::default();
            event.record(&mut fields);
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(Captured {
                    level: *event.metadata().level(),
                    message: fields.message,
                    fields: fields.rest,
                });
        }
    }

    fn captured(f: impl FnOnce()) -> Vec<Captured> {
        let capture = Capture::default();
        let registry = Registry::default().with(capture.clone());
        tracing::subscriber::with_default(registry, f);
        capture.events()
    }

    #[test]
    fn events_keep_level_and_fields() {
        let events = captured(|| {
            info!(seed = 7, "session started");
            warn!("careful");
        });
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].level, Level::INFO);
        assert_eq!(events[0].message, "session started");
        assert_eq!(events[0].fields, vec![("seed".to_string(), "7".to_string())]);
        assert_eq!(events[1].level, Level::WARN);
    }

    #[test]
    fn loop_resets_are_logged_with_the_counter() {
        let events = captured(|| {
            let mut game = Game::new(1);
            game.start();
            game.process_command("die");
        });

        let resets: Vec<_> = events
            .into_iter()
            .filter(|e| e.message == "loop reset")
            .collect();
        assert_eq!(resets.len(), 2);
        assert_eq!(resets[1].level, Level::INFO);
        assert!(resets[1]
            .fields
            .iter()
            .any(|(k, v)| k == "loop_counter" && v == "2"));
    }
}
