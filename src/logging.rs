//! Инициализация журналирования.
//!
//! Журнал пишется в stderr, чтобы не смешиваться с ответами калькулятора
//! в stdout. Уровень задаётся через `RUST_LOG`, по умолчанию `warn`.
//! События отдельных вычислений, включая отклонённый ввод, идут на `debug`:
//! пользователь и так видит строку `Error:`.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "roman_calc=warn";

fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .compact(),
    )
}

/// Устанавливает глобальный подписчик `tracing`.
///
/// Повторный вызов ничего не делает.
pub fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = subscriber(filter, std::io::stderr).try_init();
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{Calculator, repl};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Прогоняет сессию REPL под фильтром и возвращает записанный журнал.
    fn logged_during_session(filter: &str, input: &str) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let sub = subscriber(EnvFilter::new(filter), move || writer.clone());

        tracing::subscriber::with_default(sub, || {
            repl(input.as_bytes(), io::sink(), &Calculator::default()).unwrap();
        });

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn rejected_input_is_silent_at_default_level() {
        let log = logged_during_session(DEFAULT_FILTER, "garbage\nV - X\nIII + 4\n");
        assert!(log.is_empty(), "unexpected log output: {log}");
    }

    #[test]
    fn rejected_input_is_logged_at_debug() {
        let log = logged_during_session("roman_calc=debug", "garbage\n");
        assert!(log.contains("rejected"), "log: {log}");
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logger();
        init_logger();
        tracing::debug!("logger initialised");
    }
}
