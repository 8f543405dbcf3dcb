//! Diagnostic output.
//!
//! Natively this is a plain `tracing-subscriber` fmt layer. In the browser the
//! formatted lines go to the developer console instead: `warn` and `error`
//! through `console.warn`, everything else through `console.log`.

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter` where the environment is
/// available. Calling this more than once keeps the first subscriber.
pub fn init(default_filter: &str) {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());

    #[cfg(not(target_arch = "wasm32"))]
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter.as_str())
        .try_init();

    #[cfg(target_arch = "wasm32")]
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter.as_str())
        .with_writer(console::ConsoleMakeWriter)
        .without_time()
        .with_ansi(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    /// Buffers one formatted event and hands it to the console on drop.
    pub struct ConsoleWriter {
        buf: Vec<u8>,
        level: Level,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buf);
            let line = line.trim_end();
            if line.is_empty() {
                return;
            }
            let value = JsValue::from_str(line);
            if self.level <= Level::WARN {
                web_sys::console::warn_1(&value);
            } else {
                web_sys::console::log_1(&value);
            }
        }
    }

    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                buf: Vec::new(),
                level: Level::INFO,
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                buf: Vec::new(),
                level: *meta.level(),
            }
        }
    }
}
