#![deny(missing_docs)]
//! Standard initialization for function binaries built on the sdk.
//! Installs the tracing subscriber so diagnostics from every client end up in the function log.

use edge_config::RunMode;
use tracing_subscriber::EnvFilter;

/// unit struct which defines the behaviour for instantiation
#[derive(Debug)]
pub struct EdgeEntrypoint {
    mode: RunMode,
    default_directive: Option<String>,
}

impl Default for EdgeEntrypoint {
    fn default() -> Self {
        EdgeEntrypoint {
            mode: RunMode::new_or_edge(),
            default_directive: None,
        }
    }
}

/// sentinel struct which guarantees that we called [EdgeEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl EdgeEntrypoint {
    /// create a new instance of [Self] from an input [RunMode]
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// filter directive used when `RUST_LOG` is not set, e.g. `info`
    pub fn default_directive(mut self, directive: impl Into<String>) -> Self {
        self.default_directive = Some(directive.into());
        self
    }

    fn env_filter(&self) -> EnvFilter {
        match &self.default_directive {
            Some(directive) => {
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
            }
            None => EnvFilter::from_default_env(),
        }
    }

    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        let filter = self.env_filter();
        match self.mode {
            RunMode::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(filter)
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            RunMode::Edge => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(filter)
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        tracing::debug!(mode = %self.mode, "initialized function entrypoint");
        InitializedEntrypoint(())
    }
}
