#![allow(dead_code)]

pub mod loaders {
    use std::cell::RefCell;

    use anyhow::anyhow;
    use routebuilder::{Loader, LoaderResolver, RouteTable};

    /// Call recorded by a [`RecordingLoader`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LoadCall {
        pub resource: String,
        pub type_hint: Option<String>,
    }

    /// In-memory loader returning a fixed table and recording every `load`
    pub struct RecordingLoader {
        table: RouteTable,
        supports: bool,
        resolver: Option<LoaderResolver>,
        calls: RefCell<Vec<LoadCall>>,
    }

    impl RecordingLoader {
        /// Loader that supports every resource and returns `table`.
        pub fn supporting(table: RouteTable) -> Self {
            Self {
                table,
                supports: true,
                resolver: None,
                calls: RefCell::new(Vec::new()),
            }
        }

        /// Loader that supports nothing itself and delegates to `resolver`.
        pub fn delegating(resolver: LoaderResolver) -> Self {
            Self {
                table: RouteTable::new(),
                supports: false,
                resolver: Some(resolver),
                calls: RefCell::new(Vec::new()),
            }
        }

        /// Loader that supports nothing and has no resolver.
        pub fn unsupporting() -> Self {
            Self {
                table: RouteTable::new(),
                supports: false,
                resolver: None,
                calls: RefCell::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<LoadCall> {
            self.calls.borrow().clone()
        }
    }

    impl Loader for RecordingLoader {
        fn supports(&self, _resource: &str, _type_hint: Option<&str>) -> bool {
            self.supports
        }

        fn load(&self, resource: &str, type_hint: Option<&str>) -> anyhow::Result<RouteTable> {
            self.calls.borrow_mut().push(LoadCall {
                resource: resource.to_owned(),
                type_hint: type_hint.map(str::to_owned),
            });
            Ok(self.table.clone())
        }

        fn resolver(&self) -> Option<&LoaderResolver> {
            self.resolver.as_ref()
        }
    }

    /// Error produced by [`FailingLoader`].
    #[derive(Debug)]
    pub struct BrokenResource(pub String);

    impl std::fmt::Display for BrokenResource {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "malformed routing file {}", self.0)
        }
    }

    impl std::error::Error for BrokenResource {}

    /// Loader that supports everything and fails to load it.
    pub struct FailingLoader;

    impl Loader for FailingLoader {
        fn supports(&self, _resource: &str, _type_hint: Option<&str>) -> bool {
            true
        }

        fn load(&self, resource: &str, _type_hint: Option<&str>) -> anyhow::Result<RouteTable> {
            Err(anyhow!(BrokenResource(resource.to_owned())))
        }
    }
}

pub mod tracing_init {
    use std::sync::Once;

    static TRACING_INIT: Once = Once::new();

    /// Install a test-friendly fmt subscriber once per test binary
    ///
    /// Honours `RUST_LOG`, e.g. `RUST_LOG=routebuilder=debug cargo test`.
    pub fn init() {
        TRACING_INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_test_writer()
                .try_init();
        });
    }
}
