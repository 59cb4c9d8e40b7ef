use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "ssr")] {
        use axum::extract::FromRef;
        use leptos::prelude::LeptosOptions;
        use std::sync::Arc;

        use crate::config::ConfigSource;
        use crate::services::{ImageProvider, ReplicateProvider};

        /// Collaborators of the generation endpoint, built once in `main`.
        #[derive(Clone)]
        pub struct ApiState {
            pub provider: Arc<dyn ImageProvider>,
            pub config: ConfigSource,
        }

        impl ApiState {
            pub fn new(provider: Arc<dyn ImageProvider>, config: ConfigSource) -> Self {
                Self { provider, config }
            }

            pub fn from_env() -> Self {
                Self::new(Arc::new(ReplicateProvider::from_env()), ConfigSource::Env)
            }
        }

        #[derive(FromRef, Clone)]
        pub struct AppState {
            pub leptos_options: LeptosOptions,
            pub api: ApiState,
        }

        impl AppState {
            pub fn new(leptos_options: LeptosOptions, api: ApiState) -> Self {
                Self { leptos_options, api }
            }
        }
    }
}
