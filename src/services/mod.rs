#[cfg(feature = "ssr")]
pub mod provider;
#[cfg(feature = "ssr")]
pub mod replicate;

#[cfg(feature = "ssr")]
pub use provider::*;
#[cfg(feature = "ssr")]
pub use replicate::ReplicateProvider;
