pub mod context;
mod types;

pub use context::{use_auth, AnonymousIdentity, AuthContext, AuthProvider, IdentityProvider};
pub use types::*;
