//! Two-tier authentication
//!
//! The outer tier is the store session: an opaque token issued by the
//! external identity provider and verified through its API only. The inner
//! tier is the till-operator session: an application-owned cookie holding a
//! bare employee id, re-validated against the database on every request.
//! The two tiers are exposed as independent, composable extractors -
//! several routes require only the outer one.

pub mod cookie;
pub mod extractor;
pub mod identity;
pub mod middleware;
pub mod session;

pub use cookie::EMPLOYEE_COOKIE;
pub use extractor::{AdminAuth, OperatorAuth, StoreAuth};
pub use identity::{HttpIdentityProvider, IdentityProvider, StaticIdentityProvider, StoreId};
pub use middleware::resolve_session;
pub use session::AuthSession;
