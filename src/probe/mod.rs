//! Domain probing: registration lookup and website reachability.
//!
//! Both probers are fail-closed: every timeout, connect error, or
//! unanticipated status resolves into a negative result, never an error the
//! caller has to handle. The mapping from response to outcome lives in
//! explicit policy functions so tests can enumerate it exhaustively.

mod registration;
mod website;

pub use registration::probe_registration;
pub use website::probe_website;
