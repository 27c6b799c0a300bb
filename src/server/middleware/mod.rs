//! Request processing shared by the controllers.
//!
//! - `auth` - Permission checks against the session user
//! - `session` - Typed accessors for session data
//! - `logging` - Per-request log line

pub mod auth;
pub mod logging;
pub mod session;

#[cfg(test)]
mod test;
