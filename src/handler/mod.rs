//! Submit handlers for collected signup values

mod accept;
mod traits;

pub use accept::AcceptingHandler;
pub use traits::SignupHandler;

#[cfg(test)]
pub use traits::MockSignupHandler;
