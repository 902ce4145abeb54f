//! Caller identity, edit authorization and anti-forgery tokens

mod authorize;
mod caller;
mod token;

pub use authorize::{EditAuthorizer, RoleAuthorizer};
pub use caller::Caller;
pub use token::{HmacTokenIssuer, TokenIssuer};
