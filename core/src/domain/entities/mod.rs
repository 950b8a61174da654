//! Domain entities representing core business objects.

pub mod issued_token;
pub mod token_issuer;

pub use issued_token::IssuedToken;
pub use token_issuer::TokenIssuer;
