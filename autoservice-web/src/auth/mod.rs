pub mod jwt;

pub use jwt::{Claims, TokenError, decode_claims};
