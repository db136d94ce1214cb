//! Session token verification
//!
//! Sessions are carried as HS256 JWTs naming the acting user and account.

mod jwt;

pub use jwt::{JwtConfig, JwtService, SessionClaims};
