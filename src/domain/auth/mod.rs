pub mod jwt;

pub use jwt::{JwtManager, ViewerClaims};
