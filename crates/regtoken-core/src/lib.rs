pub mod error;
pub mod jwt;
pub mod signing_key;
pub mod token;

pub use error::TokenError;
pub use token::RegistrationToken;
