pub mod keycloak_password_grant;
pub mod keycloak_rest;

pub use keycloak_password_grant::*;
pub use keycloak_rest::*;
