/*!
# Journal Domain

Domain layer for the journal system's user-management service, built around a
Keycloak identity provider using hexagonal architecture principles.

This crate provides:
- Role-specific projections (Doctor, Patient, Employee) over Keycloak's
  generic user-attribute store
- Port definitions for the identity provider seam
- Application services implementing the user-management use cases
- Infrastructure adapters over the Keycloak admin REST API

The service holds no state of its own: every operation is a round trip
against the identity provider, and projections are recomputed on every read.
*/

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::ports::*;
pub use application::services::*;
pub use domain::entities::*;
pub use domain::errors::*;
