//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Converts between the JSON-facing DTO and the stored entity in one place.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod accounts;
#[cfg(test)]
pub mod test_support;
