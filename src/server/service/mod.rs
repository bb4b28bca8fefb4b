//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! validate input, derive computed fields, and translate missing records into
//! `AppError::NotFound`.

pub mod player;
