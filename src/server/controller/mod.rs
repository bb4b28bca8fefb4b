//! HTTP request handlers.
//!
//! Controllers convert request DTOs into domain params, call the service layer, and
//! convert domain models back into DTOs.

pub mod extract;
pub mod param;
pub mod player;

#[cfg(test)]
mod test;
