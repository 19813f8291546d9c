//! Request handlers for the catalog API.
//!
//! Handlers read from the shared [`MotorcycleStore`](motocompare_store::MotorcycleStore),
//! delegate to the pure functions in `motocompare_core`, and map errors via
//! [`AppError`](crate::error::AppError). Every success body is wrapped in
//! [`DataResponse`](crate::response::DataResponse).

pub mod catalog;
pub mod compare;
pub mod motorcycles;
