//! Database Models

// Serde helpers
pub mod serde_helpers;

// Catalog
pub mod product;

// Location
pub mod dining_table;

// Booking
pub mod reservation;

// Re-exports
pub use dining_table::{DiningTable, DiningTableCreate, DiningTableUpdate};
pub use product::{Product, ProductCreate, ProductUpdate};
pub use reservation::{Reservation, ReservationCreate};
