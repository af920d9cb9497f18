//! Domain types for the deskpad widgets
//! Defines the record structures and validation rules shared by the contact
//! inbox and the todo list.

pub mod error;
pub mod ids;
pub mod message;
pub mod todo;
pub mod validation;

pub use error::*;
pub use ids::*;
pub use message::*;
pub use todo::*;
pub use validation::*;
