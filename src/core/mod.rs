pub mod driver;
pub mod functions;
pub mod registry;
pub mod session;

pub use crate::domain::model::{Counter, NamedHolder};
pub use crate::domain::ports::{Invocable, MethodRef};
pub use crate::utils::error::Result;
