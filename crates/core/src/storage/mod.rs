mod error;
mod traits;

pub use error::{Result, SlotError};
pub use traits::DurableSlot;
