pub mod booking;
pub mod event_space;
pub mod response;

pub use booking::{CancelBookingRequest, CancelBookingResult};
pub use event_space::{DeleteEventSpaceRequest, DeleteEventSpaceResult, EventSpace};
pub use response::{FunctionFailure, FunctionSuccess};
