pub mod directory;
pub mod errors;
pub mod session;
pub mod timestamp;
pub mod user;

pub use directory::{PageRequest, UserAction, UserActionError};
pub use errors::ErrorResponse;
pub use session::{GuardDecision, Session};
pub use timestamp::ProtoTimestamp;
pub use user::{User, UserId, UserList, UserRole};
