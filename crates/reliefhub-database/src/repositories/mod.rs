//! Repository implementations for all ReliefHub entities.

pub mod alert;
pub mod report;
pub mod resource;
pub mod session;
pub mod task;
pub mod user;

pub use alert::AlertRepository;
pub use report::ReportRepository;
pub use resource::ResourceRepository;
pub use session::SessionRepository;
pub use task::TaskRepository;
pub use user::UserRepository;
