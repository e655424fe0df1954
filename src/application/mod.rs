mod scheduler;
mod session;

pub use scheduler::Scheduler;
pub use session::{FrameDriver, RunState, SessionController};
