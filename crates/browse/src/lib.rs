mod session;

pub use session::{SearchOutcome, Session};
