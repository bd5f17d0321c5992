pub mod help;
pub use help::*;

pub mod report;
pub use report::*;

pub mod session_error;
pub use session_error::*;

pub mod session;
pub use session::*;
