pub mod credential;
pub mod endpoint;
pub mod error;
pub mod interpreter;
pub mod outcome;
pub mod report;

pub use credential::Credential;
pub use error::{Error, Result};
pub use interpreter::{Failure, ResponseInterpreter, Verdict};
pub use outcome::RequestOutcome;
pub use report::{ExitStatus, Report};
