use crate::core::errors::Result;
use crate::core::models::invocation::{CommandOutput, ComposeInvocation};

/// Port for running the external compose tool.
///
/// The system implementation shells out; tests plug in a recording fake.
pub trait ProcessRunner {
    /// Name or path of the executable this runner launches.
    fn program(&self) -> &str;

    /// Whether `program()` can be resolved and executed.
    fn is_available(&self) -> bool;

    /// Run the invocation to completion and capture its output.
    ///
    /// A non-zero exit is not an error at this level; callers inspect
    /// `CommandOutput::success`.
    fn run(&self, invocation: &ComposeInvocation) -> Result<CommandOutput>;
}
