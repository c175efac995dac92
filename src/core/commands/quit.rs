use super::{Command, CommandError, Context, Flow};

#[derive(Clone, Default)]
pub struct QuitCommand;

impl QuitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for QuitCommand {
    // Trailing arguments are accepted and ignored.
    fn execute(&self, _args: &[&str], _ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        Ok(Flow::Quit)
    }
}
