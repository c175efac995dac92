use std::io::{self, Write};
use std::path::Path;

use log::debug;

mod executor;

use crate::{
    core::{
        commands::{CommandExecutor, Flow},
        config::Config,
        prompt::PromptRenderer,
        session::{ProcessDir, Session, WorkingDir},
    },
    error::ShellError,
    flags::Flags,
    input::{self, EditorSource, LineSource, StreamSource, INTERRUPT_HINT},
    path::Normalizer,
};

pub use executor::CommandHandler;

/// The read-dispatch loop and the state it carries between lines.
pub struct Shell<I: LineSource, O: Write, E: Write> {
    pub(crate) input: I,
    pub(crate) out: O,
    pub(crate) err: E,
    pub(crate) session: Session,
    pub(crate) config: Config,
    pub(crate) executor: CommandExecutor,
    pub(crate) prompt: PromptRenderer,
    pub(crate) working_dir: Box<dyn WorkingDir>,
}

pub type StdShell = Shell<Box<dyn LineSource>, io::Stdout, io::Stderr>;

impl StdShell {
    /// Builds the interactive shell: config, input mode, Ctrl-C handling
    /// and the starting directory.
    pub fn from_flags(flags: &Flags) -> Result<Self, ShellError> {
        let config = Config::load(flags.get_value("config").map(Path::new))?;
        let quiet = flags.is_set("quiet");
        let executor = CommandExecutor::new();

        let input: Box<dyn LineSource> = if input::stdin_is_terminal() {
            debug!("stdin is a terminal, using line editing");
            Box::new(EditorSource::new(&config, &executor.names(), quiet)?)
        } else {
            Box::new(StreamSource::new(io::stdin().lock(), io::stdout()))
        };

        // Keeps SIGINT from killing the session outside of line editing.
        ctrlc::set_handler(move || {
            if !quiet {
                println!("\n{}", INTERRUPT_HINT);
            }
        })?;

        Ok(Shell::new(
            input,
            io::stdout(),
            io::stderr(),
            config,
            executor,
            Box::new(ProcessDir),
            flags.start_path(),
        ))
    }
}

impl<I: LineSource, O: Write, E: Write> Shell<I, O, E> {
    pub fn new(
        input: I,
        out: O,
        mut err: E,
        config: Config,
        executor: CommandExecutor,
        working_dir: Box<dyn WorkingDir>,
        start_path: Option<&str>,
    ) -> Self {
        let session = Session::start(start_path, working_dir.as_ref(), &mut err);
        let prompt = PromptRenderer::new(config.prompt_id.clone(), Normalizer::new(config.limits));

        Shell {
            input,
            out,
            err,
            session,
            config,
            executor,
            prompt,
            working_dir,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn output(&self) -> &O {
        &self.out
    }

    pub fn errors(&self) -> &E {
        &self.err
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Runs until `quit` or end of input. Both are clean exits.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self.prompt.render(self.session.current_dir());
            let line = match self.input.read_line(&prompt) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!("end of input");
                    break;
                }
                Err(e) => {
                    let _ = writeln!(self.err, "{}", e);
                    break;
                }
            };

            if self.handle_line(&line) == Flow::Quit {
                break;
            }
        }

        self.out.flush()?;
        Ok(())
    }
}
