//! Line-oriented command session.
//!
//! Reads one line at a time, tokenizes on whitespace, dispatches the first
//! token to a namespace operation, and renders confirmations and errors to
//! the output stream. Unrecognized commands are ignored without comment, as
//! are recognized commands missing their arguments. The session is generic
//! over its streams so tests can drive it with in-memory buffers.

use crate::config::SessionConfig;
use crate::error::ShellError;
use crate::namespace::Namespace;
use crate::ops;
use crate::persist;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Interactive command loop over a namespace.
pub struct Session<R, W> {
    namespace: Namespace,
    input: R,
    output: W,
    prompt: String,
    state_file: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(namespace: Namespace, input: R, output: W) -> Self {
        Session {
            namespace,
            input,
            output,
            prompt: DEFAULT_PROMPT.to_string(),
            state_file: None,
        }
    }

    pub fn with_config(namespace: Namespace, input: R, output: W, config: &SessionConfig) -> Self {
        Session {
            namespace,
            input,
            output,
            prompt: config.prompt.clone(),
            state_file: config.state_file.clone(),
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn namespace_mut(&mut self) -> &mut Namespace {
        &mut self.namespace
    }

    /// Tear down into the namespace and streams, for tests and embedding.
    pub fn into_parts(self) -> (Namespace, R, W) {
        (self.namespace, self.input, self.output)
    }

    /// Prompt, read, and dispatch until end of input.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input; session over");
                return Ok(());
            }
            self.dispatch(&line)?;
        }
    }

    /// Execute a single command line.
    ///
    /// The returned error covers only output-stream failures; operation
    /// failures are rendered as `Error: ...` lines and do not end the
    /// session.
    pub fn dispatch(&mut self, line: &str) -> Result<(), ShellError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Ok(()),
            ["mkdir", name, ..] => {
                let result = ops::mkdir(&mut self.namespace, name);
                self.render(result.map(|_| None))
            }
            ["cd", path, ..] => {
                // a miss leaves the cursor unresolved, silently
                ops::cd(&mut self.namespace, path);
                Ok(())
            }
            ["ls", ..] => {
                let listing = ops::ls(&self.namespace)
                    .map(|entries| entries.map(|entry| entry.to_string()).collect::<Vec<_>>());
                match listing {
                    Ok(lines) => {
                        for line in lines {
                            writeln!(self.output, "{line}")?;
                        }
                        Ok(())
                    }
                    Err(err) => self.render(Err(err)),
                }
            }
            ["touch", name, ..] => {
                let result = ops::touch(&mut self.namespace, name);
                self.render(result.map(|_| None))
            }
            ["echo", name, content @ ..] => {
                let content = content.join(" ");
                let result = ops::echo(&mut self.namespace, name, &content);
                self.render(result.map(|_| None))
            }
            ["mv", source, destination, ..] => {
                let result = ops::mv(&mut self.namespace, source, destination);
                self.render(result.map(Some))
            }
            ["cp", source, destination, ..] => {
                let result = ops::cp(&mut self.namespace, source, destination);
                self.render(result.map(Some))
            }
            ["rm", target, ..] => {
                let result = ops::rm(&mut self.namespace, target);
                self.render(result.map(Some))
            }
            ["save", rest @ ..] => match self.resolve_state_file(rest.first()) {
                Some(path) => {
                    let result = persist::save_state(&self.namespace, &path);
                    self.render_shell(result.map(|()| None))
                }
                None => {
                    debug!("save without a state file; ignoring");
                    Ok(())
                }
            },
            ["load", rest @ ..] => match self.resolve_state_file(rest.first()) {
                Some(path) => {
                    let result = persist::load_state(&mut self.namespace, &path);
                    self.render_shell(result.map(|_| None))
                }
                None => {
                    debug!("load without a state file; ignoring");
                    Ok(())
                }
            },
            [command, ..] => {
                debug!(command, "ignoring unrecognized command");
                Ok(())
            }
        }
    }

    fn resolve_state_file(&self, arg: Option<&&str>) -> Option<PathBuf> {
        arg.map(|path| PathBuf::from(*path))
            .or_else(|| self.state_file.clone())
    }

    fn render(
        &mut self,
        result: Result<Option<String>, crate::error::NamespaceError>,
    ) -> Result<(), ShellError> {
        self.render_shell(result.map_err(ShellError::from))
    }

    fn render_shell(&mut self, result: Result<Option<String>, ShellError>) -> Result<(), ShellError> {
        match result {
            Ok(Some(message)) => writeln!(self.output, "{message}")?,
            Ok(None) => {}
            Err(err) => writeln!(self.output, "Error: {err}.")?,
        }
        Ok(())
    }
}

/// Build the sample namespace the simulator starts with:
/// `documents/{work,personal}` plus `resume.txt` and `todo.txt`, with the
/// cursor left on `documents`.
pub fn seed_sample(ns: &mut Namespace) -> Result<(), crate::error::NamespaceError> {
    ops::mkdir(ns, "documents")?;
    ops::cd(ns, "documents");
    ops::mkdir(ns, "work")?;
    ops::mkdir(ns, "personal")?;
    ops::touch(ns, "resume.txt")?;
    ops::touch(ns, "todo.txt")?;
    Ok(())
}
