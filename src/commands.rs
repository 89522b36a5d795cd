//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them; update functions never touch threads or the
//! image source directly.

use crate::image::{CancelToken, Image};

/// Commands returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Presentation state changed; push it to the surface
    Redraw,
    /// Ask the image source for the image.
    /// Sends Msg::Load(FetchCompleted) back.
    FetchImage { generation: u64 },
    /// Cancel an in-flight fetch at the source
    CancelFetch { token: CancelToken },
    /// Run the cosmetic transform on a worker thread.
    /// Sends Msg::Load(TransformCompleted) when done.
    RunTransform { generation: u64, image: Image },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, dropping `Cmd::None` entries
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .filter(|cmd| !matches!(cmd, Cmd::None))
            .collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Results arrive as messages which trigger their own redraw
            Cmd::FetchImage { .. } => false,
            Cmd::CancelFetch { .. } => false,
            Cmd::RunTransform { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Generations of all fetches this command starts
    pub fn fetch_generations(&self) -> Vec<u64> {
        match self {
            Cmd::FetchImage { generation } => vec![*generation],
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.fetch_generations()).collect(),
            _ => Vec::new(),
        }
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
