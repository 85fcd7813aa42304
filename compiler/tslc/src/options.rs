//! Driver configuration.

use tsl_check::PreEmitChecklist;

#[derive(Clone, Debug)]
pub struct CompileOptions {
    /// Compile batches of files on the rayon pool.
    pub parallel: bool,
    /// Checks run on each file before it is lowered.
    pub checklist: PreEmitChecklist,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            parallel: true,
            checklist: PreEmitChecklist::default(),
        }
    }
}
