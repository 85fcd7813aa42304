//! Per-file compile-unit state.
//!
//! One [`UnitState`] exists per compiled file. It is threaded by reference
//! through every lowering call and handed back to the driver once the file
//! is done; nothing in it is shared across files.

use bitflags::bitflags;
use tsl_diagnostic::{DiagnosticKind, DiagnosticSink};
use tsl_ir::target::TempId;
use tsl_ir::{Name, Span};

bitflags! {
    /// Runtime helper namespaces referenced by the lowered output.
    ///
    /// The emitter imports the runtime library only when a flag is set.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct HelperFlags: u8 {
        /// `TS.array`
        const ARRAY = 1 << 0;
        /// `TS.string`
        const STRING = 1 << 1;
        /// `TS.map`
        const MAP = 1 << 2;
        /// `TS.set`
        const SET = 1 << 3;
        /// `TS.Object`
        const OBJECT = 1 << 4;
        /// `TS.runtime`
        const RUNTIME = 1 << 5;
    }
}

/// A synthesized temporary.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TempInfo {
    /// Name hint for the emitter (`exp`, `result`, ...).
    pub hint: Name,
    /// Source span that required the temporary.
    pub span: Span,
}

/// Arena of temporaries; ids are handed out in increasing order.
#[derive(Clone, Default, Debug)]
pub struct TempArena {
    temps: Vec<TempInfo>,
}

impl TempArena {
    pub fn alloc(&mut self, hint: Name, span: Span) -> TempId {
        let raw = u32::try_from(self.temps.len())
            .unwrap_or_else(|_| panic!("temporary arena exceeded {} entries", u32::MAX));
        self.temps.push(TempInfo { hint, span });
        TempId::new(raw)
    }

    #[inline]
    pub fn get(&self, id: TempId) -> &TempInfo {
        &self.temps[id.index()]
    }

    pub fn len(&self) -> usize {
        self.temps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temps.is_empty()
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "alloc caps the arena at u32::MAX entries"
    )]
    pub fn iter(&self) -> impl Iterator<Item = (TempId, &TempInfo)> {
        self.temps
            .iter()
            .enumerate()
            .map(|(i, info)| (TempId::new(i as u32), info))
    }
}

#[derive(Default, Debug)]
pub struct UnitState {
    pub diagnostics: DiagnosticSink,
    temps: TempArena,
    helpers: HelperFlags,
}

impl UnitState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an error diagnostic.
    pub fn push_diagnostic(&mut self, kind: DiagnosticKind, span: Span, message: impl Into<String>) {
        self.diagnostics.error(kind, span, message);
    }

    pub fn new_temp(&mut self, hint: Name, span: Span) -> TempId {
        let id = self.temps.alloc(hint, span);
        tracing::trace!(temp = id.index(), %span, "allocated temporary");
        id
    }

    pub fn temps(&self) -> &TempArena {
        &self.temps
    }

    /// Record that lowered output references the helper namespace `flag`.
    pub fn use_helper(&mut self, flag: HelperFlags) {
        self.helpers |= flag;
    }

    pub fn helpers(&self) -> HelperFlags {
        self.helpers
    }

    /// Split the state into its parts for the driver.
    pub fn into_parts(self) -> (DiagnosticSink, TempArena, HelperFlags) {
        (self.diagnostics, self.temps, self.helpers)
    }
}
