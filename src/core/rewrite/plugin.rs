//! The `Log.traceable` rewriting pass.
//!
//! [`plugin`] builds a [`TraceablePlugin`] from its options; the host asks it
//! for a [`TraceableVisitor`] per file and drives it over the module with
//! `visit_mut_with`. Every matched call gets the file path and line appended:
//!
//! ```text
//! Log.traceable('User logged in');                    // before
//! Log.traceable('User logged in', 'src/auth.js', 42); // after
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use swc_common::{BytePos, DUMMY_SP, SourceMap, Spanned};
use swc_ecma_ast::{CallExpr, Expr, ExprOrSpread, Lit, Number, Str};
use swc_ecma_visit::{VisitMut, VisitMutWith};

use super::call_site::CallSite;
use super::relative_path::{normalize, relative_path};

/// Plugin name reported to the host.
pub const PLUGIN_NAME: &str = "bulbul";

/// Path literal used when the host does not know which file it is processing.
pub const UNKNOWN_FILE: &str = "unknown";

/// Options passed to the plugin by the host configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    /// Directory used for relative path computation. Overrides every other root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
}

/// Per-file state supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformState {
    /// Path of the file being transformed, absolute or relative to `working_dir`.
    pub filename: Option<PathBuf>,
    /// Root carried by the host itself, used when the options name none.
    pub root: Option<PathBuf>,
    /// The host process working directory.
    pub working_dir: PathBuf,
}

impl TransformState {
    pub fn new(filename: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            filename: Some(filename.into()),
            root: None,
            working_dir: working_dir.into(),
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }
}

/// One appended location pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    /// Path literal that was appended.
    pub path: String,
    /// One-based line of the call expression.
    pub line: usize,
    /// Where the literals go in the original source text.
    pub insert_at: BytePos,
    /// True when the call had no arguments before the rewrite.
    pub was_empty: bool,
}

/// Plugin descriptor returned by [`plugin`].
#[derive(Debug, Clone, Default)]
pub struct TraceablePlugin {
    options: PluginOptions,
}

/// Create the plugin from its options.
pub fn plugin(options: PluginOptions) -> TraceablePlugin {
    TraceablePlugin { options }
}

impl TraceablePlugin {
    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    /// Resolve the directory paths are made relative to.
    ///
    /// Priority: plugin options, then the root on the state, then the working
    /// directory. Relative roots are anchored at the working directory.
    pub fn resolve_root(&self, state: &TransformState) -> PathBuf {
        let root = self
            .options
            .cwd
            .as_deref()
            .or(state.root.as_deref())
            .unwrap_or(&state.working_dir);
        normalize(&state.working_dir.join(root))
    }

    /// Compute the path literal injected into every call of this file.
    ///
    /// Falls back to the filename exactly as the host supplied it when no
    /// relative path exists between the root and the file.
    pub fn file_label(&self, state: &TransformState) -> String {
        let Some(filename) = state.filename.as_deref() else {
            return UNKNOWN_FILE.to_string();
        };
        let root = self.resolve_root(state);
        match relative_path(&root, &state.working_dir.join(filename)) {
            Some(relative) => relative.to_string_lossy().into_owned(),
            None => {
                tracing::warn!(
                    root = %root.display(),
                    file = %filename.display(),
                    "cannot relativize file path, using it as is"
                );
                filename.to_string_lossy().into_owned()
            }
        }
    }

    /// Build the visitor for one file.
    pub fn visitor<'a>(
        &self,
        state: &TransformState,
        source_map: &'a SourceMap,
    ) -> TraceableVisitor<'a> {
        TraceableVisitor::new(self.file_label(state), source_map)
    }
}

/// `VisitMut` implementation appending location pairs to traceable calls.
pub struct TraceableVisitor<'a> {
    file_label: String,
    source_map: &'a SourceMap,
    injections: Vec<Injection>,
}

impl<'a> TraceableVisitor<'a> {
    pub fn new(file_label: impl Into<String>, source_map: &'a SourceMap) -> Self {
        Self {
            file_label: file_label.into(),
            source_map,
            injections: Vec::new(),
        }
    }

    /// Injections performed by this visitor, in visit order.
    pub fn into_injections(self) -> Vec<Injection> {
        self.injections
    }

    /// Detect and rewrite a single call expression. Does not recurse.
    fn rewrite_call(&mut self, call: &mut CallExpr) {
        let Some(site) = CallSite::detect(call) else {
            return;
        };

        if call.span.is_dummy() {
            tracing::debug!("skipping {}.{} without position", site.object, site.property);
            return;
        }

        if site.has_location_pair() {
            tracing::debug!(
                file = %self.file_label,
                "skipping {}.{} that already carries a location",
                site.object,
                site.property
            );
            return;
        }

        let line = self.source_map.lookup_char_pos(call.span.lo).line;
        let (insert_at, was_empty) = match call.args.last() {
            Some(last) => (last.span().hi, false),
            // `)` is the last byte of the call
            None => (call.span.hi - BytePos(1), true),
        };

        call.args.push(ExprOrSpread {
            spread: None,
            expr: Box::new(Expr::Lit(Lit::Str(Str {
                span: DUMMY_SP,
                value: self.file_label.as_str().into(),
                raw: None,
            }))),
        });
        call.args.push(ExprOrSpread {
            spread: None,
            expr: Box::new(Expr::Lit(Lit::Num(Number {
                span: DUMMY_SP,
                value: line as f64,
                raw: None,
            }))),
        });

        tracing::debug!(file = %self.file_label, line, "injected location");
        self.injections.push(Injection {
            path: self.file_label.clone(),
            line,
            insert_at,
            was_empty,
        });
    }
}

impl VisitMut for TraceableVisitor<'_> {
    fn visit_mut_call_expr(&mut self, call: &mut CallExpr) {
        // Nested calls in the arguments are rewritten first
        call.visit_mut_children_with(self);
        self.rewrite_call(call);
    }
}

