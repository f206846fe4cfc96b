//! Host side of the rewrite: parse a file, run the plugin, emit the new text.
//!
//! The output is produced by splicing the appended literals into the original
//! text, so formatting, comments and every byte outside the injected
//! arguments are preserved.

use std::sync::Arc;

use anyhow::Result;
use swc_common::SourceMap;
use swc_ecma_visit::VisitMutWith;

use crate::core::parsers::source::parse_source;
use crate::core::rewrite::{Injection, PluginOptions, TransformState, plugin};
use crate::utils::quote_js_string;

/// Result of transforming one file.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    /// Transformed source text.
    pub code: String,
    /// Every location pair that was appended, in source order.
    pub injections: Vec<Injection>,
}

impl TransformOutput {
    pub fn is_changed(&self) -> bool {
        !self.injections.is_empty()
    }
}

/// Transform a source string.
///
/// `file_path` is used for syntax selection and error messages; the path
/// literal itself comes from `state`.
pub fn transform_source(
    code: &str,
    file_path: &str,
    state: &TransformState,
    options: &PluginOptions,
) -> Result<TransformOutput> {
    let source_map = Arc::new(SourceMap::default());
    let mut parsed = parse_source(code.to_string(), file_path, source_map.clone())?;

    let traceable = plugin(options.clone());
    let mut visitor = traceable.visitor(state, &source_map);
    parsed.module.visit_mut_with(&mut visitor);

    let mut injections = visitor.into_injections();
    injections.sort_by_key(|injection| injection.insert_at);

    // The parser sees the text without a leading BOM
    let text: &str = &parsed.source_file.src;
    let stripped = code.strip_suffix(text).unwrap_or_default();

    let start = parsed.source_file.start_pos;
    let mut output = String::with_capacity(code.len() + injections.len() * 32);
    output.push_str(stripped);
    let mut cursor = 0;
    for injection in &injections {
        let offset = (injection.insert_at - start).0 as usize;
        output.push_str(&text[cursor..offset]);
        output.push_str(&render_arguments(injection));
        cursor = offset;
    }
    output.push_str(&text[cursor..]);

    Ok(TransformOutput {
        code: output,
        injections,
    })
}

/// Source text for the appended `'path', line` arguments.
fn render_arguments(injection: &Injection) -> String {
    let literals = format!("{}, {}", quote_js_string(&injection.path), injection.line);
    if injection.was_empty {
        literals
    } else {
        format!(", {}", literals)
    }
}
