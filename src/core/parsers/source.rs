use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceFile, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// A parsed module together with the source file its spans point into.
pub struct ParsedSource {
    pub module: Module,
    pub source_file: Arc<SourceFile>,
}

/// Pick the swc syntax for a file based on its extension.
///
/// `.ts`, `.mts` and `.cts` are plain TypeScript, `.tsx` is TypeScript with JSX.
/// Anything else is parsed as ECMAScript with JSX enabled, which also covers
/// `.js`, `.jsx`, `.mjs` and `.cjs`.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match extension {
        "ts" | "mts" | "cts" => Syntax::Typescript(TsSyntax::default()),
        "tsx" => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Parse a source string into an AST.
///
/// Accepts a shared SourceMap so the caller can resolve spans (line numbers,
/// byte offsets) after parsing.
pub fn parse_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e.kind()))?;

        Ok(ParsedSource {
            module,
            source_file,
        })
    })
}
