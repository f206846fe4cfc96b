//! Detection of `Log.traceable(...)` call sites.
//!
//! Detection is purely syntactic. A call matches when its callee is the
//! non-computed member expression `Log.traceable`, whatever `Log` is bound to.
//! Parentheses around the object are transparent: `(Log).traceable()` matches.
//! Aliased or re-exported facades (`const L = Log; L.traceable()`) are not
//! detected, and an unrelated local named `Log` with a `traceable` method is.

use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, Lit, MemberExpr, MemberProp, ParenExpr};

/// Object name of the logging facade.
pub const FACADE_NAME: &str = "Log";

/// Method name of the traceable logging call.
pub const TRACEABLE_METHOD: &str = "traceable";

/// A matched `Log.traceable(...)` call, borrowed from the AST for one visit.
#[derive(Debug)]
pub struct CallSite<'a> {
    pub object: &'a str,
    pub property: &'a str,
    pub args: &'a [ExprOrSpread],
}

impl<'a> CallSite<'a> {
    /// Returns the call site if `call` has the traceable shape.
    pub fn detect(call: &'a CallExpr) -> Option<Self> {
        let Callee::Expr(callee) = &call.callee else {
            return None;
        };
        let Expr::Member(MemberExpr { obj, prop, .. }) = &**callee else {
            return None;
        };
        let mut object = &**obj;
        while let Expr::Paren(ParenExpr { expr, .. }) = object {
            object = &**expr;
        }
        let Expr::Ident(object) = object else {
            return None;
        };
        // Computed access (`Log["traceable"]`, `Log[traceable]`) is a different prop kind
        let MemberProp::Ident(property) = prop else {
            return None;
        };

        let (object, property) = (object.sym.as_str(), property.sym.as_str());
        if object != FACADE_NAME || property != TRACEABLE_METHOD {
            return None;
        }

        Some(Self {
            object,
            property,
            args: &call.args,
        })
    }

    /// Whether the arguments already end in a `'path', line` literal pair.
    pub fn has_location_pair(&self) -> bool {
        has_location_pair(self.args)
    }
}

/// Check whether the last two arguments are a string literal followed by a
/// numeric literal. Spread arguments never count as literals.
pub fn has_location_pair(args: &[ExprOrSpread]) -> bool {
    let [.., path, line] = args else {
        return false;
    };

    let is_literal = |arg: &ExprOrSpread, want_str: bool| {
        arg.spread.is_none()
            && match &*arg.expr {
                Expr::Lit(Lit::Str(_)) => want_str,
                Expr::Lit(Lit::Num(_)) => !want_str,
                _ => false,
            }
    };

    is_literal(path, true) && is_literal(line, false)
}
