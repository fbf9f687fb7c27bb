//! Reads the exported config object out of a JavaScript config file.
//!
//! The file is parsed with swc and never executed, so only literal values are
//! understood. Anything else is skipped and reported back as a warning.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use serde_json::{Map, Number, Value};
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::{
    AssignTarget, Decl, Expr, ExprOrSpread, Lit, MemberProp, Module, ModuleDecl, ModuleItem,
    ObjectLit, Pat, Prop, PropName, PropOrSpread, SimpleAssignTarget, Stmt, UnaryOp,
};
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// Literal values recovered from a config script.
#[derive(Debug, Default)]
pub struct ScriptConfig {
    pub values: Map<String, Value>,
    /// Properties that could not be evaluated statically.
    pub warnings: Vec<String>,
}

/// Parse config script source and extract its exported object.
///
/// Recognized shapes: `module.exports = {...}`, `export default {...}`,
/// either of them wrapping the object in a single-argument call such as
/// `defineConfig({...})`, or naming a top-level `const` that holds the object.
pub fn parse_config_script(code: String, file_path: &str) -> Result<ScriptConfig> {
    let module = parse_module(code, file_path)?;

    let bindings = top_level_bindings(&module);
    let exported = find_exported_expr(&module)
        .ok_or_else(|| anyhow!("No `module.exports` or `export default` found"))?;

    let object = resolve_object(exported, &bindings)
        .ok_or_else(|| anyhow!("Exported config is not an object literal"))?;

    let mut warnings = Vec::new();
    let values = object_to_map(object, "", &mut warnings);
    Ok(ScriptConfig { values, warnings })
}

fn parse_module(code: String, file_path: &str) -> Result<Module> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::default());
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        // TypeScript syntax accepts plain JS configs as well as `satisfies`/`as`.
        let syntax = Syntax::Typescript(TsSyntax::default());
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse config script: {:?}", e))
    })
}

/// Top-level `const`/`let`/`var` initializers by binding name.
fn top_level_bindings(module: &Module) -> HashMap<String, &Expr> {
    let mut bindings = HashMap::new();
    for item in &module.body {
        let ModuleItem::Stmt(Stmt::Decl(Decl::Var(var))) = item else {
            continue;
        };
        for decl in &var.decls {
            if let Pat::Ident(ident) = &decl.name
                && let Some(init) = &decl.init
            {
                bindings.insert(ident.id.sym.to_string(), &**init);
            }
        }
    }
    bindings
}

/// The last exported expression wins, mirroring evaluation order.
fn find_exported_expr(module: &Module) -> Option<&Expr> {
    let mut exported = None;
    for item in &module.body {
        match item {
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(export)) => {
                exported = Some(&*export.expr);
            }
            ModuleItem::Stmt(Stmt::Expr(stmt)) => {
                if let Expr::Assign(assign) = &*stmt.expr
                    && is_module_exports(&assign.left)
                {
                    exported = Some(&*assign.right);
                }
            }
            _ => {}
        }
    }
    exported
}

fn is_module_exports(target: &AssignTarget) -> bool {
    let AssignTarget::Simple(SimpleAssignTarget::Member(member)) = target else {
        return false;
    };
    matches!(&*member.obj, Expr::Ident(obj) if obj.sym == "module")
        && matches!(&member.prop, MemberProp::Ident(prop) if prop.sym == "exports")
}

fn resolve_object<'a>(expr: &'a Expr, bindings: &HashMap<String, &'a Expr>) -> Option<&'a ObjectLit> {
    match unwrap_ts_expr(expr) {
        Expr::Object(obj) => Some(obj),
        Expr::Ident(ident) => bindings
            .get(ident.sym.as_str())
            .and_then(|init| resolve_object(init, bindings)),
        Expr::Call(call) if call.args.len() == 1 => call
            .args
            .first()
            .filter(|arg| arg.spread.is_none())
            .and_then(|arg| resolve_object(&arg.expr, bindings)),
        _ => None,
    }
}

/// Unwrap TypeScript-specific expression wrappers to get the inner expression.
fn unwrap_ts_expr(expr: &Expr) -> &Expr {
    match expr {
        Expr::TsAs(ts_as) => unwrap_ts_expr(&ts_as.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_ts_expr(&ts_const.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_ts_expr(&ts_sat.expr),
        Expr::Paren(paren) => unwrap_ts_expr(&paren.expr),
        _ => expr,
    }
}

fn object_to_map(obj: &ObjectLit, parent: &str, warnings: &mut Vec<String>) -> Map<String, Value> {
    let mut map = Map::new();

    for prop in &obj.props {
        let PropOrSpread::Prop(prop) = prop else {
            warnings.push(format!("Skipped spread element in `{}`", display_path(parent)));
            continue;
        };
        let Prop::KeyValue(kv) = &**prop else {
            warnings.push(format!(
                "Skipped non key-value property in `{}`",
                display_path(parent)
            ));
            continue;
        };
        let Some(key) = prop_name(&kv.key) else {
            warnings.push(format!("Skipped computed key in `{}`", display_path(parent)));
            continue;
        };

        let path = if parent.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", parent, key)
        };
        match expr_to_value(&kv.value, &path, warnings) {
            Some(value) => {
                map.insert(key, value);
            }
            None => warnings.push(format!("Skipped non-literal value for `{}`", path)),
        }
    }

    map
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}

fn prop_name(name: &PropName) -> Option<String> {
    match name {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(|s| s.to_string()),
        PropName::Num(n) => Some(n.value.to_string()),
        _ => None,
    }
}

fn expr_to_value(expr: &Expr, path: &str, warnings: &mut Vec<String>) -> Option<Value> {
    match unwrap_ts_expr(expr) {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|v| Value::String(v.to_string())),
        Expr::Lit(Lit::Bool(b)) => Some(Value::Bool(b.value)),
        Expr::Lit(Lit::Null(_)) => Some(Value::Null),
        Expr::Lit(Lit::Num(n)) => number_value(n.value),
        Expr::Unary(unary) if unary.op == UnaryOp::Minus => match &*unary.arg {
            Expr::Lit(Lit::Num(n)) => number_value(-n.value),
            _ => None,
        },
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => tpl
            .quasis
            .first()
            .and_then(|q| q.cooked.as_ref())
            .and_then(|s| s.as_str().map(|s| Value::String(s.to_string()))),
        Expr::Array(arr) => {
            let mut items = Vec::new();
            for (index, elem) in arr.elems.iter().enumerate() {
                let item_path = format!("{}[{}]", path, index);
                match elem {
                    Some(ExprOrSpread { spread: None, expr }) => {
                        match expr_to_value(expr, &item_path, warnings) {
                            Some(value) => items.push(value),
                            None => warnings
                                .push(format!("Skipped non-literal value for `{}`", item_path)),
                        }
                    }
                    Some(_) => warnings.push(format!("Skipped spread element in `{}`", path)),
                    None => items.push(Value::Null),
                }
            }
            Some(Value::Array(items))
        }
        Expr::Object(obj) => Some(Value::Object(object_to_map(obj, path, warnings))),
        _ => None,
    }
}

fn number_value(n: f64) -> Option<Value> {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Some(Value::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number)
    }
}
