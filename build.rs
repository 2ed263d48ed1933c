use std::{
    env, fs,
    path::{Path, PathBuf},
};

use syn::{Expr, ExprLit, ExprMethodCall, File, Lit, visit::Visit};

#[derive(Debug, Clone)]
struct ProcedureEntry {
    name: String,
    method: &'static str,
    source: String,
}

impl ProcedureEntry {
    fn kind(&self) -> &'static str {
        if self.method == "GET" { "query" } else { "mutation" }
    }
}

struct ProcedureVisitor {
    source: String,
    procedures: Vec<ProcedureEntry>,
}

impl<'ast> Visit<'ast> for ProcedureVisitor {
    fn visit_expr_method_call(&mut self, node: &'ast ExprMethodCall) {
        if node.method == "route" {
            let path = node.args.first().and_then(string_literal);
            let methods = node.args.iter().nth(1).map(handler_methods).unwrap_or_default();
            match path {
                Some(path) => {
                    let name = path.trim_start_matches('/').to_string();
                    for method in methods {
                        self.procedures.push(ProcedureEntry {
                            name: name.clone(),
                            method,
                            source: self.source.clone(),
                        });
                    }
                }
                None => println!(
                    "cargo:warning=Skipping non-literal procedure path in {}",
                    self.source
                ),
            }
        }

        syn::visit::visit_expr_method_call(self, node);
    }
}

fn string_literal(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(value),
            ..
        }) => Some(value.value()),
        Expr::Paren(expr) => string_literal(&expr.expr),
        Expr::Reference(expr) => string_literal(&expr.expr),
        _ => None,
    }
}

// `get(a).post(b)` yields GET and POST
fn handler_methods(expr: &Expr) -> Vec<&'static str> {
    let mut names = Vec::new();
    collect_call_names(expr, &mut names);
    names.reverse();

    let mut methods: Vec<&'static str> = Vec::new();
    for name in names {
        if let Some(method) = http_method(&name) {
            if !methods.contains(&method) {
                methods.push(method);
            }
        }
    }
    methods
}

fn collect_call_names(expr: &Expr, out: &mut Vec<String>) {
    match expr {
        Expr::Call(call) => {
            if let Expr::Path(path) = &*call.func {
                if let Some(segment) = path.path.segments.last() {
                    out.push(segment.ident.to_string());
                }
            }
        }
        Expr::MethodCall(call) => {
            out.push(call.method.to_string());
            collect_call_names(&call.receiver, out);
        }
        Expr::Paren(expr) => collect_call_names(&expr.expr, out),
        _ => {}
    }
}

fn http_method(name: &str) -> Option<&'static str> {
    match name {
        "get" => Some("GET"),
        "post" => Some("POST"),
        "put" => Some("PUT"),
        "patch" => Some("PATCH"),
        "delete" => Some("DELETE"),
        _ => None,
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn parse_route_file(path: &Path, manifest_dir: &Path) -> Vec<ProcedureEntry> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {}", path.display(), err));
    let parsed: File = syn::parse_file(&content)
        .unwrap_or_else(|err| panic!("failed to parse {}: {}", path.display(), err));
    let source = path
        .strip_prefix(manifest_dir)
        .unwrap_or(path)
        .display()
        .to_string();
    let mut visitor = ProcedureVisitor {
        source,
        procedures: Vec::new(),
    };
    visitor.visit_file(&parsed);
    visitor.procedures
}

fn route_files(routes_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(routes_dir)
        .unwrap_or_else(|err| panic!("failed to read {}: {}", routes_dir.display(), err))
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {}", err))
                .path()
        })
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("rs"))
        .collect();
    files.sort();
    files
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(&manifest_dir);
    let routes_dir = manifest_path.join("src/routes");

    let files = route_files(&routes_dir);
    for file in &files {
        println!("cargo:rerun-if-changed={}", file.display());
    }

    let mut procedures: Vec<ProcedureEntry> = files
        .iter()
        .flat_map(|file| parse_route_file(file, manifest_path))
        .collect();
    procedures.sort_by(|a, b| a.name.cmp(&b.name).then(a.method.cmp(b.method)));

    let mut output = String::from("pub static PROCEDURES: &[ProcedureInfo] = &[\n");
    for procedure in &procedures {
        output.push_str(&format!(
            "    ProcedureInfo {{ name: \"{}\", kind: \"{}\", method: \"{}\", source: \"{}\" }},\n",
            escape(&procedure.name),
            procedure.kind(),
            procedure.method,
            escape(&procedure.source)
        ));
    }
    output.push_str("];\n");

    let out_dir = env::var("OUT_DIR").expect("missing OUT_DIR");
    let out_path = Path::new(&out_dir).join("procedures_generated.rs");
    fs::write(&out_path, output)
        .unwrap_or_else(|err| panic!("failed to write {}: {}", out_path.display(), err));
}
