use tyreflect_lib::types::SCALARS;

pub struct ScalarsArgs {
    pub namespace: Option<String>,
}

pub fn run(args: ScalarsArgs) {
    print!("{}", render(args.namespace.as_deref().unwrap_or("type")));
}

/// One `name  namespace.member` row per scalar, names padded to align.
pub fn render(namespace: &str) -> String {
    let width = SCALARS.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for scalar in SCALARS {
        out.push_str(&format!(
            "{:width$}  {}.{}\n",
            scalar.name,
            namespace,
            scalar.runtime,
            width = width
        ));
    }
    out
}
