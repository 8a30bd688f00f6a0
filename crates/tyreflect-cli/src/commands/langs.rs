pub fn run() {
    print!("{}", render());
}

pub fn render() -> String {
    let langs = tyreflect_langs::all_info();
    let mut out = format!("Supported languages ({}):\n", langs.len());
    for info in langs {
        let extensions: Vec<String> = info.extensions.iter().map(|e| format!(".{}", e)).collect();
        out.push_str(&format!("  {:<12}{}\n", info.name, extensions.join(" ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(all(feature = "lang-typescript", feature = "lang-tsx"))]
    fn lists_bundled_grammars() {
        insta::assert_snapshot!(render(), @r"
        Supported languages (2):
          typescript  .ts .mts .cts .js .mjs .cjs
          tsx         .tsx .jsx
        ");
    }
}
