use std::sync::{Arc, LazyLock};

use crate::{Lang, LangInner};

/// Static metadata for a bundled grammar.
#[derive(Debug, Clone, Copy)]
pub struct LangInfo {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

macro_rules! define_langs {
    (
        $(
            $fn_name:ident => {
                feature: $feature:literal,
                name: $name:literal,
                ts_lang: $ts_lang:expr,
                extensions: [$($ext:literal),* $(,)?] $(,)?
            }
        ),* $(,)?
    ) => {
        $(
            #[cfg(feature = $feature)]
            pub fn $fn_name() -> Lang {
                paste::paste! {
                    static [<$fn_name:upper _LANG>]: LazyLock<Lang> = LazyLock::new(|| {
                        Arc::new(LangInner::new($name, $ts_lang.into()))
                    });
                    Arc::clone(&[<$fn_name:upper _LANG>])
                }
            }
        )*

        pub fn from_ext(ext: &str) -> Option<Lang> {
            match ext.to_ascii_lowercase().as_str() {
                $(
                    #[cfg(feature = $feature)]
                    $($ext)|* => Some($fn_name()),
                )*
                _ => None,
            }
        }

        pub fn all() -> Vec<Lang> {
            vec![
                $(
                    #[cfg(feature = $feature)]
                    $fn_name(),
                )*
            ]
        }

        pub fn all_info() -> Vec<LangInfo> {
            vec![
                $(
                    #[cfg(feature = $feature)]
                    LangInfo {
                        name: $name,
                        extensions: &[$($ext),*],
                    },
                )*
            ]
        }
    };
}

define_langs! {
    typescript => {
        feature: "lang-typescript",
        name: "typescript",
        ts_lang: arborium_typescript::language(),
        extensions: ["ts", "mts", "cts", "js", "mjs", "cjs"],
    },
    tsx => {
        feature: "lang-tsx",
        name: "tsx",
        ts_lang: arborium_tsx::language(),
        extensions: ["tsx", "jsx"],
    },
}

/// Pick the grammar for a module id such as `src/index.ts` or
/// `/abs/App.tsx?vue&type=script`.
///
/// Query strings and fragments are ignored. Unknown or missing extensions
/// fall back to the first enabled grammar.
pub fn for_path(path: &str) -> Option<Lang> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    file_name
        .rsplit_once('.')
        .and_then(|(_, ext)| from_ext(ext))
        .or_else(|| all().into_iter().next())
}
