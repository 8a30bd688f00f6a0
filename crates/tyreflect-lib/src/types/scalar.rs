//! The scalar vocabulary.
//!
//! Mirrors the branded placeholder types exported by the runtime's
//! composable module (`export type u32 = number & { __brand: 'u32' }`).
//! Adding a scalar there means adding it here.

/// A scalar placeholder name and the runtime namespace member it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar {
    /// Name used in annotations (`str`, `u64`).
    pub name: &'static str,
    /// Member of the runtime type namespace (`string`, `u64`).
    pub runtime: &'static str,
}

const fn scalar(name: &'static str, runtime: &'static str) -> Scalar {
    Scalar { name, runtime }
}

pub const SCALARS: &[Scalar] = &[
    scalar("str", "string"),
    scalar("bool", "bool"),
    scalar("i8", "i8"),
    scalar("u8", "u8"),
    scalar("i16", "i16"),
    scalar("u16", "u16"),
    scalar("i32", "i32"),
    scalar("u32", "u32"),
    scalar("i64", "i64"),
    scalar("u64", "u64"),
    scalar("i128", "i128"),
    scalar("u128", "u128"),
    scalar("i256", "i256"),
    scalar("u256", "u256"),
    scalar("f32", "f32"),
    scalar("f64", "f64"),
];

/// Runtime member for a scalar placeholder name.
pub fn runtime_name(name: &str) -> Option<&'static str> {
    SCALARS.iter().find(|s| s.name == name).map(|s| s.runtime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(runtime_name("str"), Some("string"));
        assert_eq!(runtime_name("u256"), Some("u256"));
        assert_eq!(runtime_name("string"), None);
        assert_eq!(runtime_name("U32"), None);
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in SCALARS.iter().enumerate() {
            for b in &SCALARS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
