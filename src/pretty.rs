//! Cosmetic line breaking for emitted grammar text. Purely textual.

pub fn prettify(grammar: &str) -> String {
    grammar
        .replace('{', "{\n  ")
        .replace('}', "\n}")
        .replace(", ", ",\n  ")
}
