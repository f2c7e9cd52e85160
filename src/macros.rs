// src/macros.rs

/// `String` shorthand: `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Static token table shorthand for the vocabulary lists.
#[macro_export]
macro_rules! tokens {
    ($($tok:literal),* $(,)?) => {
        &[$($tok),*]
    };
}
