// src/macros.rs

/// `s!()` is an empty `String`, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Field list: `row!["a", "b"]` is `vec![String::from("a"), String::from("b")]`.
#[macro_export]
macro_rules! row {
    () => {
        ::std::vec::Vec::<::std::string::String>::new()
    };
    ($($field:expr),+ $(,)?) => {
        vec![$( ::std::string::String::from($field) ),+]
    };
}
