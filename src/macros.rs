// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // s!() is String::new()
    () => {
        ::std::string::String::new()
    };
    // s!(x) is String::from(x)
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
