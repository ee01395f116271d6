/// Expands to the path of the function it is used in, e.g.
/// `my_crate::handlers::login`.
///
/// Closures are reported as the function that defines them.
///
/// ```
/// fn current() -> &'static str {
///     kdebug::function_name!()
/// }
///
/// assert!(current().ends_with("::current"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        $crate::__strip_function_name(::core::any::type_name_of_val(&__here))
    }};
}

#[doc(hidden)]
pub fn __strip_function_name(name: &'static str) -> &'static str {
    let mut name = name.strip_suffix("::__here").unwrap_or(name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}
