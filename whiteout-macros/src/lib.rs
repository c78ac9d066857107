use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, parse_macro_input};

/// Compiles a pixel scan kernel for the CPU targets whiteout dispatches on.
///
/// This macro expands to `#[multiversion(targets(...))]`, so the crate using
/// it must depend on `multiversion` as well.
///
/// # Example
///
/// ```
/// use whiteout_macros::scan_targets;
///
/// #[scan_targets]
/// pub fn count_bright(buf: &[u8], threshold: u8) -> usize {
///     buf.iter().filter(|v| **v > threshold).count()
/// }
///
/// assert_eq!(count_bright(&[0, 241, 255], 240), 2);
/// ```
#[proc_macro_attribute]
pub fn scan_targets(_attr: TokenStream, input: TokenStream) -> TokenStream {
    let func = parse_macro_input!(input as ItemFn);

    // debug builds only carry the baselines
    #[cfg(debug_assertions)]
    let expanded = quote! {
        #[multiversion::multiversion(targets(
            "x86_64+sse2",
            "aarch64+neon",
        ))]
        #func
    };

    // byte compares vectorize well, wider registers pay off directly
    #[cfg(not(debug_assertions))]
    let expanded = quote! {
        #[multiversion::multiversion(targets(
            "x86_64+avx512f+avx512bw",
            "x86_64+avx2",
            "x86_64+sse4.2",
            "x86_64+sse2",
            "aarch64+neon",
        ))]
        #func
    };

    TokenStream::from(expanded)
}
