mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Implements `sce_error::ErrorKind` for a struct, reading the report from an `error` attribute.
///
/// ```
/// use sce_attrs::ErrorKind;
/// use sce_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unknown character", labels = ["this character"])]
/// pub struct UnknownCharacter {
///     pub character: char,
/// }
/// ```
///
/// The attribute takes up to three expressions:
///
/// - `message`: the headline of the report.
/// - `labels`: texts to attach to the error's spans, in order. Extra labels are dropped.
/// - `help`: an optional hint on how to fix the input.
///
/// The fields of a struct with named fields are in scope inside each expression, by reference.
/// A report without spans points at the start of the input.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
