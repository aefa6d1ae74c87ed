//! Procedural macros of `chronal`

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, parse_macro_input};

/// Mark a user defined functor as transparent: it deduces the operand types at the
/// call site instead of fixing them in its own type. `is_transparent!` answers
/// `true` for the deriving type
#[proc_macro_derive(TransparentFunctor)]
pub fn transparent_functor_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    if let Data::Union(_) = input.data {
        panic!("TransparentFunctor can only be derived for structs and enums");
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::chronal::functional::TransparentFunctor for #name #ty_generics #where_clause {
            type IsTransparent = ();
        }
    };

    expanded.into()
}
