use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derive macro listing every member of a fieldless enum.
///
/// Implements `mapper::Enumerable` with `ENTRIES` in declaration order, which
/// lets `EnumMapper::from_enum` build a mapper without an explicit member list.
///
/// # Example
///
/// ```ignore
/// #[derive(Enumerable, Clone, Copy, PartialEq)]
/// pub enum Side {
///     Buy,
///     Sell,
/// }
///
/// assert_eq!(Side::ENTRIES, &[Side::Buy, Side::Sell]);
/// ```
#[proc_macro_derive(Enumerable)]
pub fn derive_enumerable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Enumerable only supports enums",
            ))
        }
    };

    let mut entries = Vec::new();
    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Enumerable only supports fieldless variants",
            ));
        }
        let ident = &variant.ident;
        entries.push(quote! { Self::#ident });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::mapper::Enumerable for #name #ty_generics #where_clause {
            const ENTRIES: &'static [Self] = &[#(#entries),*];
        }
    })
}
