#![recursion_limit = "128"]

extern crate proc_macro;
extern crate proc_macro2;

/// Support for newtype auto-derive.
mod struct_impl;

use proc_macro::TokenStream;
use quote::quote;
use syn::*;

#[proc_macro_derive(Numeric)]
pub fn numeric_derive(input: TokenStream) -> TokenStream {
    // Construct a representation of Rust code as a syntax tree
    // that we can manipulate
    let ast: DeriveInput = match syn::parse(input) {
        Ok(ast) => ast,
        Err(e) => return e.to_compile_error().into(),
    };

    impl_numeric_macro(&ast)
}

fn impl_numeric_macro(ast: &DeriveInput) -> TokenStream {
    let imp = match &ast.data {
        Data::Struct(sd) => struct_impl::numeric(ast, sd),
        _ => {
            let msg = format!(
                "`Numeric` can only be derived for single-field structs, `{}` is not a struct",
                ast.ident
            );
            quote! { compile_error!(#msg); }
        }
    };
    imp.into()
}
