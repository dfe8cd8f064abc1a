use quote::quote;
use syn::*;

pub fn numeric(ast: &DeriveInput, data: &DataStruct) -> proc_macro2::TokenStream {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let mut fields = data.fields.iter();
    let field = match (fields.next(), fields.next()) {
        (Some(field), None) => field,
        _ => {
            let msg = format!(
                "`Numeric` can only be derived for structs with exactly one field, `{}` has {}",
                name,
                data.fields.iter().count()
            );
            return quote! { compile_error!(#msg); };
        }
    };

    let repr = &field.ty;
    // tuple structs get `Self(r)` and `self.0`, named ones use the field name
    let (construct, project) = match &field.ident {
        Some(ident) => (quote! { #name { #ident: r } }, quote! { self.#ident }),
        None => (quote! { #name(r) }, quote! { self.0 }),
    };

    quote! {
        impl #impl_generics ::number::Numeric for #name #ty_generics #where_clause {
            type Repr = #repr;

            #[inline]
            fn from_repr(r: #repr) -> Self { #construct }

            #[inline]
            fn into_repr(self) -> #repr { #project }
        }
    }
}
