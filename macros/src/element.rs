use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

/// #[derive(Element)] generates an `Element` impl whose `RELOCATABLE`
/// constant comes from the inherent-const `Copy` probe.
///
/// The probe runs on `Self` inside the impl, so for non-generic types it sees
/// the concrete type and answers exactly.
pub fn expand_derive_element(input: DeriveInput) -> TokenStream2 {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        // SAFETY: relocation is only claimed when the type is `Copy`.
        unsafe impl #impl_generics ::tola_seq::detect::Element for #ident #ty_generics #where_clause {
            const RELOCATABLE: bool = {
                #[allow(unused_imports)]
                use ::tola_seq::detect::CopyFallback;
                ::tola_seq::detect::Detect::<#ident #ty_generics>::IS_COPY
            };
        }
    }
}
