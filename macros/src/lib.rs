use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

#[proc_macro]
pub fn gen_color(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Colors must have exactly 3 channel fields; the alpha field is added by the macro.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified channel fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    // Add some derives.
    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug)]
        })
        .unwrap();
    input.attrs.extend(attr);

    // Every color carries an alpha component next to its 3 channels.
    if let syn::Fields::Named(ref mut named) = input.fields {
        named.named.push(
            syn::Field::parse_named
                .parse2(syn::parse_quote! {
                    /// The alpha component of the color.
                    pub alpha: crate::color::Component
                })
                .unwrap(),
        );
    }

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color having this color space.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
                alpha: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    alpha,
                }
            }

            /// Return the 3 channels of this color, without alpha.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }

            /// Create a color from generic components and an alpha value.
            pub fn from_components(
                components: crate::color::Components,
                alpha: crate::color::Component,
            ) -> Self {
                Self::new(components.0, components.1, components.2, alpha)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
