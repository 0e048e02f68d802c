use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::parse::{Parse, ParseStream};
use syn::{DeriveInput, Result, Token, Type, parse_macro_input};

/// #[derive(Command)] 宏实现
/// - `NAME`：`concat!(module_path!(), "::", "<Ident>")`，或 `#[command(name = "...")]`
/// - `Output`：`#[command(output = Type)]`，默认 `()`
pub(crate) fn expand(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    let cfg = match CommandAttrConfig::from_attrs(&input.attrs) {
        Ok(cfg) => cfg,
        Err(err) => return err.to_compile_error().into(),
    };

    let ident = &input.ident;
    let ident_str = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let name = match cfg.name {
        Some(lit) => quote! { #lit },
        None => quote! { ::core::concat!(::core::module_path!(), "::", #ident_str) },
    };
    let output = cfg.output.unwrap_or_else(|| syn::parse_quote! { () });

    let expanded = quote! {
        impl #impl_generics ::commander_application::command::Command for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            type Output = #output;
        }
    };

    TokenStream::from(expanded)
}

// -------- parsing --------

#[derive(Default)]
struct CommandAttrConfig {
    name: Option<syn::LitStr>,
    output: Option<Type>,
}

impl CommandAttrConfig {
    fn from_attrs(attrs: &[syn::Attribute]) -> Result<Self> {
        let mut cfg = CommandAttrConfig::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("command")) {
            let elems =
                attr.parse_args_with(Punctuated::<CommandAttrElem, Token![,]>::parse_terminated)?;
            for elem in elems {
                match elem {
                    CommandAttrElem::Name(lit) => {
                        if cfg.name.is_some() {
                            return Err(syn::Error::new(
                                lit.span(),
                                "duplicate key 'name' in attribute",
                            ));
                        }
                        cfg.name = Some(lit);
                    }
                    CommandAttrElem::Output(ty) => {
                        if cfg.output.is_some() {
                            return Err(syn::Error::new(
                                ty.span(),
                                "duplicate key 'output' in attribute",
                            ));
                        }
                        cfg.output = Some(*ty);
                    }
                }
            }
        }

        Ok(cfg)
    }
}

enum CommandAttrElem {
    Name(syn::LitStr),
    Output(Box<Type>),
}

impl Parse for CommandAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: syn::Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        if key == "name" {
            Ok(CommandAttrElem::Name(input.parse()?))
        } else if key == "output" {
            Ok(CommandAttrElem::Output(Box::new(input.parse()?)))
        } else {
            Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'name' | 'output'",
            ))
        }
    }
}
