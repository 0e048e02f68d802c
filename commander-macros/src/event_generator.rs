use crate::derive_utils::derives_serde;
use crate::field_utils::ensure_trailing_field;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Attribute, Item, Result, Token, Type, parse_macro_input};

/// #[event_generator] 宏实现
/// - 若缺失则在末尾追加字段：`pending_events: PendingEvents<E>`；
///   结构体派生了 serde 时，该字段带 `#[serde(skip)]`，待发布事件不参与序列化
/// - 自动实现 `::commander_domain::event_generator::EventGenerator`
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as GeneratorAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[event_generator] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let Some(event_ty) = cfg.event_ty else {
        return syn::Error::new(
            st.ident.span(),
            "missing 'event' in attribute, e.g., #[event_generator(event = OrderEvent)]",
        )
        .to_compile_error()
        .into();
    };

    let skip_serde = derives_serde(&st.attrs);
    let st_span = st.span();

    // 仅支持具名字段结构体
    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st_span, "only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    let field_ident: syn::Ident = syn::parse_quote! { pending_events };
    let field_ty: Type =
        syn::parse_quote! { ::commander_domain::event_generator::PendingEvents<#event_ty> };
    let field_attrs: Vec<Attribute> = if skip_serde {
        vec![syn::parse_quote! { #[serde(skip)] }]
    } else {
        Vec::new()
    };
    ensure_trailing_field(fields_named, &field_ident, &field_ty, &field_attrs);

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    let expanded = quote! {
        #st

        impl #impl_generics ::commander_domain::event_generator::EventGenerator for #ident #ty_generics #where_clause {
            type Event = #event_ty;

            fn pending_events(&self) -> &::commander_domain::event_generator::PendingEvents<Self::Event> {
                &self.pending_events
            }

            fn pending_events_mut(&mut self) -> &mut ::commander_domain::event_generator::PendingEvents<Self::Event> {
                &mut self.pending_events
            }
        }
    };

    TokenStream::from(expanded)
}

// -------- parsing --------

struct GeneratorAttrConfig {
    event_ty: Option<Type>,
}

impl Parse for GeneratorAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self { event_ty: None });
        }

        let key: syn::Ident = input.parse()?;
        if key != "event" {
            return Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'event'",
            ));
        }
        let _eq: Token![=] = input.parse()?;
        let ty: Type = input.parse()?;
        let _trailing: Option<Token![,]> = input.parse()?;

        Ok(Self { event_ty: Some(ty) })
    }
}
