use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Item, LitStr, Result, Token, parse_macro_input};

/// #[domain_event] 宏实现
/// - 支持结构体与枚举（任意字段形态）
/// - 合并/追加默认派生：Debug, Clone
/// - 生成 `::commander_domain::domain_event::DomainEvent` 实现（event_name）
/// - 结构体：`#[domain_event(name = "...")]` 覆写事件名
/// - 枚举：变体可用 `#[event(name = "...")]` 覆写，默认 `<类型事件名>.<变体>`
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EventAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    let required: Vec<syn::Path> = vec![syn::parse_quote!(Debug), syn::parse_quote!(Clone)];

    let event_impl = match &mut input {
        Item::Struct(st) => {
            apply_derives(&mut st.attrs, required);

            let ident = &st.ident;
            let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();
            let body = match &cfg.name {
                Some(lit) => quote! { ::std::string::String::from(#lit) },
                None => quote! { ::commander_domain::domain_event::event_name_of::<Self>() },
            };

            quote! {
                impl #impl_generics ::commander_domain::domain_event::DomainEvent for #ident #ty_generics #where_clause {
                    fn event_name(&self) -> ::std::string::String {
                        #body
                    }
                }
            }
        }
        Item::Enum(en) => {
            if let Some(lit) = &cfg.name {
                return syn::Error::new(
                    lit.span(),
                    "'name' is not supported on enums; use #[event(name = ...)] on variants",
                )
                .to_compile_error()
                .into();
            }

            apply_derives(&mut en.attrs, required);

            let mut arms = Vec::new();
            for v in &mut en.variants {
                let mut override_name: Option<LitStr> = None;
                let mut retained_attrs = Vec::new();

                for a in v.attrs.iter() {
                    if a.path().is_ident("event") {
                        if override_name.is_some() {
                            return syn::Error::new(
                                a.span(),
                                "duplicate #[event(...)] specified for this variant",
                            )
                            .to_compile_error()
                            .into();
                        }
                        match a.parse_args::<EventAttrConfig>() {
                            Ok(EventAttrConfig { name: Some(lit) }) => override_name = Some(lit),
                            Ok(EventAttrConfig { name: None }) => {
                                return syn::Error::new(a.span(), "expected #[event(name = \"...\")]")
                                    .to_compile_error()
                                    .into();
                            }
                            Err(err) => return err.to_compile_error().into(),
                        }
                    } else {
                        retained_attrs.push(a.clone());
                    }
                }
                v.attrs = retained_attrs;

                let v_ident = &v.ident;
                let v_str = v_ident.to_string();
                let name = match override_name {
                    Some(lit) => quote! { ::std::string::String::from(#lit) },
                    None => quote! {
                        ::std::format!(
                            "{}.{}",
                            ::commander_domain::domain_event::event_name_of::<Self>(),
                            #v_str
                        )
                    },
                };
                arms.push(quote! { Self::#v_ident { .. } => #name, });
            }

            let ident = &en.ident;
            let (impl_generics, ty_generics, where_clause) = en.generics.split_for_impl();

            quote! {
                impl #impl_generics ::commander_domain::domain_event::DomainEvent for #ident #ty_generics #where_clause {
                    fn event_name(&self) -> ::std::string::String {
                        match self {
                            #(#arms)*
                        }
                    }
                }
            }
        }
        other => {
            return syn::Error::new(
                other.span(),
                "#[domain_event] can only be used on struct or enum types",
            )
            .to_compile_error()
            .into();
        }
    };

    let expanded = quote! {
        #input

        #event_impl
    };

    TokenStream::from(expanded)
}

// -------- parsing --------

// 解析宏参数：name = "..."
struct EventAttrConfig {
    name: Option<LitStr>,
}

impl Parse for EventAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self { name: None });
        }

        let key: syn::Ident = input.parse()?;
        if key != "name" {
            return Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'name'",
            ));
        }
        let _eq: Token![=] = input.parse()?;
        let lit: LitStr = input.parse()?;
        let _trailing: Option<Token![,]> = input.parse()?;

        Ok(Self { name: Some(lit) })
    }
}
