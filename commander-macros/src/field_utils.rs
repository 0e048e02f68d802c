use syn::{Attribute, Field, FieldsNamed, Type};

fn has_field_named(fields_named: &FieldsNamed, name: &str) -> bool {
    fields_named
        .named
        .iter()
        .any(|f| f.ident.as_ref().map(|i| i == name).unwrap_or(false))
}

/// 确保具名字段结构体包含给定字段
/// - 缺失时追加在末尾，并带上 `attrs`；
/// - 已存在时保持原定义不变（由使用者自行保证类型一致）。
pub(crate) fn ensure_trailing_field(
    fields_named: &mut FieldsNamed,
    name: &syn::Ident,
    ty: &Type,
    attrs: &[Attribute],
) {
    if has_field_named(fields_named, &name.to_string()) {
        return;
    }
    let field: Field = syn::parse_quote! { #(#attrs)* #name: #ty };
    fields_named.named.push(field);
}
