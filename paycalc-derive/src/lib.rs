use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Lit, Meta, Type};

/// Derive macro that lists the fields a calculator input record accepts.
///
/// For each named field it records:
/// - the serialized name (honours `#[serde(rename = "...")]`)
/// - whether the field is required: `Option<T>` fields and fields covered by
///   `#[serde(default)]` (on the field or on the struct) are optional
/// - the description, taken from the field's doc comments
///
/// Generates `input_fields() -> &'static [InputField]`. `InputField` must be in
/// scope at the derive site.
#[proc_macro_derive(InputFields, attributes(serde))]
pub fn derive_input_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("InputFields only supports structs with named fields"),
        },
        _ => panic!("InputFields only supports structs"),
    };

    let container_default = has_serde_flag(&input.attrs, "default");

    let entries = fields.iter().map(|field| {
        let ident = field.ident.as_ref().unwrap().to_string();
        let field_name = serde_value(&field.attrs, "rename").unwrap_or(ident);
        let required = !(container_default
            || is_option_type(&field.ty)
            || has_serde_flag(&field.attrs, "default"));
        let description = doc_comment(&field.attrs);

        quote! {
            InputField {
                name: #field_name,
                required: #required,
                description: #description,
            }
        }
    });

    let expanded = quote! {
        impl #name {
            pub fn input_fields() -> &'static [InputField] {
                static FIELDS: &[InputField] = &[
                    #(#entries),*
                ];
                FIELDS
            }
        }
    };

    TokenStream::from(expanded)
}

/// Token text of every `#[serde(...)]` attribute.
fn serde_tokens(attrs: &[Attribute]) -> impl Iterator<Item = String> + '_ {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("serde"))
        .filter_map(|attr| match &attr.meta {
            Meta::List(list) => Some(list.tokens.to_string()),
            _ => None,
        })
}

/// Value of `key = "..."` inside a serde attribute.
fn serde_value(attrs: &[Attribute], key: &str) -> Option<String> {
    serde_tokens(attrs).find_map(|tokens| {
        tokens.split(',').find_map(|part| {
            let (k, v) = part.split_once('=')?;
            if k.trim() != key {
                return None;
            }
            let v = v.trim();
            let v = v.strip_prefix('"')?;
            let end = v.find('"')?;
            Some(v[..end].to_string())
        })
    })
}

/// Whether a bare flag (or `flag = ...`) appears in a serde attribute.
fn has_serde_flag(attrs: &[Attribute], flag: &str) -> bool {
    serde_tokens(attrs).any(|tokens| {
        tokens.split(',').any(|part| {
            let key = part.split('=').next().unwrap_or_default();
            key.trim() == flag
        })
    })
}

fn doc_comment(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(meta) = &attr.meta {
                if let syn::Expr::Lit(expr_lit) = &meta.value {
                    if let Lit::Str(lit_str) = &expr_lit.lit {
                        return Some(lit_str.value().trim().to_string());
                    }
                }
            }
            None
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_option_type(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            return segment.ident == "Option";
        }
    }
    false
}
