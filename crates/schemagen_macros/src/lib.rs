//! Procedural macros for schemagen.
//!
//! # Example
//!
//! ```ignore
//! use schemagen_macros::Describe;
//!
//! #[derive(Describe)]
//! pub struct User {
//!     pub id: i64,
//!     pub name: String,
//!     #[describe(rename = "friends")]
//!     pub friend_list: Option<Vec<User>>,
//!     #[describe(skip)]
//!     pub password_hash: String,
//! }
//!
//! #[derive(Describe)]
//! pub enum Role {
//!     Admin,
//!     Member,
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, spanned::Spanned, Attribute, Data, DataEnum, DataStruct, DeriveInput,
    Fields, Ident, LitStr,
};

/// Derives `schemagen_core::Describe`.
///
/// Structs with named fields become records and field-less enums become
/// enumerations. Supported attributes:
///
/// - `#[describe(rename = "Name")]` on the type, a field or a variant
/// - `#[describe(kind = "record" | "class" | "abstract" | "interface")]` on a struct
/// - `#[describe(skip)]` on a field
#[proc_macro_derive(Describe, attributes(describe))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_describe(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Default)]
struct DescribeAttrs {
    rename: Option<String>,
    kind: Option<LitStr>,
    skip: bool,
}

fn parse_describe_attrs(attrs: &[Attribute]) -> syn::Result<DescribeAttrs> {
    let mut parsed = DescribeAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("describe") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                parsed.rename = Some(value.value());
            } else if meta.path.is_ident("kind") {
                parsed.kind = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("skip") {
                parsed.skip = true;
            } else {
                return Err(meta.error("unsupported describe attribute"));
            }
            Ok(())
        })?;
    }

    Ok(parsed)
}

fn class_kind(kind: Option<&LitStr>) -> syn::Result<Ident> {
    let Some(kind) = kind else {
        return Ok(format_ident!("Record"));
    };
    let variant = match kind.value().as_str() {
        "record" => "Record",
        "class" => "Class",
        "abstract" => "Abstract",
        "interface" => "Interface",
        _ => {
            return Err(syn::Error::new(
                kind.span(),
                "expected one of `record`, `class`, `abstract`, `interface`",
            ))
        }
    };
    Ok(format_ident!("{}", variant))
}

fn expand_describe(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "Describe cannot be derived for generic types",
        ));
    }

    let ident = &input.ident;
    let attrs = parse_describe_attrs(&input.attrs)?;
    let class_name = attrs.rename.clone().unwrap_or_else(|| ident.to_string());

    let body = match &input.data {
        Data::Struct(data) => expand_struct(data, &class_name, &attrs)?,
        Data::Enum(data) => {
            if let Some(kind) = &attrs.kind {
                return Err(syn::Error::new(kind.span(), "enums cannot set a kind"));
            }
            expand_enum(data, &class_name)?
        }
        Data::Union(_) => {
            return Err(syn::Error::new(
                ident.span(),
                "Describe cannot be derived for unions",
            ))
        }
    };

    Ok(quote! {
        impl ::schemagen_core::Describe for #ident {
            fn describe(
                registry: &mut ::schemagen_core::ClassRegistry,
            ) -> ::schemagen_core::UseSiteType {
                let qualified_name = concat!(module_path!(), "::", stringify!(#ident));
                #body
            }
        }
    })
}

fn expand_struct(
    data: &DataStruct,
    class_name: &str,
    attrs: &DescribeAttrs,
) -> syn::Result<TokenStream2> {
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new(
            data.fields.span(),
            "Describe requires a struct with named fields",
        ));
    };
    let kind = class_kind(attrs.kind.as_ref())?;

    let mut members = Vec::new();
    for field in &fields.named {
        let field_attrs = parse_describe_attrs(&field.attrs)?;
        if field_attrs.skip {
            continue;
        }
        if let Some(kind) = &field_attrs.kind {
            return Err(syn::Error::new(kind.span(), "fields cannot set a kind"));
        }
        let name = field_attrs.rename.unwrap_or_else(|| {
            field
                .ident
                .as_ref()
                .map(|ident| ident.to_string().trim_start_matches("r#").to_string())
                .unwrap_or_default()
        });
        let ty = &field.ty;
        members.push(quote! {
            ::schemagen_core::MemberDescriptor::new(
                #name,
                <#ty as ::schemagen_core::Describe>::describe(registry),
            )
        });
    }

    Ok(quote! {
        let class = ::schemagen_core::ClassDescriptor::new(
            #class_name,
            ::schemagen_core::ClassKind::#kind,
        )
        .with_qualified_name(qualified_name);
        let id = registry.declare_with(class, |registry| vec![#(#members),*]);
        ::schemagen_core::UseSiteType::new(id)
    })
}

fn expand_enum(data: &DataEnum, class_name: &str) -> syn::Result<TokenStream2> {
    let mut constants = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "Describe requires enum variants without fields",
            ));
        }
        let variant_attrs = parse_describe_attrs(&variant.attrs)?;
        constants.push(
            variant_attrs
                .rename
                .unwrap_or_else(|| variant.ident.to_string()),
        );
    }

    Ok(quote! {
        let constants: &[&str] = &[#(#constants),*];
        let class = ::schemagen_core::ClassDescriptor::new(
            #class_name,
            ::schemagen_core::ClassKind::Enum,
        )
        .with_qualified_name(qualified_name)
        .with_constants(constants.iter().copied());
        ::schemagen_core::UseSiteType::new(registry.declare(class))
    })
}
