//! `#[base_entity]` injects the columns every persisted record shares
//! (UUID primary key, `created_at`, `updated_at`) into a sea-orm `Model` and
//! implements the DAO plumbing traits for the generated entity.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use std::collections::HashSet;
use syn::{
    Expr, ExprLit, Fields, Ident, ItemStruct, Lit, Meta, Path, Token, parse_macro_input, parse_str,
    punctuated::Punctuated,
};

struct BaseEntityArgs {
    traits_path: Path,
    id_field: Ident,
    created_at_field: Ident,
    updated_at_field: Ident,
}

impl Default for BaseEntityArgs {
    fn default() -> Self {
        Self {
            traits_path: parse_str("crate::db::dao::base_traits")
                .expect("default traits path should parse"),
            id_field: Ident::new("id", Span::call_site()),
            created_at_field: Ident::new("created_at", Span::call_site()),
            updated_at_field: Ident::new("updated_at", Span::call_site()),
        }
    }
}

#[proc_macro_attribute]
pub fn base_entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    let metas = parse_macro_input!(attr with Punctuated<Meta, Token![,]>::parse_terminated);
    let args = match parse_args(metas) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error().into(),
    };

    let mut input = parse_macro_input!(item as ItemStruct);
    let Fields::Named(fields) = &mut input.fields else {
        return syn::Error::new_spanned(input, "base_entity requires a struct with named fields")
            .to_compile_error()
            .into();
    };

    let declared: HashSet<String> = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref().map(ToString::to_string))
        .collect();

    let id_ident = &args.id_field;
    let created_ident = &args.created_at_field;
    let updated_ident = &args.updated_at_field;

    let mut injected: Vec<syn::Field> = Vec::new();
    if !declared.contains(&id_ident.to_string()) {
        injected.push(syn::parse_quote! {
            #[sea_orm(primary_key, auto_increment = false)]
            pub #id_ident: uuid::Uuid
        });
    }
    for ident in [created_ident, updated_ident] {
        if !declared.contains(&ident.to_string()) {
            injected.push(syn::parse_quote! {
                #[sea_orm(default_expr = "Expr::current_timestamp()")]
                pub #ident: sea_orm::entity::prelude::DateTimeWithTimeZone
            });
        }
    }

    let mut ordered = Punctuated::new();
    ordered.extend(injected);
    ordered.extend(fields.named.iter().cloned());
    fields.named = ordered;

    let traits = &args.traits_path;
    let id_column = column_variant(id_ident);
    let created_column = column_variant(created_ident);

    let expanded = quote! {
        #input

        impl #traits::HasIdActiveModel for ActiveModel {
            fn set_id(&mut self, id: uuid::Uuid) {
                self.#id_ident = sea_orm::ActiveValue::Set(id);
            }

            fn id_is_set(&self) -> bool {
                self.#id_ident.is_set()
            }
        }

        impl #traits::TimestampedActiveModel for ActiveModel {
            fn set_created_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone) {
                self.#created_ident = sea_orm::ActiveValue::Set(ts);
            }

            fn set_updated_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone) {
                self.#updated_ident = sea_orm::ActiveValue::Set(ts);
            }
        }

        impl #traits::HasKeysetColumns for Entity {
            fn id_column() -> Column {
                Column::#id_column
            }

            fn created_at_column() -> Column {
                Column::#created_column
            }
        }

        impl #traits::KeysetModel for Model {
            fn keyset_id(&self) -> uuid::Uuid {
                self.#id_ident
            }

            fn keyset_created_at(&self) -> sea_orm::entity::prelude::DateTimeWithTimeZone {
                self.#created_ident
            }
        }
    };

    expanded.into()
}

// sea-orm names column variants in UpperCamelCase: `created_at` -> `CreatedAt`.
fn column_variant(field: &Ident) -> Ident {
    let camel: String = field
        .to_string()
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();
    Ident::new(&camel, field.span())
}

fn parse_args(metas: Punctuated<Meta, Token![,]>) -> Result<BaseEntityArgs, syn::Error> {
    let mut args = BaseEntityArgs::default();
    for meta in metas {
        let Meta::NameValue(pair) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected name-value pair, e.g. traits = \"path::to::traits\"",
            ));
        };

        let Some(key) = pair.path.get_ident().map(ToString::to_string) else {
            return Err(syn::Error::new_spanned(
                pair.path,
                "expected simple identifier for attribute key",
            ));
        };

        let value = match pair.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(value),
                ..
            }) => value,
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected string literal for attribute value",
                ));
            }
        };

        match key.as_str() {
            "traits" => {
                args.traits_path = value.parse::<Path>().map_err(|err| {
                    syn::Error::new(value.span(), format!("invalid traits path: {err}"))
                })?;
            }
            "id" => args.id_field = Ident::new(&value.value(), value.span()),
            "created_at" => args.created_at_field = Ident::new(&value.value(), value.span()),
            "updated_at" => args.updated_at_field = Ident::new(&value.value(), value.span()),
            _ => {
                return Err(syn::Error::new_spanned(
                    pair.path,
                    "unknown base_entity attribute key",
                ));
            }
        }
    }

    Ok(args)
}
