// #[derive(Discoverable)] implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{parenthesized, parse_quote, Data, DeriveInput, Error, LitStr, Token, Type};

use crate::get_attributes;

#[derive(Default)]
struct DiscoverOptions {
    extends: Vec<Type>,
    implements: Vec<Type>,
    generic_bases: Vec<LitStr>,
    generic_definition: Option<LitStr>,
    namespace: Option<LitStr>,
    constructible: bool,
    is_abstract: bool,
}

fn parse_options(input: &DeriveInput) -> Result<DiscoverOptions, Error> {
    let mut options = DiscoverOptions::default();

    for attr in get_attributes(&input.attrs, "discover") {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("extends") {
                options.extends.push(meta.value()?.parse()?);
            } else if meta.path.is_ident("implements") {
                let content;
                parenthesized!(content in meta.input);
                let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
                options.implements.extend(types);
            } else if meta.path.is_ident("generic_base") {
                options.generic_bases.push(meta.value()?.parse()?);
            } else if meta.path.is_ident("generic_definition") {
                options.generic_definition = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("namespace") {
                options.namespace = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("default") {
                options.constructible = true;
            } else if meta.path.is_ident("abstract_type") {
                options.is_abstract = true;
            } else {
                return Err(meta.error("unsupported #[discover] option"));
            }
            Ok(())
        })?;
    }

    if options.constructible && options.is_abstract {
        return Err(Error::new_spanned(
            &input.ident,
            "#[discover] cannot combine `default` with `abstract_type`",
        ));
    }

    Ok(options)
}

pub fn expand_derive(input: DeriveInput) -> Result<TokenStream, Error> {
    if let Data::Union(_) = &input.data {
        return Err(Error::new_spanned(
            &input,
            "#[derive(Discoverable)] only works on structs and enums",
        ));
    }

    let options = parse_options(&input)?;
    let name = &input.ident;

    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(Self: 'static));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let namespace = options
        .namespace
        .as_ref()
        .map(|ns| quote! { let info = info.with_namespace(#ns); });
    let extends = options.extends.iter().map(|parent| {
        quote! {
            let info = info.extends(
                &<#parent as ::typefinder::__internal::Discoverable>::type_info()
            );
        }
    });
    let implements = options.implements.iter().map(|iface| {
        quote! {
            let info = info.implements(&::typefinder::__internal::TypeInfo::of::<#iface>());
        }
    });
    let generic_bases = options.generic_bases.iter().map(|def| {
        quote! {
            let info = info.with_generic_base(::typefinder::__internal::GenericDef::new(#def));
        }
    });
    let generic_definition = options.generic_definition.as_ref().map(|def| {
        quote! {
            let info = info.with_generic_definition(::typefinder::__internal::GenericDef::new(#def));
        }
    });
    let constructible = options
        .constructible
        .then(|| quote! { let info = info.constructible(); });
    let is_abstract = options
        .is_abstract
        .then(|| quote! { let info = info.abstract_type(); });

    let expanded = quote! {
        impl #impl_generics ::typefinder::__internal::Discoverable for #name #ty_generics #where_clause {
            fn type_info() -> ::typefinder::__internal::TypeInfo {
                let info = ::typefinder::__internal::TypeInfo::of::<Self>();
                #namespace
                #(#extends)*
                #(#implements)*
                #(#generic_bases)*
                #generic_definition
                #constructible
                #is_abstract
                info
            }
        }
    };

    Ok(expanded)
}
