use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse_macro_input, AttributeArgs, Attribute, FnArg, GenericArgument, ItemFn, Lit, Meta,
    NestedMeta, Pat, PathArguments, PathSegment, Type,
};
use proc_macro_crate::{crate_name, FoundCrate};

/// Resolve host crate path (equivalent to `$crate`). Expansions must spell every
/// path absolutely and never rely on names in scope at the call site.
fn host_crate() -> proc_macro2::TokenStream {
    match crate_name("kernel-tools") {
        // the library declares `extern crate self as kernel_tools`, and integration
        // tests of the same package see it as a regular dependency
        Ok(FoundCrate::Itself) => quote!(::kernel_tools),
        Ok(FoundCrate::Name(name)) => {
            let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
            quote!(::#ident)
        }
        Err(_) => quote!(::kernel_tools),
    }
}

/// Capability tag for agent tools.
///
/// ```ignore
/// #[tool(description = "Send a welcome email to a new employee.")]
/// async fn send_welcome_email(employee_name: String) -> String { ... }
/// ```
///
/// Generates a unit struct `SendWelcomeEmailTool` implementing `Tool`. The
/// description is optional; the catalog falls back to the function's doc comment.
#[proc_macro_attribute]
pub fn tool(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as AttributeArgs);
    let input_fn = parse_macro_input!(item as ItemFn);

    let mut name_override = None;
    let mut description = None;

    for nested in args {
        match nested {
            NestedMeta::Meta(Meta::NameValue(nv)) => {
                let key = nv.path.get_ident().map(|i| i.to_string()).unwrap_or_default();
                match (key.as_str(), nv.lit) {
                    ("name", Lit::Str(s)) => name_override = Some(s.value()),
                    ("description", Lit::Str(s)) => description = Some(s.value()),
                    (_, lit) => {
                        return syn::Error::new_spanned(
                            lit,
                            format!("unsupported tool argument `{}`", key),
                        )
                        .to_compile_error()
                        .into();
                    }
                }
            }
            other => {
                return syn::Error::new_spanned(
                    other,
                    "expected `name = \"...\"` or `description = \"...\"`",
                )
                .to_compile_error()
                .into();
            }
        }
    }

    let fn_ident = input_fn.sig.ident.clone();
    let fn_name = fn_ident.to_string();
    let tool_name = name_override.unwrap_or(fn_name.clone());

    let mut fields = Vec::new();

    for arg in &input_fn.sig.inputs {
        match arg {
            FnArg::Typed(pt) => {
                let Pat::Ident(pi) = &*pt.pat else {
                    return syn::Error::new_spanned(
                        &pt.pat,
                        "only simple identifiers are supported",
                    )
                    .to_compile_error()
                    .into();
                };
                if let Type::Reference(_) = &*pt.ty {
                    return syn::Error::new_spanned(
                        &pt.ty,
                        "tool parameters must be owned types",
                    )
                    .to_compile_error()
                    .into();
                }
                fields.push((pi.ident.clone(), (*pt.ty).clone()));
            }
            FnArg::Receiver(_) => {
                return syn::Error::new_spanned(
                    arg,
                    "methods with self are not supported",
                )
                .to_compile_error()
                .into();
            }
        }
    }

    let params_struct_ident =
        syn::Ident::new(&format!("{}Params", pascal_case(&fn_name)), fn_ident.span());
    let tool_struct_ident =
        syn::Ident::new(&format!("{}Tool", pascal_case(&fn_name)), fn_ident.span());

    let host = host_crate();
    let serde_path = format!("{}::serde", host.to_string().replace(' ', ""));
    let vis = &input_fn.vis;

    let tag_description = match &description {
        Some(d) => quote!(::core::option::Option::Some(#d)),
        None => quote!(::core::option::Option::None),
    };
    let doc = match doc_comment(&input_fn.attrs) {
        Some(d) => quote!(::core::option::Option::Some(#d)),
        None => quote!(::core::option::Option::None),
    };
    let attributes = input_fn
        .attrs
        .iter()
        .filter(|a| !a.path.is_ident("doc"))
        .map(|a| quote!(#a).to_string());

    let field_defs = fields.iter().map(|(id, ty)| quote!(#id: #ty));

    let args_entries = fields.iter().map(|(ident, ty)| {
        let variant = syn::Ident::new(infer_arg_type(ty), ident.span());
        let required = !is_option(ty);
        let name_lit = syn::LitStr::new(&ident.to_string(), ident.span());
        quote! {
            #host::tools::schema::ArgSchema::new(
                #name_lit,
                #host::tools::schema::ArgType::#variant,
                #required,
            )
        }
    });

    let call_args = fields.iter().map(|(id, _)| quote!(params.#id));
    let params_binding = if fields.is_empty() { quote!(_params) } else { quote!(params) };
    let call = if input_fn.sig.asyncness.is_some() {
        quote!(#fn_ident(#(#call_args),*).await)
    } else {
        quote!(#fn_ident(#(#call_args),*))
    };

    let expanded = quote! {
        #input_fn

        #[derive(#host::serde::Deserialize)]
        #[serde(crate = #serde_path)]
        struct #params_struct_ident {
            #(#field_defs,)*
        }

        #[derive(
            ::core::fmt::Debug,
            ::core::clone::Clone,
            ::core::marker::Copy,
            ::core::default::Default,
        )]
        #vis struct #tool_struct_ident;

        #[#host::async_trait::async_trait]
        impl #host::tools::traits::Tool for #tool_struct_ident {
            fn name(&self) -> &::core::primitive::str { #tool_name }
            fn tag(&self) -> ::core::option::Option<#host::tools::traits::ToolTag> {
                ::core::option::Option::Some(#host::tools::traits::ToolTag::new(#tag_description))
            }
            fn doc(&self) -> ::core::option::Option<&::core::primitive::str> { #doc }
            fn attributes(&self) -> &[&::core::primitive::str] { &[#(#attributes),*] }
            fn args(&self) -> ::std::vec::Vec<#host::tools::schema::ArgSchema> {
                ::std::vec![#(#args_entries),*]
            }
            async fn run(
                &self,
                input: #host::serde_json::Value,
            ) -> ::core::result::Result<::std::string::String, #host::tools::error::ToolError> {
                let #params_binding: #params_struct_ident =
                    #host::serde_json::from_value(input)
                        .map_err(|e| #host::tools::error::ToolError::ParamsNotMatched(::std::string::ToString::to_string(&e)))?;
                ::core::result::Result::Ok(#call)
            }
        }
    };

    TokenStream::from(expanded)
}

/// Joined `///` lines, each trimmed. `None` when the function has no docs.
fn doc_comment(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|a| a.path.is_ident("doc"))
        .filter_map(|a| match a.parse_meta() {
            Ok(Meta::NameValue(nv)) => match nv.lit {
                Lit::Str(s) => Some(s.value().trim().to_string()),
                _ => None,
            },
            _ => None,
        })
        .collect();
    let doc = lines.join("\n").trim().to_string();
    if doc.is_empty() { None } else { Some(doc) }
}

fn pascal_case(s: &str) -> String {
    s.split('_')
        .map(|p| {
            let mut c = p.chars();
            match c.next() {
                None => String::new(),
                Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Name of the `ArgType` variant a parameter type collapses to.
fn infer_arg_type(ty: &Type) -> &'static str {
    match ty {
        Type::Paren(p) => infer_arg_type(&p.elem),
        Type::Group(g) => infer_arg_type(&g.elem),
        Type::Path(p) => {
            let Some(segment) = p.path.segments.last() else {
                return "String";
            };
            match segment.ident.to_string().as_str() {
                "i8" | "i16" | "i32" | "i64" | "i128" |
                "u8" | "u16" | "u32" | "u64" | "u128" |
                "usize" | "isize" => "Int",
                "f32" | "f64" => "Float",
                "bool" => "Boolean",
                "Option" => option_inner(segment).map(infer_arg_type).unwrap_or("String"),
                _ => "String",
            }
        }
        _ => "String",
    }
}

fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Paren(p) => is_option(&p.elem),
        Type::Group(g) => is_option(&g.elem),
        Type::Path(p) => p
            .path
            .segments
            .last()
            .map(|s| s.ident == "Option" && option_inner(s).is_some())
            .unwrap_or(false),
        _ => false,
    }
}

fn option_inner(segment: &PathSegment) -> Option<&Type> {
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|a| match a {
            GenericArgument::Type(t) => Some(t),
            _ => None,
        }),
        _ => None,
    }
}
