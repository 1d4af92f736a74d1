use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// The tags accepted by the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        while !input.is_empty() {
            let tag: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            let slot = match tag.to_string().as_str() {
                "message" => &mut args.message,
                "labels" => &mut args.labels,
                "help" => &mut args.help,
                other => return Err(syn::Error::new_spanned(&tag, format!("unknown tag `{}`", other))),
            };
            if slot.is_some() {
                return Err(syn::Error::new_spanned(&tag, format!("duplicate tag `{}`", tag)));
            }
            *slot = Some(input.parse()?);

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// The struct to derive `ErrorKind` for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub error_args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        // outer attributes include documentation, so only the `error` attribute is inspected
        let attributes = input.call(Attribute::parse_outer)?;
        let item = input.parse::<ItemStruct>()?;

        let error_args = match attributes.iter().find(|attr| attr.path().is_ident("error")) {
            Some(attr) => attr.parse_args::<ErrorArgs>()?,
            None => ErrorArgs::default(),
        };

        Ok(ErrorKindTarget {
            name: item.ident,
            fields: item.fields,
            error_args,
        })
    }
}

impl ErrorKindTarget {
    /// Creates a `let` statement that destructures `self` into its named fields.
    fn destructure(&self) -> TokenStream2 {
        let name = &self.name;
        match &self.fields {
            Fields::Named(fields) => {
                let fields = fields.named.iter().map(|field| &field.ident);
                quote! { let #name { #(#fields),* } = self; }
            },
            Fields::Unnamed(_) => quote_spanned! {
                name.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs");
            },
            Fields::Unit => quote! {},
        }
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let destructure = self.destructure();
        let message = self.error_args.message.as_ref()
            .map(|message| quote! { .with_message(#message) });
        let labels = self.error_args.labels.as_ref()
            .map(|labels| quote! { #labels })
            .unwrap_or_else(|| quote! { std::iter::empty::<String>() });
        let help = self.error_args.help.as_ref()
            .map(|help| quote! { builder.set_help(#help); });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #destructure

                let offset = spans.first().map_or(0, |span| span.start);
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    #message
                    .with_labels(
                        #labels
                            .into_iter()
                            .zip(spans)
                            .map(|(label_str, span)| {
                                let label_str = label_str.to_string();
                                let mut label = ariadne::Label::new((src_id, span.clone()))
                                    .with_color(sce_error::EXPR);

                                if !label_str.is_empty() {
                                    label = label.with_message(label_str);
                                }

                                label
                            })
                            .collect::<Vec<_>>()
                    );

                #help
                builder.finish()
            }
        });
    }
}
