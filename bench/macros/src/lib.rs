//! `#[quick_bench]`: turns a function taking a `Bencher` into an ignored test.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Expr, ExprLit, FnArg, Ident, ItemFn, Lit, MetaNameValue, Pat, Signature, Token};

/// `name = value` pairs accepted by the attribute.
#[derive(Default)]
struct BenchSettings {
    warmup_rounds: Option<u64>,
    rounds: Option<u64>,
    calls_per_round: Option<u64>,
    /// Tests are ignored unless `ignore = false`.
    run_by_default: bool,
}

impl Parse for BenchSettings {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut settings = BenchSettings::default();

        for pair in Punctuated::<MetaNameValue, Token![,]>::parse_terminated(input)? {
            let Some(key) = pair.path.get_ident() else {
                return Err(syn::Error::new_spanned(&pair.path, "expected a plain name"));
            };
            let Expr::Lit(ExprLit { lit, .. }) = &pair.value else {
                return Err(syn::Error::new_spanned(&pair.value, "expected a literal"));
            };

            match (key.to_string().as_str(), lit) {
                ("warmup_rounds", Lit::Int(n)) => settings.warmup_rounds = Some(n.base10_parse()?),
                ("rounds", Lit::Int(n)) => settings.rounds = Some(n.base10_parse()?),
                ("calls_per_round", Lit::Int(n)) => {
                    settings.calls_per_round = Some(n.base10_parse()?)
                }
                ("ignore", Lit::Bool(b)) => settings.run_by_default = !b.value,
                ("warmup_rounds" | "rounds" | "calls_per_round" | "ignore", _) => {
                    return Err(syn::Error::new_spanned(lit, "wrong literal type"));
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        key,
                        "expected one of `warmup_rounds`, `rounds`, `calls_per_round`, `ignore`",
                    ));
                }
            }
        }

        Ok(settings)
    }
}

/// The single `b: Bencher` parameter the benchmark body refers to.
fn bencher_param(sig: &Signature) -> syn::Result<&Ident> {
    let mut inputs = sig.inputs.iter();
    match (inputs.next(), inputs.next()) {
        (Some(FnArg::Typed(typed)), None) => match &*typed.pat {
            Pat::Ident(pat) => Ok(&pat.ident),
            other => Err(syn::Error::new_spanned(other, "expected a plain parameter name")),
        },
        _ => Err(syn::Error::new_spanned(
            &sig.inputs,
            "quick_bench functions take exactly one parameter: `b: Bencher`",
        )),
    }
}

fn expand(settings: BenchSettings, func: ItemFn) -> syn::Result<TokenStream2> {
    let param = bencher_param(&func.sig)?;
    let name = &func.sig.ident;
    let label = name.to_string();
    let vis = &func.vis;
    let body = &func.block;

    let ignore = (!settings.run_by_default).then(|| quote! { #[ignore] });
    let warmup_rounds = settings
        .warmup_rounds
        .map(|n| quote! { .with_warmup_rounds(#n) });
    let rounds = settings.rounds.map(|n| quote! { .with_rounds(#n) });
    let calls_per_round = settings
        .calls_per_round
        .map(|n| quote! { .with_calls_per_round(#n) });

    Ok(quote! {
        #[test]
        #ignore
        #vis fn #name() {
            let #param = ::bench::Bencher::new(#label)
                #warmup_rounds
                #rounds
                #calls_per_round;
            #body
        }
    })
}

/// Declares a benchmark as an ignored `#[test]`.
///
/// ```ignore
/// use bench::quick_bench;
///
/// #[quick_bench(warmup_rounds = 2, rounds = 20, calls_per_round = 100000)]
/// fn bench_kernels(b: bench::Bencher) {
///     b.bench_labeled("exp_taylor_2", || exp_taylor_2(black_box(-0.5)));
/// }
/// ```
///
/// Run with `cargo test --release -- --ignored --nocapture`. `ignore = false`
/// makes the benchmark part of the regular test run.
#[proc_macro_attribute]
pub fn quick_bench(attr: TokenStream, item: TokenStream) -> TokenStream {
    let settings = syn::parse_macro_input!(attr as BenchSettings);
    let func = syn::parse_macro_input!(item as ItemFn);

    expand(settings, func)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
