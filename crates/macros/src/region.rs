use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{
	Attribute, Expr, GenericArgument, Ident, LitStr, PathArguments, Token, Type, Visibility,
	parse_macro_input,
};

use crate::section::Section;

/// `placeholder = EXPR`
pub(crate) struct RegionArgs {
	placeholder: Expr,
}

impl Parse for RegionArgs {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		if input.is_empty() {
			return Err(input.error(
				"missing `placeholder = ...`; every region places one placeholder record",
			));
		}
		let key: Ident = input.parse()?;
		if key != "placeholder" {
			return Err(syn::Error::new(key.span(), "expected `placeholder = ...`"));
		}
		input.parse::<Token![=]>()?;
		let placeholder: Expr = input.parse()?;
		if input.peek(Token![,]) {
			input.parse::<Token![,]>()?;
		}
		if !input.is_empty() {
			return Err(input.error("unexpected tokens after the placeholder"));
		}
		Ok(Self { placeholder })
	}
}

/// `VIS static NAME: Region<T>;`
pub(crate) struct RegionDecl {
	attrs: Vec<Attribute>,
	vis: Visibility,
	ident: Ident,
	ty: Type,
}

impl Parse for RegionDecl {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		let attrs = input.call(Attribute::parse_outer)?;
		let vis: Visibility = input.parse()?;
		input.parse::<Token![static]>()?;
		if input.peek(Token![mut]) {
			return Err(input.error("a region cannot be `static mut`"));
		}
		let ident: Ident = input.parse()?;
		input.parse::<Token![:]>()?;
		let ty: Type = input.parse()?;
		if input.peek(Token![=]) {
			return Err(input.error(
				"a region has no initializer; the linker supplies its contents",
			));
		}
		input.parse::<Token![;]>()?;
		Ok(Self {
			attrs,
			vis,
			ident,
			ty,
		})
	}
}

pub fn region(attr: TokenStream, item: TokenStream) -> TokenStream {
	let args = parse_macro_input!(attr as RegionArgs);
	let decl = parse_macro_input!(item as RegionDecl);
	expand(args, decl)
		.unwrap_or_else(syn::Error::into_compile_error)
		.into()
}

fn expand(args: RegionArgs, decl: RegionDecl) -> syn::Result<TokenStream2> {
	let RegionDecl {
		attrs,
		vis,
		ident,
		ty,
	} = decl;
	let placeholder = args.placeholder;
	let elem = element_type(&ty)?;

	let section = Section::from_ident(&ident)?;
	let name = section.region_name();
	let placement = section.placement_attrs();
	let symbol = LitStr::new(&section.placeholder_symbol(), Span::call_site());
	let boundary = section.boundary_decls(elem);
	let unsupported = Section::unsupported_target();

	Ok(quote! {
		#(#attrs)*
		#vis static #ident: #ty = {
			#unsupported
			#boundary

			#placement
			#[unsafe(export_name = #symbol)]
			static __LINKSET_PLACEHOLDER: #elem = #placeholder;

			const _: () = ::linkset_region::layout::assert_collectable::<#elem>();

			// SAFETY: the boundary symbols delimit the section every record of this
			// region is placed in, and the placeholder is one of those records.
			unsafe {
				::linkset_region::Region::from_boundary(
					#name,
					::linkset_region::BoundaryPair::new(
						(&raw const __LINKSET_START).cast::<#elem>(),
						(&raw const __LINKSET_STOP).cast::<#elem>(),
					),
					&__LINKSET_PLACEHOLDER,
				)
			}
		};
	})
}

/// Extracts `T` from `Region<T>` (any path ending in `Region`).
fn element_type(ty: &Type) -> syn::Result<&Type> {
	let Type::Path(path) = ty else {
		return Err(syn::Error::new_spanned(ty, "expected `Region<T>`"));
	};
	let Some(last) = path.path.segments.last() else {
		return Err(syn::Error::new_spanned(ty, "expected `Region<T>`"));
	};
	if last.ident != "Region" {
		return Err(syn::Error::new_spanned(ty, "expected `Region<T>`"));
	}
	let PathArguments::AngleBracketed(args) = &last.arguments else {
		return Err(syn::Error::new_spanned(ty, "expected `Region<T>` with a record type"));
	};
	let mut types = args.args.iter().filter_map(|arg| match arg {
		GenericArgument::Type(ty) => Some(ty),
		_ => None,
	});
	match (types.next(), types.next()) {
		(Some(elem), None) => Ok(elem),
		_ => Err(syn::Error::new_spanned(
			&last.arguments,
			"expected exactly one record type in `Region<T>`",
		)),
	}
}
