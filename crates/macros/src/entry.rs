use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ItemStatic, Path, StaticMutability, parse_macro_input};

use crate::section::Section;

pub fn entry(attr: TokenStream, item: TokenStream) -> TokenStream {
	let region = parse_macro_input!(attr as Path);
	let item = parse_macro_input!(item as ItemStatic);
	expand(region, item)
		.unwrap_or_else(syn::Error::into_compile_error)
		.into()
}

fn expand(region: Path, item: ItemStatic) -> syn::Result<TokenStream2> {
	if let StaticMutability::Mut(token) = &item.mutability {
		return Err(syn::Error::new_spanned(
			token,
			"region entries cannot be `static mut`; linked records are read-only",
		));
	}
	let Some(last) = region.segments.last() else {
		return Err(syn::Error::new_spanned(&region, "expected a region path"));
	};
	let section = Section::from_ident(&last.ident)?;
	let placement = section.placement_attrs();

	let ItemStatic {
		attrs,
		vis,
		ident,
		ty,
		expr,
		..
	} = &item;

	Ok(quote! {
		#(#attrs)*
		#placement
		#vis static #ident: #ty = #expr;

		const _: () = {
			::linkset_region::layout::assert_collectable::<#ty>();

			#[allow(dead_code)]
			fn __linkset_typecheck() {
				::linkset_region::Region::__typecheck(&#region, &#ident);
			}
		};
	})
}

#[cfg(test)]
mod tests {
	use syn::parse_quote;

	use super::*;

	#[test]
	fn section_follows_last_path_segment() {
		let region: Path = parse_quote!(crate::commands::COMMANDS);
		let item: ItemStatic = parse_quote!(static QUIT: Command = Command::new("quit"););
		let out = expand(region, item).expect("expansion").to_string();
		assert!(out.contains("\"linkset_COMMANDS\""));
		assert!(out.contains("\".linkset_COMMANDS$b\""));
		assert!(out.contains("used"));
		assert!(out.contains("__typecheck"));
	}

	#[test]
	fn static_mut_entries_are_rejected() {
		let region: Path = parse_quote!(COMMANDS);
		let item: ItemStatic = parse_quote!(static mut QUIT: Command = Command::new("quit"););
		let err = expand(region, item).expect_err("static mut");
		assert!(err.to_string().contains("static mut"));
	}

	#[test]
	fn user_attributes_are_preserved() {
		let region: Path = parse_quote!(COMMANDS);
		let item: ItemStatic = parse_quote! {
			/// Leaves the program.
			#[allow(non_upper_case_globals)]
			pub(crate) static quit: Command = Command::new("quit");
		};
		let out = expand(region, item).expect("expansion").to_string();
		assert!(out.contains("non_upper_case_globals"));
		assert!(out.contains("Leaves the program."));
		assert!(out.contains("static quit"));
	}
}
