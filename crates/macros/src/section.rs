//! Section naming and per-target placement attributes.
//!
//! | target  | records                              | boundaries                                |
//! |---------|--------------------------------------|-------------------------------------------|
//! | ELF     | `linkset_<NAME>`                     | `__start_linkset_<NAME>` / `__stop_...`   |
//! | Mach-O  | `__DATA,__l<hash>,regular,no_dead_strip` | `section$start$__DATA$__l<hash>` / `section$end$...` |
//! | Windows | `.linkset_<NAME>$b`                  | marker statics in `$a` and `$c`           |
//!
//! Mach-O section names are capped at 16 bytes, hence the hashed form.
//!
//! Every region's placeholder is exported as `linkset_region_<NAME>`. A second
//! region with the same name defines that symbol again and fails to build,
//! instead of silently sharing the first region's section.

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Ident, LitStr, Type};

/// Section names derived from one region identifier.
pub(crate) struct Section {
	name: String,
}

impl Section {
	pub fn from_ident(ident: &Ident) -> syn::Result<Self> {
		let name = ident.unraw().to_string();
		if !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
			return Err(syn::Error::new(
				ident.span(),
				"region names must be ASCII identifiers; they become linker section names",
			));
		}
		Ok(Self { name })
	}

	pub fn region_name(&self) -> &str {
		&self.name
	}

	fn elf(&self) -> String {
		format!("linkset_{}", self.name)
	}

	fn macho(&self) -> String {
		format!("__l{:013x}", fnv1a64(self.name.as_bytes()) & MACHO_HASH_MASK)
	}

	/// Exported symbol of the region's placeholder record.
	pub fn placeholder_symbol(&self) -> String {
		format!("linkset_region_{}", self.name)
	}

	fn windows(&self, part: char) -> String {
		format!(".linkset_{}${part}", self.name)
	}

	/// `#[used]` plus the target's `link_section` for a record static.
	pub fn placement_attrs(&self) -> TokenStream2 {
		let (elf, macho, windows) = (elf_cfg(), macho_cfg(), windows_cfg());
		let elf_section = lit(self.elf());
		let macho_section = lit(format!("__DATA,{},regular,no_dead_strip", self.macho()));
		let windows_section = lit(self.windows('b'));
		quote! {
			#[used]
			#[cfg_attr(#elf, unsafe(link_section = #elf_section))]
			#[cfg_attr(#macho, unsafe(link_section = #macho_section))]
			#[cfg_attr(#windows, unsafe(link_section = #windows_section))]
		}
	}

	/// Declares `__LINKSET_START` and `__LINKSET_STOP` at the region's edges.
	pub fn boundary_decls(&self, elem: &Type) -> TokenStream2 {
		let (elf, macho, windows) = (elf_cfg(), macho_cfg(), windows_cfg());
		let elf_start = lit(format!("__start_{}", self.elf()));
		let elf_stop = lit(format!("__stop_{}", self.elf()));
		let macho_start = lit(format!("\x01section$start$__DATA${}", self.macho()));
		let macho_stop = lit(format!("\x01section$end$__DATA${}", self.macho()));
		let windows_start = lit(self.windows('a'));
		let windows_stop = lit(self.windows('c'));
		quote! {
			#[cfg(#elf)]
			unsafe extern "Rust" {
				#[link_name = #elf_start]
				static __LINKSET_START: #elem;
				#[link_name = #elf_stop]
				static __LINKSET_STOP: #elem;
			}

			#[cfg(#macho)]
			unsafe extern "Rust" {
				#[link_name = #macho_start]
				static __LINKSET_START: #elem;
				#[link_name = #macho_stop]
				static __LINKSET_STOP: #elem;
			}

			#[cfg(#windows)]
			#[used]
			#[unsafe(link_section = #windows_start)]
			static __LINKSET_START: [#elem; 0] = [];

			#[cfg(#windows)]
			#[used]
			#[unsafe(link_section = #windows_stop)]
			static __LINKSET_STOP: [#elem; 0] = [];
		}
	}

	/// `compile_error!` for targets without start/stop symbol support.
	pub fn unsupported_target() -> TokenStream2 {
		let (elf, macho, windows) = (elf_cfg(), macho_cfg(), windows_cfg());
		quote! {
			#[cfg(not(any(#elf, #macho, #windows)))]
			::core::compile_error!("linkset regions are not supported on this target");
		}
	}
}

fn elf_cfg() -> TokenStream2 {
	quote! {
		any(
			target_os = "linux",
			target_os = "android",
			target_os = "freebsd",
			target_os = "netbsd",
			target_os = "openbsd",
			target_os = "dragonfly",
			target_os = "illumos",
			target_os = "fuchsia",
			target_os = "none",
		)
	}
}

fn macho_cfg() -> TokenStream2 {
	quote!(target_vendor = "apple")
}

fn windows_cfg() -> TokenStream2 {
	quote!(target_os = "windows")
}

fn lit(value: String) -> LitStr {
	LitStr::new(&value, Span::call_site())
}

/// 13 hex digits after `__l` fill the 16-byte Mach-O section name.
const MACHO_HASH_MASK: u64 = (1 << 52) - 1;

/// 64-bit FNV-1a.
fn fnv1a64(bytes: &[u8]) -> u64 {
	bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash: u64, &b| {
		(hash ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
	})
}
