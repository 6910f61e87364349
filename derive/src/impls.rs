use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectRecord;

// -----------------------------------------------------------------------------
// Expansion

/// Expands the full implementation set for a record.
pub(crate) fn expand(record: &ReflectRecord) -> TokenStream {
    let record_impl = impl_trait_record(record);
    let reflect_impl = impl_trait_reflect(record);
    let typed_impl = impl_trait_typed(record);
    let from_reflect_impl = impl_trait_from_reflect(record);

    quote! {
        #record_impl

        #reflect_impl

        #typed_impl

        #from_reflect_impl
    }
}

/// Generates the `Record` trait implementation.
fn impl_trait_record(record: &ReflectRecord) -> TokenStream {
    let ident = record.ident;

    let names: Vec<&str> = record
        .active_fields()
        .map(|field| field.name.as_str())
        .collect();
    let idents: Vec<_> = record.active_fields().map(|field| field.ident).collect();
    let indices: Vec<usize> = (0..names.len()).collect();
    let field_count = names.len();

    quote! {
        impl ::record_reflect::ops::Record for #ident {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn ::record_reflect::Reflect> {
                match name {
                    #(#names => ::core::option::Option::Some(&self.#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(
                &mut self,
                name: &str,
            ) -> ::core::option::Option<&mut dyn ::record_reflect::Reflect> {
                match name {
                    #(#names => ::core::option::Option::Some(&mut self.#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(
                &self,
                index: usize,
            ) -> ::core::option::Option<&dyn ::record_reflect::Reflect> {
                match index {
                    #(#indices => ::core::option::Option::Some(&self.#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn ::record_reflect::Reflect> {
                match index {
                    #(#indices => ::core::option::Option::Some(&mut self.#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&str> {
                match index {
                    #(#indices => ::core::option::Option::Some(#names),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> ::record_reflect::ops::FieldIter<'_> {
                ::record_reflect::ops::FieldIter::new(self)
            }

            #[inline]
            fn represented_info(
                &self,
            ) -> ::core::option::Option<&'static ::record_reflect::info::RecordInfo> {
                ::core::option::Option::Some(<Self as ::record_reflect::info::Typed>::record_info())
            }

            // Specialized to keep static names and skip the index matches.
            fn to_dynamic_record(&self) -> ::record_reflect::ops::DynamicRecord {
                let mut dynamic = ::record_reflect::ops::DynamicRecord::with_capacity(#field_count);
                dynamic.set_represented_info(
                    ::record_reflect::ops::Record::represented_info(self),
                );
                #(dynamic.insert_boxed(
                    #names,
                    ::record_reflect::Reflect::clone_value(&self.#idents),
                );)*
                dynamic
            }
        }
    }
}

/// Generates the `Reflect` trait implementation.
fn impl_trait_reflect(record: &ReflectRecord) -> TokenStream {
    let ident = record.ident;
    let ident_str = ident.to_string();

    quote! {
        impl ::record_reflect::Reflect for #ident {
            #[inline]
            fn type_name(&self) -> &'static str {
                #ident_str
            }

            #[inline]
            fn reflect_ref(&self) -> ::record_reflect::ops::ValueRef<'_> {
                ::record_reflect::ops::ValueRef::Record(self)
            }

            #[inline]
            fn to_value(&self) -> ::record_reflect::Value {
                ::record_reflect::Value::Record(
                    ::record_reflect::ops::Record::to_dynamic_record(self),
                )
            }

            #[inline]
            fn clone_value(
                &self,
            ) -> ::record_reflect::__macro_exports::Box<dyn ::record_reflect::Reflect> {
                ::record_reflect::__macro_exports::Box::new(
                    ::record_reflect::ops::Record::to_dynamic_record(self),
                )
            }

            fn set(
                &mut self,
                value: ::record_reflect::__macro_exports::Box<dyn ::record_reflect::Reflect>,
            ) -> ::core::result::Result<
                (),
                ::record_reflect::__macro_exports::Box<dyn ::record_reflect::Reflect>,
            > {
                *self = value.take::<Self>()?;
                ::core::result::Result::Ok(())
            }

            fn try_apply(
                &mut self,
                value: &::record_reflect::Value,
            ) -> ::core::result::Result<(), ::record_reflect::ops::CastError> {
                match value {
                    ::record_reflect::Value::Record(record) => {
                        ::record_reflect::impls::record_try_apply(self, record)
                    }
                    other => ::core::result::Result::Err(
                        ::record_reflect::ops::CastError::WrongKind {
                            expected: ::record_reflect::ValueKind::Record,
                            found: other.kind(),
                        },
                    ),
                }
            }

            #[inline]
            fn reflect_partial_eq(
                &self,
                other: &dyn ::record_reflect::Reflect,
            ) -> ::core::option::Option<bool> {
                ::record_reflect::impls::record_partial_eq(self, other)
            }
        }
    }
}

/// Generates the `Typed` trait implementation with its const registry.
fn impl_trait_typed(record: &ReflectRecord) -> TokenStream {
    let ident = record.ident;
    let ident_str = ident.to_string();

    let names: Vec<&str> = record
        .active_fields()
        .map(|field| field.name.as_str())
        .collect();
    let types: Vec<_> = record.active_fields().map(|field| field.ty).collect();
    let field_count = names.len();

    quote! {
        impl ::record_reflect::info::Typed for #ident {
            fn record_info() -> &'static ::record_reflect::info::RecordInfo {
                static FIELDS: [::record_reflect::info::NamedField; #field_count] = [
                    #(::record_reflect::info::NamedField::new::<#types>(#names),)*
                ];
                static INFO: ::record_reflect::info::RecordInfo =
                    ::record_reflect::info::RecordInfo::new(#ident_str, &FIELDS);
                &INFO
            }
        }
    }
}

/// Generates the `FromReflect` trait implementation.
fn impl_trait_from_reflect(record: &ReflectRecord) -> TokenStream {
    let ident = record.ident;

    let active_idents: Vec<_> = record.active_fields().map(|field| field.ident).collect();
    let active_types: Vec<_> = record.active_fields().map(|field| field.ty).collect();
    let names: Vec<&str> = record
        .active_fields()
        .map(|field| field.name.as_str())
        .collect();
    let ignored_idents: Vec<_> = record.ignored_fields().map(|field| field.ident).collect();

    quote! {
        impl ::record_reflect::FromReflect for #ident {
            fn from_reflect(
                value: &dyn ::record_reflect::Reflect,
            ) -> ::core::option::Option<Self> {
                match ::record_reflect::Reflect::reflect_ref(value) {
                    ::record_reflect::ops::ValueRef::Record(record) => {
                        ::core::option::Option::Some(Self {
                            #(#active_idents:
                                <#active_types as ::record_reflect::FromReflect>::from_reflect(
                                    ::record_reflect::ops::Record::field(record, #names)?,
                                )?,)*
                            #(#ignored_idents: ::core::default::Default::default(),)*
                        })
                    }
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}
