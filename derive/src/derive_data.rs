use syn::{Data, DataStruct, DeriveInput, Error, Field, Fields, Ident, LitStr, Result, Type};

use crate::RECORD_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// ReflectRecord

/// The parsed input of a `#[derive(Record)]` invocation.
pub(crate) struct ReflectRecord<'a> {
    pub ident: &'a Ident,
    pub fields: Vec<RecordField<'a>>,
}

impl<'a> ReflectRecord<'a> {
    pub fn parse(ast: &'a DeriveInput) -> Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(Error::new_spanned(
                &ast.generics,
                "`#[derive(Record)]` does not support generic records",
            ));
        }

        let Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) = &ast.data
        else {
            return Err(Error::new_spanned(
                &ast.ident,
                "`#[derive(Record)]` only supports structs with named fields",
            ));
        };

        let fields = fields
            .named
            .iter()
            .map(RecordField::parse)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            ident: &ast.ident,
            fields,
        })
    }

    /// The named (reflectable) members, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &RecordField<'a>> {
        self.fields.iter().filter(|field| !field.ignored)
    }

    /// The members hidden from reflection.
    pub fn ignored_fields(&self) -> impl Iterator<Item = &RecordField<'a>> {
        self.fields.iter().filter(|field| field.ignored)
    }
}

// -----------------------------------------------------------------------------
// RecordField

/// One struct member and its reflection attributes.
pub(crate) struct RecordField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// The reflected name: the identifier text, unless renamed.
    pub name: String,
    pub ignored: bool,
}

impl<'a> RecordField<'a> {
    fn parse(field: &'a Field) -> Result<Self> {
        let mut ignored = false;
        let mut rename: Option<LitStr> = None;

        for attr in &field.attrs {
            if !attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ignore") {
                    ignored = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("expected `ignore` or `rename = \"...\"`"))
                }
            })?;
        }

        if ignored && let Some(rename) = &rename {
            return Err(Error::new_spanned(
                rename,
                "`rename` has no effect on an ignored member",
            ));
        }

        let ident = field
            .ident
            .as_ref()
            .expect("named fields always carry an identifier");

        Ok(Self {
            ident,
            ty: &field.ty,
            name: rename.map_or_else(|| ident.to_string(), |lit| lit.value()),
            ignored,
        })
    }
}
