use serde::Serialize;

use crate::schema::form_type::FormTypeId;

// ============================================================================
// Declarative form schema: field kinds, field specs and alias tables
// ============================================================================

/// Semantic kind of a canonical field. Selects the validator, never the
/// field's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Number { allow_negative: bool },
    Date,
    Enum,
    Url,
    Year,
}

impl FieldKind {
    /// Non-negative number, the common case for counts and amounts.
    pub const AMOUNT: FieldKind = FieldKind::Number { allow_negative: false };

    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number { .. } => "number",
            FieldKind::Date => "date",
            FieldKind::Enum => "enum",
            FieldKind::Url => "url",
            FieldKind::Year => "year",
        }
    }
}

/// One field of a form schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub kind: FieldKind,
}

/// A label variant that maps onto a canonical field key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AliasEntry {
    pub label: &'static str,
    pub key: &'static str,
}

/// Declaration-ordered alias table. Order is significant: the substring tier
/// of the resolver scans entries front to back.
pub type AliasTable = &'static [AliasEntry];

/// Full declaration for one record type.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormSchema {
    pub form_type: FormTypeId,
    pub fields: &'static [FieldSpec],
    pub aliases: AliasTable,
}

impl FormSchema {
    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn kind_of(&self, key: &str) -> Option<FieldKind> {
        self.field(key).map(|f| f.kind)
    }

    /// Aliases pointing at `key`, in declaration order.
    pub fn aliases_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.aliases
            .iter()
            .filter(move |a| a.key == key)
            .map(|a| a.label)
    }
}

/// Shorthand used by the catalog declarations.
pub(crate) const fn field(key: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { key, kind }
}

/// Shorthand used by the catalog declarations.
pub(crate) const fn alias(label: &'static str, key: &'static str) -> AliasEntry {
    AliasEntry { label, key }
}
