//! typed view of a resolved attribute

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, FixedOffset, TimeZone};

use super::Record;

/// the closed set of value kinds the comparators understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    UInt,
    Float,
    Str,
    Timestamp,
    Seq,
    Ref,
    Record,
    /// element type of a sequence whose elements differ in kind
    Mixed,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::UInt => "uint",
            Kind::Float => "float",
            Kind::Str => "string",
            Kind::Timestamp => "timestamp",
            Kind::Seq => "sequence",
            Kind::Ref => "reference",
            Kind::Record => "record",
            Kind::Mixed => "mixed",
        }
    }

    /// reference-like kinds that can hold "nothing"
    pub fn is_nullable(&self) -> bool {
        matches!(self, Kind::Null | Kind::Seq | Kind::Ref)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Kind::Int | Kind::UInt | Kind::Float)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// a resolved field value
///
/// borrows from the record it was resolved from and lives only as long as
/// the operator call that asked for it.
#[derive(Clone)]
pub enum FieldValue<'a> {
    /// absent reference (`None`, JSON `null`)
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(Cow<'a, str>),
    Timestamp(DateTime<FixedOffset>),
    Seq(Vec<FieldValue<'a>>),
    /// present optional value
    Ref(Box<FieldValue<'a>>),
    /// nested record
    Record(&'a dyn Record),
}

impl<'a> FieldValue<'a> {
    pub fn kind(&self) -> Kind {
        match self {
            FieldValue::Null => Kind::Null,
            FieldValue::Bool(_) => Kind::Bool,
            FieldValue::Int(_) => Kind::Int,
            FieldValue::UInt(_) => Kind::UInt,
            FieldValue::Float(_) => Kind::Float,
            FieldValue::Str(_) => Kind::Str,
            FieldValue::Timestamp(_) => Kind::Timestamp,
            FieldValue::Seq(_) => Kind::Seq,
            FieldValue::Ref(_) => Kind::Ref,
            FieldValue::Record(_) => Kind::Record,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[FieldValue<'a>]> {
        match self {
            FieldValue::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// follow a present reference to its target
    pub fn deref_value(&self) -> &FieldValue<'a> {
        match self {
            FieldValue::Ref(inner) => inner.deref_value(),
            other => other,
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "Null"),
            FieldValue::Bool(b) => write!(f, "Bool({:?})", b),
            FieldValue::Int(n) => write!(f, "Int({:?})", n),
            FieldValue::UInt(n) => write!(f, "UInt({:?})", n),
            FieldValue::Float(n) => write!(f, "Float({:?})", n),
            FieldValue::Str(s) => write!(f, "Str({:?})", s),
            FieldValue::Timestamp(t) => write!(f, "Timestamp({:?})", t),
            FieldValue::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            FieldValue::Ref(inner) => f.debug_tuple("Ref").field(inner).finish(),
            FieldValue::Record(r) => write!(f, "Record({})", r.type_name()),
        }
    }
}

/// textual form, used by substring matching
impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::UInt(n) => write!(f, "{}", n),
            FieldValue::Float(n) => write!(f, "{}", n),
            FieldValue::Str(s) => write!(f, "{}", s),
            FieldValue::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
            FieldValue::Seq(items) => {
                write!(f, "[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            FieldValue::Ref(inner) => write!(f, "{}", inner),
            FieldValue::Record(record) => {
                write!(f, "{{")?;
                for (i, name) in record.attribute_names().unwrap_or_default().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match record.attribute(name) {
                        Some(v) => write!(f, "{}: {}", name, v)?,
                        None => write!(f, "{}: null", name)?,
                    }
                }
                write!(f, "}}")
            }
        }
    }
}

/// conversion of a struct attribute into its typed view
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue<'_>;
}

macro_rules! signed_field_value {
    ($($t:ty),*) => {
        $(impl ToFieldValue for $t {
            fn to_field_value(&self) -> FieldValue<'_> {
                FieldValue::Int(*self as i64)
            }
        })*
    };
}

macro_rules! unsigned_field_value {
    ($($t:ty),*) => {
        $(impl ToFieldValue for $t {
            fn to_field_value(&self) -> FieldValue<'_> {
                FieldValue::UInt(*self as u64)
            }
        })*
    };
}

signed_field_value!(i8, i16, i32, i64, isize);
unsigned_field_value!(u8, u16, u32, u64, usize);

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl ToFieldValue for f32 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self as f64)
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl ToFieldValue for str {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(Cow::Borrowed(self))
    }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(Cow::Borrowed(self.as_str()))
    }
}

impl ToFieldValue for char {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(Cow::Owned(self.to_string()))
    }
}

impl<Tz: TimeZone> ToFieldValue for DateTime<Tz> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Timestamp(self.fixed_offset())
    }
}

impl<T: ToFieldValue> ToFieldValue for [T] {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.iter().map(ToFieldValue::to_field_value).collect())
    }
}

impl<T: ToFieldValue> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        self.as_slice().to_field_value()
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        match self {
            Some(v) => FieldValue::Ref(Box::new(v.to_field_value())),
            None => FieldValue::Null,
        }
    }
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for Box<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        (**self).to_field_value()
    }
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for &T {
    fn to_field_value(&self) -> FieldValue<'_> {
        (**self).to_field_value()
    }
}
