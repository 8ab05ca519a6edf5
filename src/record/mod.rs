//! records and field resolution
//!
//! a record is any structured value with named attributes. the evaluator only
//! sees records through the [`Record`] trait: it asks for the attribute
//! identifiers, matches the requested field name against them after
//! normalization, and reads the matching attribute as a [`FieldValue`].
//!
//! implementations are provided for `serde_json` documents and string-keyed
//! maps; plain structs get one through [`impl_record!`](crate::impl_record).

mod json;
mod map;
mod resolve;
mod value;

pub use resolve::{normalize_field_name, resolve};
pub use value::{FieldValue, Kind, ToFieldValue};

/// a structured value whose attributes can be looked up by name
pub trait Record {
    /// attribute identifiers as declared by the record
    ///
    /// returns `None` when the value is not record-shaped (e.g. a JSON
    /// number passed where an object was expected).
    fn attribute_names(&self) -> Option<Vec<&str>>;

    /// current value of the attribute with exactly this identifier
    fn attribute(&self, name: &str) -> Option<FieldValue<'_>>;

    /// name used in error messages
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn attribute_names(&self) -> Option<Vec<&str>> {
        (**self).attribute_names()
    }

    fn attribute(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).attribute(name)
    }

    fn type_name(&self) -> &str {
        (**self).type_name()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn attribute_names(&self) -> Option<Vec<&str>> {
        (**self).attribute_names()
    }

    fn attribute(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).attribute(name)
    }

    fn type_name(&self) -> &str {
        (**self).type_name()
    }
}

/// implement [`Record`] and [`ToFieldValue`] for a plain struct
///
/// every listed field must implement [`ToFieldValue`]; nested structs that
/// went through this macro do.
///
/// ```
/// use objfilter::impl_record;
///
/// struct Task {
///     id: i64,
///     task_type: String,
///     house_ids: Vec<i64>,
/// }
///
/// impl_record!(Task { id, task_type, house_ids });
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::record::Record for $ty {
            fn attribute_names(&self) -> ::std::option::Option<::std::vec::Vec<&str>> {
                // raw identifiers list without their `r#`
                ::std::option::Option::Some(::std::vec![
                    $(::std::stringify!($field).trim_start_matches("r#")),*
                ])
            }

            fn attribute(
                &self,
                name: &str,
            ) -> ::std::option::Option<$crate::record::FieldValue<'_>> {
                match name {
                    $(declared
                        if declared == ::std::stringify!($field).trim_start_matches("r#") =>
                    {
                        ::std::option::Option::Some(
                            $crate::record::ToFieldValue::to_field_value(&self.$field),
                        )
                    })*
                    _ => ::std::option::Option::None,
                }
            }

            fn type_name(&self) -> &str {
                ::std::stringify!($ty)
            }
        }

        impl $crate::record::ToFieldValue for $ty {
            fn to_field_value(&self) -> $crate::record::FieldValue<'_> {
                $crate::record::FieldValue::Record(self)
            }
        }
    };
}
