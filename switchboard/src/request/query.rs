//! Query parameter declaration.

use crate::template::TemplateValue;

/// A set of query parameters bound to their wire names.
///
/// Implementations are normally generated with [`query_parameters!`](crate::query_parameters).
pub trait QueryParameters {
    /// Returns the parameters that are set, as `(wire name, value)` pairs.
    fn to_query_pairs(&self) -> Vec<(&'static str, TemplateValue)>;
}

/// Unit implements [`QueryParameters`] for operations without query parameters.
impl QueryParameters for () {
    fn to_query_pairs(&self) -> Vec<(&'static str, TemplateValue)> {
        Vec::new()
    }
}

/// Declares a query parameter struct and its [`QueryParameters`] impl.
///
/// Every field is an `Option`; the wire name follows `=>`.
///
/// ## Examples
///
/// ```rust
/// use switchboard::{query_parameters, QueryParameters};
///
/// query_parameters! {
///     /// Paging options.
///     pub struct PageQuery {
///         /// Page size.
///         top: i32 => "%24top",
///         /// Properties to return.
///         select: Vec<String> => "%24select",
///     }
/// }
///
/// let query = PageQuery { top: Some(5), ..Default::default() };
/// let pairs = query.to_query_pairs();
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(pairs[0].0, "%24top");
/// ```
#[macro_export]
macro_rules! query_parameters {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: ::std::option::Option<$ty>,
            )*
        }

        impl $crate::QueryParameters for $name {
            fn to_query_pairs(&self) -> ::std::vec::Vec<(&'static str, $crate::TemplateValue)> {
                let mut pairs = ::std::vec::Vec::new();
                $(
                    if let ::std::option::Option::Some(value) = &self.$field {
                        pairs.push(($wire, $crate::TemplateValue::from(value.clone())));
                    }
                )*
                pairs
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::query_parameters! {
        struct ListQuery {
            count: bool => "%24count",
            filter: String => "%24filter",
            orderby: Vec<String> => "%24orderby",
            top: i32 => "%24top",
        }
    }

    #[test]
    fn test_only_set_fields_are_emitted() {
        let query = ListQuery {
            filter: Some("direction eq 'incoming'".to_string()),
            top: Some(10),
            ..Default::default()
        };
        let pairs = query.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("%24filter", TemplateValue::from("direction eq 'incoming'")),
                ("%24top", TemplateValue::Integer(10)),
            ]
        );
    }

    #[test]
    fn test_list_and_bool_values() {
        let query = ListQuery {
            count: Some(true),
            orderby: Some(vec!["startDateTime desc".to_string()]),
            ..Default::default()
        };
        let pairs = query.to_query_pairs();
        assert_eq!(pairs[0], ("%24count", TemplateValue::Boolean(true)));
        assert_eq!(
            pairs[1],
            (
                "%24orderby",
                TemplateValue::List(vec!["startDateTime desc".to_string()])
            )
        );
    }

    #[test]
    fn test_unit_has_no_pairs() {
        assert!(().to_query_pairs().is_empty());
    }
}
