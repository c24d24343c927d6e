//! Stable partitioning of record sequences.
//!
//! Two runtime-equivalent forms exist: a structural field-presence test over
//! dynamic [`Record`]s, and an explicit discriminant form over sum types.
//! Only the explicit form hands the caller the exact variant binding; the
//! structural form keeps the common record type.

use super::Record;
use crate::logging::kit_log;

/// Stable subsequence of the records that possess `field`.
///
/// Presence of the field is the discriminator, not its value. The result
/// borrows from `records`; an empty input or a field no record declares
/// yields an empty result.
pub fn partition_by_field<'a>(records: &'a [Record], field: &str) -> Vec<&'a Record> {
    let subset: Vec<&Record> = records
        .iter()
        .filter(|record| record.has_field(field))
        .collect();
    kit_log!(
        log::Level::Trace,
        "partition_by_field",
        "field={} kept={} total={}",
        field,
        subset.len(),
        records.len(),
    );
    subset
}

/// Record sets carrying an explicit discriminant.
pub trait Tagged {
    /// Discriminant identifying the variant of each record.
    type Tag: Copy + PartialEq;

    /// The discriminant of this record.
    fn tag(&self) -> Self::Tag;
}

/// Stable subsequence of the records whose discriminant equals `tag`.
pub fn partition_by_tag<R: Tagged>(records: &[R], tag: R::Tag) -> Vec<&R> {
    records.iter().filter(|record| record.tag() == tag).collect()
}

/// Narrowing partition: `select` yields the exact variant binding, so the
/// result is typed as that variant rather than as the union.
pub fn narrow<'a, R, V>(records: &'a [R], select: impl FnMut(&'a R) -> Option<V>) -> Vec<V> {
    records.iter().filter_map(select).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{narrow, partition_by_field, partition_by_tag, Tagged};
    use crate::{
        record::{FieldValue, Record},
        schema::{FieldType, Shape},
        shape,
    };

    fn tagged_shape(tag_field: &str) -> Arc<Shape> {
        Arc::new(shape!(
            ("name", FieldType::Text),
            ("age", FieldType::Number),
            (tag_field, FieldType::Text),
        ))
    }

    fn tagged_record(tag_field: &str, tag_value: &str) -> Record {
        Record::new(
            tagged_shape(tag_field),
            [
                ("name", FieldValue::from("aaa")),
                ("age", FieldValue::from(23)),
                (tag_field, FieldValue::from(tag_value)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn presence_of_the_distinguishing_field_partitions_records() {
        let records = vec![tagged_record("hoge", "aaaa"), tagged_record("fuga", "bbbb")];

        let hoge = partition_by_field(&records, "hoge");
        assert_eq!(hoge.len(), 1);
        assert_eq!(hoge[0].get("hoge").and_then(FieldValue::as_text), Some("aaaa"));

        let fuga = partition_by_field(&records, "fuga");
        assert_eq!(fuga.len(), 1);
        assert_eq!(fuga[0].get("fuga").and_then(FieldValue::as_text), Some("bbbb"));
    }

    #[test]
    fn empty_input_and_absent_fields_yield_empty_results() {
        let records: Vec<Record> = Vec::new();
        assert!(partition_by_field(&records, "hoge").is_empty());

        let records = vec![tagged_record("hoge", "aaaa")];
        assert!(partition_by_field(&records, "piyo").is_empty());
    }

    #[test]
    fn partitions_preserve_relative_order_and_cover_every_record() {
        let mut records = Vec::new();
        for i in 0..64 {
            let field = if fastrand::bool() { "hoge" } else { "fuga" };
            records.push(tagged_record(field, &format!("v{i}")));
        }

        let hoge = partition_by_field(&records, "hoge");
        let fuga = partition_by_field(&records, "fuga");
        assert_eq!(hoge.len() + fuga.len(), records.len());

        // each subset is a subsequence: values reappear in original order
        let mut merged: Vec<&Record> = Vec::new();
        let (mut h, mut f) = (hoge.iter(), fuga.iter());
        let (mut next_h, mut next_f) = (h.next(), f.next());
        for record in &records {
            if next_h.is_some_and(|r| std::ptr::eq(*r, record)) {
                merged.push(record);
                next_h = h.next();
            } else if next_f.is_some_and(|r| std::ptr::eq(*r, record)) {
                merged.push(record);
                next_f = f.next();
            }
        }
        assert_eq!(merged.len(), records.len());
    }

    #[derive(Debug, PartialEq)]
    enum Contact {
        Email { name: String, address: String },
        Phone { name: String, number: String },
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ContactKind {
        Email,
        Phone,
    }

    impl Tagged for Contact {
        type Tag = ContactKind;

        fn tag(&self) -> ContactKind {
            match self {
                Contact::Email { .. } => ContactKind::Email,
                Contact::Phone { .. } => ContactKind::Phone,
            }
        }
    }

    fn contacts() -> Vec<Contact> {
        vec![
            Contact::Email {
                name: "aaa".into(),
                address: "aaa@example.com".into(),
            },
            Contact::Phone {
                name: "bbb".into(),
                number: "555-0100".into(),
            },
            Contact::Email {
                name: "ccc".into(),
                address: "ccc@example.com".into(),
            },
        ]
    }

    #[test]
    fn discriminants_partition_sum_types() {
        let records = contacts();
        let emails = partition_by_tag(&records, ContactKind::Email);
        let phones = partition_by_tag(&records, ContactKind::Phone);
        assert_eq!(emails.len(), 2);
        assert_eq!(phones.len(), 1);
        assert_eq!(emails.len() + phones.len(), records.len());
    }

    #[test]
    fn narrowing_yields_the_variant_binding() {
        let records = contacts();
        let addresses = narrow(&records, |record| match record {
            Contact::Email { address, .. } => Some(address.as_str()),
            Contact::Phone { .. } => None,
        });
        assert_eq!(addresses, vec!["aaa@example.com", "ccc@example.com"]);
    }
}
