//! Property-based tests for the IOP projection.

use inspire_papers::formatters::project;
use inspire_papers::models::{AuthorEntry, Flag, Imprint, PublicationInfo, Record, Scalar, TitleEntry};
use proptest::prelude::*;

fn make_record(names: Vec<String>) -> Record {
    Record {
        titles: vec![TitleEntry { title: "T".to_string() }],
        authors: names.into_iter().map(AuthorEntry::new).collect(),
        ..Default::default()
    }
}

proptest! {
    /// Author lists within the limit are the names joined, with no marker.
    #[test]
    fn author_list_within_limit(
        names in proptest::collection::vec("[A-Za-z]{1,12}, [A-Z]\\.", 1..20),
        extra in 0usize..5,
    ) {
        let max_authors = names.len() + extra;
        let row = project(&make_record(names.clone()), max_authors, "x").unwrap();

        prop_assert_eq!(row.author_list.split("; ").count(), names.len());
        prop_assert!(!row.author_list.ends_with("et. al."));
        prop_assert_eq!(row.author_list, names.join("; "));
    }

    /// Author lists over the limit keep exactly `max_authors` names plus the marker.
    #[test]
    fn author_list_over_limit(
        names in proptest::collection::vec("[A-Za-z]{1,12}, [A-Z]\\.", 2..30),
        cut in 0usize..29,
    ) {
        let max_authors = cut % names.len();
        let row = project(&make_record(names.clone()), max_authors, "x").unwrap();

        let parts: Vec<&str> = row.author_list.split("; ").collect();
        prop_assert_eq!(parts.len(), max_authors + 1);
        prop_assert_eq!(parts[max_authors], "et. al.");
        prop_assert_eq!(&parts[..max_authors], &names[..max_authors]);
    }

    /// First Author is "Y" iff the name is a substring of the first author,
    /// and Author for Correspondance always mirrors it.
    #[test]
    fn first_author_mirrors_substring_match(
        first in "[A-Za-z, ]{0,20}",
        needle in "[A-Za-z]{0,4}",
    ) {
        let row = project(&make_record(vec![first.clone(), "Other, O.".to_string()]), 10, &needle).unwrap();

        prop_assert_eq!(row.first_author == Flag::Yes, first.contains(&needle));
        prop_assert_eq!(row.corresponding_author, row.first_author);
    }

    /// The month is only filled when the imprint year equals the publication year.
    #[test]
    fn month_requires_matching_year(
        pub_year in 1950i64..2030,
        imprint_year in 1950i64..2030,
        month in 1u32..13,
    ) {
        let mut record = make_record(vec!["A".to_string()]);
        record.publication_info = vec![PublicationInfo {
            year: Some(Scalar::Integer(pub_year)),
            ..Default::default()
        }];
        record.imprints = vec![Imprint { date: Some(format!("{imprint_year}-{month:02}-01")) }];

        let row = project(&record, 10, "A").unwrap();
        if pub_year == imprint_year {
            prop_assert_eq!(row.publishing_month, format!("{month:02}"));
        } else {
            prop_assert_eq!(row.publishing_month, "");
        }
    }

    /// Projection never panics on arbitrary optional metadata.
    #[test]
    fn projection_never_panics_on_optional_fields(
        year in proptest::option::of(".*"),
        date in proptest::option::of(".*"),
        volume in proptest::option::of(".*"),
        start in proptest::option::of(".*"),
        end in proptest::option::of(".*"),
    ) {
        let json = serde_json::json!({
            "titles": [{"title": "T"}],
            "authors": [{"full_name": "A"}],
            "publication_info": [{
                "year": year,
                "journal_volume": volume,
                "page_start": start,
                "page_end": end
            }],
            "imprints": [{"date": date}]
        });

        let record: Record = serde_json::from_value(json).unwrap();
        prop_assert!(project(&record, 10, "A").is_ok());
    }
}
