use chrono::{Duration, TimeZone, Utc};
use docfixture::{DocumentId, FixtureGenerator, GeneratorConfig, PageStatus, RandomFaker};
use proptest::prelude::*;

fn id_strategy() -> impl Strategy<Value = String> {
    (0u64..100_000, "[A-Z][0-9]{1,6}", "[0-9]{1,5}", "[A-Z]{1,2}")
        .prop_map(|(a, b, c, d)| format!("{}-{}-{}-{}", a, b, c, d))
}

fn generator(seed: u64) -> FixtureGenerator<RandomFaker> {
    let anchor = Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap();
    FixtureGenerator::new(
        RandomFaker::seeded(seed, anchor, 365),
        GeneratorConfig::default(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_page_count_and_ids(raw in id_strategy(), page_count in 0u32..40, seed in any::<u64>()) {
        let id = DocumentId::parse(&raw).unwrap();
        let doc = generator(seed).generate_document(&id, page_count).unwrap();

        prop_assert_eq!(doc.pages.len(), page_count as usize);
        prop_assert_eq!(&doc.id, &raw);
        for (i, page) in doc.pages.iter().enumerate() {
            prop_assert_eq!(&page.id, &format!("{}-{}", raw, i + 1));
            prop_assert_eq!(page.status, PageStatus::Preprocessed);
        }
    }

    #[test]
    fn prop_src_is_shared_by_all_pages(raw in id_strategy(), page_count in 1u32..20) {
        let id = DocumentId::parse(&raw).unwrap();
        let doc = generator(0).generate_document(&id, page_count).unwrap();

        let [a, b, c, d] = id.segments();
        let expected = format!("https://images.u10.teba-saki.net/{}-{}-{}/{}.png", a, b, c, d);
        prop_assert!(doc.pages.iter().all(|p| p.src == expected));
    }

    #[test]
    fn prop_timestamps_within_a_year_of_anchor(raw in id_strategy(), seed in any::<u64>()) {
        let anchor = Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap();
        let earliest = anchor - Duration::days(365);
        let id = DocumentId::parse(&raw).unwrap();
        let doc = generator(seed).generate_document(&id, 3).unwrap();

        let mut stamps = vec![doc.created_at, doc.updated_at];
        for page in &doc.pages {
            stamps.push(page.created_at);
            stamps.push(page.updated_at);
        }
        for ts in stamps {
            prop_assert!(ts > earliest && ts <= anchor);
        }
    }

    #[test]
    fn prop_same_inputs_same_structure(raw in id_strategy(), page_count in 0u32..10, s1 in any::<u64>(), s2 in any::<u64>()) {
        let id = DocumentId::parse(&raw).unwrap();
        let a = serde_json::to_value(generator(s1).generate_document(&id, page_count).unwrap()).unwrap();
        let b = serde_json::to_value(generator(s2).generate_document(&id, page_count).unwrap()).unwrap();

        let keys = |v: &serde_json::Value| v.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        prop_assert_eq!(keys(&a), keys(&b));
        prop_assert_eq!(a["pages"].as_array().unwrap().len(), b["pages"].as_array().unwrap().len());
        for (pa, pb) in a["pages"].as_array().unwrap().iter().zip(b["pages"].as_array().unwrap()) {
            prop_assert_eq!(keys(pa), keys(pb));
            prop_assert_eq!(&pa["id"], &pb["id"]);
            prop_assert_eq!(&pa["index"], &pb["index"]);
        }
    }
}
