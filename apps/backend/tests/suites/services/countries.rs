use crate::support::stores::both_services;

#[tokio::test]
async fn countries_are_sorted_by_english_name() {
    for (backend, service) in both_services().await {
        let countries = service.get_countries().await.unwrap();
        let codes: Vec<_> = countries.iter().map(|c| c.country_code.as_str()).collect();
        // Germany, Lithuania, United Kingdom
        assert_eq!(codes, ["DE", "LT", "GB"], "{backend}");
    }
}

#[tokio::test]
async fn country_ids_follow_the_seed() {
    for (backend, service) in both_services().await {
        let countries = service.get_countries().await.unwrap();
        let germany = countries
            .iter()
            .find(|c| c.country_code == "DE")
            .expect("Germany is seeded");
        assert_eq!(germany.id, 4, "{backend}: seeded ids are not renumbered");
        assert_eq!(germany.country_name_lt, "Vokietija", "{backend}");
    }
}
