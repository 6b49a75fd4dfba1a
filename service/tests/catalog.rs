use secrecy::SecretString;
use service::{
    command::{
        ResetFilters, SetSearchQuery, ToggleFavorite, UpdateFilters,
    },
    domain::{
        browse::{Filter, Patch, Toggle},
        city, property, user, Property,
    },
    infra::{gateway::Mock, storage::Memory, Catalog},
    query::{
        BrowseState, Cities, FavoriteProperties, FilteredProperties,
        RecommendedProperties, SubscriptionPlans, TrendingProperties,
    },
    Command as _, Config, Query as _, Service,
};

fn agent() -> property::Agent {
    property::Agent {
        name: user::Name::new("Asha Verma").unwrap(),
        phone: user::Phone::new("+91-9876500000").unwrap(),
        email: user::Email::new("asha.verma@shifly.test").unwrap(),
    }
}

#[expect(clippy::too_many_arguments, reason = "test seed builder")]
fn property(
    id: &str,
    title: &str,
    description: &str,
    city: &str,
    kind: property::Kind,
    category: &str,
    bhk: u8,
    price: u64,
) -> Property {
    Property {
        id: id.into(),
        title: property::Title::new(title).unwrap(),
        description: property::Description::new(description).unwrap(),
        price: property::Price::new(price),
        location: property::Location::new("Central Avenue").unwrap(),
        city: city::Name::new(city).unwrap(),
        bhk,
        kind,
        category: property::Category::new(category).unwrap(),
        area: 1000,
        images: Vec::new(),
        amenities: Vec::new(),
        verified: false,
        trending: false,
        agent: agent(),
        coordinates: property::Coordinates {
            latitude: 28.6,
            longitude: 77.2,
        },
    }
}

fn seed() -> Vec<Property> {
    let mut p1 = property(
        "p1",
        "Sunrise Heights 3BHK",
        "East-facing apartment near the metro",
        "Noida",
        property::Kind::Buy,
        "Apartment",
        3,
        7_500_000,
    );
    p1.verified = true;

    let mut p2 = property(
        "p2",
        "Green Valley 2BHK",
        "Park-facing rental",
        "Noida",
        property::Kind::Rent,
        "Apartment",
        2,
        30_000,
    );
    p2.trending = true;

    let mut p3 = property(
        "p3",
        "Palm Grove Villa",
        "Independent villa with a garden",
        "Gurgaon",
        property::Kind::Buy,
        "Villa",
        5,
        52_000_000,
    );
    p3.trending = true;

    let p4 = property(
        "p4",
        "Lakeside Residency 3BHK",
        "Quiet corner flat",
        "Noida",
        property::Kind::Buy,
        "Villa",
        3,
        9_000_000,
    );

    let p5 = property(
        "p5",
        "Cyber Hub Studio",
        "Cozy studio near Cyber City",
        "Gurgaon",
        property::Kind::Rent,
        "Apartment",
        1,
        28_000,
    );

    let mut p6 = property(
        "p6",
        "Hauz Khas Builder Floor",
        "Second floor with a balcony",
        "Delhi",
        property::Kind::Buy,
        "Builder Floor",
        2,
        12_000_000,
    );
    p6.verified = true;

    vec![p1, p2, p3, p4, p5, p6]
}

fn cities() -> Vec<city::City> {
    vec![city::City {
        id: "c1".into(),
        name: city::Name::new("Noida").unwrap(),
        image: property::ImageUrl::new("https://images.shifly.test/noida.jpg")
            .unwrap(),
        property_count: 1280,
        description: city::Description::new("Planned sectors").unwrap(),
    }]
}

async fn booted() -> Service<Memory, Mock> {
    let (service, background) = Service::new(
        Config {
            otp_secret: SecretString::from("123456".to_owned()),
        },
        Memory::new(),
        Mock::instant(),
        Catalog::new(seed(), cities()),
    );
    background.await.unwrap();
    service
}

fn ids(properties: &[Property]) -> Vec<String> {
    properties.iter().map(|p| p.id.to_string()).collect()
}

#[tokio::test]
async fn default_filter_shows_buy_entries_in_catalog_order() {
    let service = booted().await;

    let visible = service.execute(FilteredProperties).await.unwrap();
    assert_eq!(ids(&visible), ["p1", "p3", "p4", "p6"].map(String::from));
}

#[tokio::test]
async fn switching_transaction_kind_excludes_the_other_kind() {
    let service = booted().await;

    _ = service
        .execute(UpdateFilters {
            patch: Patch {
                kind: Some(property::Kind::Rent),
                ..Patch::default()
            },
        })
        .await
        .unwrap();

    let visible = service.execute(FilteredProperties).await.unwrap();
    assert_eq!(ids(&visible), ["p2", "p5"].map(String::from));
}

#[tokio::test]
async fn city_and_bhk_narrow_irrespective_of_price() {
    let service = booted().await;

    _ = service
        .execute(UpdateFilters {
            patch: Patch {
                city: Some(city::Name::new("Noida")),
                bhk: Some(Some(3)),
                ..Patch::default()
            },
        })
        .await
        .unwrap();
    _ = service
        .execute(SetSearchQuery {
            query: String::new(),
        })
        .await
        .unwrap();

    let visible = service.execute(FilteredProperties).await.unwrap();
    assert_eq!(ids(&visible), ["p1", "p4"].map(String::from));
}

#[tokio::test]
async fn category_narrows_exactly() {
    let service = booted().await;

    _ = service
        .execute(UpdateFilters {
            patch: Patch {
                category: Some(property::Category::new("Villa")),
                ..Patch::default()
            },
        })
        .await
        .unwrap();

    let visible = service.execute(FilteredProperties).await.unwrap();
    assert_eq!(ids(&visible), ["p3", "p4"].map(String::from));
}

#[tokio::test]
async fn price_range_bounds_are_inclusive() {
    let service = booted().await;

    _ = service
        .execute(UpdateFilters {
            patch: Patch {
                min_price: Some(property::Price::new(7_500_000)),
                max_price: Some(property::Price::new(9_000_000)),
                ..Patch::default()
            },
        })
        .await
        .unwrap();

    let visible = service.execute(FilteredProperties).await.unwrap();
    assert_eq!(ids(&visible), ["p1", "p4"].map(String::from));
}

#[tokio::test]
async fn search_matches_city_case_insensitively() {
    let service = booted().await;

    _ = service
        .execute(SetSearchQuery {
            query: "GURGAON".into(),
        })
        .await
        .unwrap();

    let visible = service.execute(FilteredProperties).await.unwrap();
    assert_eq!(ids(&visible), ["p3"].map(String::from));
}

#[tokio::test]
async fn search_stays_conjunctive_with_the_filter() {
    let service = booted().await;

    // "Green Valley" only exists as a rental, so the default Buy filter
    // leaves nothing visible.
    _ = service
        .execute(SetSearchQuery {
            query: "green valley".into(),
        })
        .await
        .unwrap();

    let visible = service.execute(FilteredProperties).await.unwrap();
    assert!(visible.is_empty());
}

#[tokio::test]
async fn clearing_the_query_returns_to_filter_only_results() {
    let service = booted().await;

    _ = service
        .execute(SetSearchQuery {
            query: "palm grove".into(),
        })
        .await
        .unwrap();
    let narrowed = service.execute(FilteredProperties).await.unwrap();
    assert_eq!(ids(&narrowed), ["p3"].map(String::from));

    let cleared = service
        .execute(SetSearchQuery {
            query: String::new(),
        })
        .await
        .unwrap();
    assert!(cleared.is_none());

    let visible = service.execute(FilteredProperties).await.unwrap();
    assert_eq!(ids(&visible), ["p1", "p3", "p4", "p6"].map(String::from));
}

#[tokio::test]
async fn partial_update_keeps_unrelated_fields() {
    let service = booted().await;

    _ = service
        .execute(UpdateFilters {
            patch: Patch {
                kind: Some(property::Kind::Rent),
                ..Patch::default()
            },
        })
        .await
        .unwrap();

    let filter = service
        .execute(UpdateFilters {
            patch: Patch {
                city: Some(city::Name::new("Gurgaon")),
                ..Patch::default()
            },
        })
        .await
        .unwrap();

    assert_eq!(filter.kind, property::Kind::Rent);
    assert_eq!(filter.city, city::Name::new("Gurgaon"));
}

#[tokio::test]
async fn reset_restores_every_default() {
    let service = booted().await;

    _ = service
        .execute(UpdateFilters {
            patch: Patch {
                kind: Some(property::Kind::Rent),
                city: Some(city::Name::new("Noida")),
                category: Some(property::Category::new("Apartment")),
                bhk: Some(Some(2)),
                min_price: Some(property::Price::new(10_000)),
                max_price: Some(property::Price::new(50_000)),
            },
        })
        .await
        .unwrap();

    let filter = service.execute(ResetFilters).await.unwrap();
    assert_eq!(filter, Filter::default());
}

#[tokio::test]
async fn favorite_toggle_pairs_are_idempotent() {
    let service = booted().await;

    let added = service
        .execute(ToggleFavorite {
            property_id: "p4".into(),
        })
        .await
        .unwrap();
    assert_eq!(added, Toggle::Added);

    let removed = service
        .execute(ToggleFavorite {
            property_id: "p4".into(),
        })
        .await
        .unwrap();
    assert_eq!(removed, Toggle::Removed);

    let browse = service.execute(BrowseState).await.unwrap();
    assert!(browse.favorites.is_empty());
}

#[tokio::test]
async fn favorites_resolve_in_catalog_order() {
    let service = booted().await;

    for id in ["p4", "p1"] {
        _ = service
            .execute(ToggleFavorite {
                property_id: id.into(),
            })
            .await
            .unwrap();
    }

    let favorites = service.execute(FavoriteProperties).await.unwrap();
    assert_eq!(ids(&favorites), ["p1", "p4"].map(String::from));
}

#[tokio::test]
async fn home_screen_reads_follow_the_flags() {
    let service = booted().await;

    let trending = service.execute(TrendingProperties).await.unwrap();
    assert_eq!(ids(&trending), ["p2", "p3"].map(String::from));

    let recommended = service.execute(RecommendedProperties).await.unwrap();
    assert_eq!(
        ids(&recommended),
        ["p1", "p2", "p3", "p6"].map(String::from),
    );
}

#[tokio::test]
async fn cities_come_back_in_catalog_order() {
    let service = booted().await;

    let cities = service.execute(Cities).await.unwrap();
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].name, city::Name::new("Noida").unwrap());
}

#[tokio::test]
async fn plan_table_prices_the_paid_tiers() {
    let service = booted().await;

    let plans = service.execute(SubscriptionPlans).await.unwrap();
    assert_eq!(plans.len(), 4);

    let basic = plans
        .iter()
        .find(|p| p.tier == user::Tier::Basic)
        .expect("basic plan");
    assert_eq!(basic.price.expect("priced").to_string(), "299INR");

    let pro = plans
        .iter()
        .find(|p| p.tier == user::Tier::Pro)
        .expect("pro plan");
    assert_eq!(pro.price.expect("priced").to_string(), "999INR");
}
