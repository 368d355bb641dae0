use std::collections::HashSet;

use uuid::Uuid;

use models::Place;

use crate::storage::ObjectStore;

/// Filters for `POST /places_search`. Ids that do not resolve to stored
/// entities are dropped silently, never treated as errors.
#[derive(Clone, Debug, Default)]
pub struct SearchFilters {
    pub states: Vec<Uuid>,
    pub cities: Vec<Uuid>,
    pub amenities: Vec<Uuid>,
}

/// Compute the place set for a search request.
///
/// With no state or city filter every place is a candidate. Otherwise the
/// candidate set is the union of places belonging to the deduplicated city
/// set reachable from the given state and city ids. A non-empty resolved
/// amenity filter then keeps only places carrying every listed amenity.
pub async fn search_places(store: &ObjectStore, filters: SearchFilters) -> Vec<Place> {
    let mut candidates: Vec<Place>;

    if filters.states.is_empty() && filters.cities.is_empty() {
        candidates = store.places().all().await;
    } else {
        let mut city_ids: HashSet<Uuid> = HashSet::new();
        let all_cities = store.cities().all().await;
        for state_id in &filters.states {
            if store.states().get(state_id).await.is_some() {
                city_ids.extend(all_cities.iter().filter(|c| c.state_id == *state_id).map(|c| c.id));
            }
        }
        for city_id in &filters.cities {
            if all_cities.iter().any(|c| c.id == *city_id) {
                city_ids.insert(*city_id);
            }
        }
        candidates = store
            .places()
            .all()
            .await
            .into_iter()
            .filter(|p| city_ids.contains(&p.city_id))
            .collect();
    }

    let mut wanted: Vec<Uuid> = Vec::with_capacity(filters.amenities.len());
    for amenity_id in &filters.amenities {
        if store.amenities().get(amenity_id).await.is_some() {
            wanted.push(*amenity_id);
        }
    }
    if !wanted.is_empty() {
        candidates.retain(|p| p.has_all_amenities(&wanted));
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{NewAmenity, NewCity, NewPlace, NewState, NewUser};
    use crate::{
        amenity_service, city_service, place_service, state_service, test_support::temp_store,
        user_service,
    };

    struct Fixture {
        store: std::sync::Arc<ObjectStore>,
        ca: Uuid,
        nv: Uuid,
        fremont: Uuid,
        reno: Uuid,
        loft: Uuid,
        cabin: Uuid,
        wifi: Uuid,
        pool: Uuid,
    }

    fn new_place(user_id: Uuid, name: &str) -> NewPlace {
        NewPlace {
            name: name.into(),
            user_id,
            description: String::new(),
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: 0.0,
            longitude: 0.0,
            amenity_ids: Vec::new(),
        }
    }

    /// Two states, one city each, one place each; the loft has wifi+pool,
    /// the cabin only wifi.
    async fn seed() -> Result<Fixture, anyhow::Error> {
        let store = temp_store().await;
        let ca = state_service::create_state(&store, NewState { name: "California".into() }).await?;
        let nv = state_service::create_state(&store, NewState { name: "Nevada".into() }).await?;
        let fremont = city_service::create_city(&store, ca.id, NewCity { name: "Fremont".into() }).await?;
        let reno = city_service::create_city(&store, nv.id, NewCity { name: "Reno".into() }).await?;
        let user = user_service::create_user(
            &store,
            NewUser {
                email: "host@example.com".into(),
                password: "secret".into(),
                first_name: String::new(),
                last_name: String::new(),
            },
        )
        .await?;
        let loft = place_service::create_place(&store, fremont.id, new_place(user.id, "Loft")).await?;
        let cabin = place_service::create_place(&store, reno.id, new_place(user.id, "Cabin")).await?;
        let wifi = amenity_service::create_amenity(&store, NewAmenity { name: "Wifi".into() }).await?;
        let pool = amenity_service::create_amenity(&store, NewAmenity { name: "Pool".into() }).await?;
        place_service::link_amenity(&store, loft.id, wifi.id).await?;
        place_service::link_amenity(&store, loft.id, pool.id).await?;
        place_service::link_amenity(&store, cabin.id, wifi.id).await?;
        Ok(Fixture {
            store,
            ca: ca.id,
            nv: nv.id,
            fremont: fremont.id,
            reno: reno.id,
            loft: loft.id,
            cabin: cabin.id,
            wifi: wifi.id,
            pool: pool.id,
        })
    }

    fn ids(places: &[Place]) -> Vec<Uuid> {
        let mut v: Vec<Uuid> = places.iter().map(|p| p.id).collect();
        v.sort();
        v
    }

    #[tokio::test]
    async fn empty_filters_return_every_place() -> Result<(), anyhow::Error> {
        let fx = seed().await?;
        let all = search_places(&fx.store, SearchFilters::default()).await;
        assert_eq!(all.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn state_and_city_filters_union() -> Result<(), anyhow::Error> {
        let fx = seed().await?;

        let ca_only = search_places(
            &fx.store,
            SearchFilters { states: vec![fx.ca], ..Default::default() },
        )
        .await;
        assert_eq!(ids(&ca_only), vec![fx.loft]);
        assert!(!ids(&ca_only).contains(&fx.cabin));

        let union = search_places(
            &fx.store,
            SearchFilters { states: vec![fx.ca], cities: vec![fx.reno], ..Default::default() },
        )
        .await;
        assert_eq!(union.len(), 2);

        // a city listed both directly and via its state is not duplicated
        let deduped = search_places(
            &fx.store,
            SearchFilters { states: vec![fx.ca], cities: vec![fx.fremont], ..Default::default() },
        )
        .await;
        assert_eq!(deduped.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn unresolvable_ids_are_dropped_silently() -> Result<(), anyhow::Error> {
        let fx = seed().await?;

        // a ghost state alone yields an empty candidate set
        let ghost = search_places(
            &fx.store,
            SearchFilters { states: vec![Uuid::new_v4()], ..Default::default() },
        )
        .await;
        assert!(ghost.is_empty());

        // ghost amenity ids contribute no filtering at all
        let all = search_places(
            &fx.store,
            SearchFilters { amenities: vec![Uuid::new_v4()], ..Default::default() },
        )
        .await;
        assert_eq!(all.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn amenity_filter_requires_every_listed_amenity() -> Result<(), anyhow::Error> {
        let fx = seed().await?;

        let with_wifi = search_places(
            &fx.store,
            SearchFilters { amenities: vec![fx.wifi], ..Default::default() },
        )
        .await;
        assert_eq!(with_wifi.len(), 2);

        let with_both = search_places(
            &fx.store,
            SearchFilters { amenities: vec![fx.wifi, fx.pool], ..Default::default() },
        )
        .await;
        assert_eq!(ids(&with_both), vec![fx.loft]);

        // geography and amenities combine: Nevada + pool leaves nothing
        let none = search_places(
            &fx.store,
            SearchFilters { states: vec![fx.nv], amenities: vec![fx.pool], ..Default::default() },
        )
        .await;
        assert!(none.is_empty());
        Ok(())
    }
}
