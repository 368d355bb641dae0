use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthDoc {
    pub status: String,
}

#[derive(ToSchema)]
pub struct StatsDoc {
    pub amenities: usize,
    pub cities: usize,
    pub places: usize,
    pub reviews: usize,
    pub states: usize,
    pub users: usize,
}

#[derive(ToSchema)]
pub struct NewStateDoc {
    pub name: String,
}

#[derive(ToSchema)]
pub struct StateUpdateDoc {
    pub name: Option<String>,
}

#[derive(ToSchema)]
pub struct NewCityDoc {
    pub name: String,
}

#[derive(ToSchema)]
pub struct CityUpdateDoc {
    pub name: Option<String>,
}

#[derive(ToSchema)]
pub struct NewPlaceDoc {
    pub name: String,
    pub user_id: String,
    pub description: Option<String>,
    pub number_rooms: Option<i64>,
    pub number_bathrooms: Option<i64>,
    pub max_guest: Option<i64>,
    pub price_by_night: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenity_ids: Option<Vec<String>>,
}

#[derive(ToSchema)]
pub struct PlaceUpdateDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub number_rooms: Option<i64>,
    pub number_bathrooms: Option<i64>,
    pub max_guest: Option<i64>,
    pub price_by_night: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenity_ids: Option<Vec<String>>,
}

#[derive(ToSchema)]
pub struct NewUserDoc {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(ToSchema)]
pub struct UserUpdateDoc {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(ToSchema)]
pub struct NewReviewDoc {
    pub text: String,
    pub user_id: String,
}

#[derive(ToSchema)]
pub struct ReviewUpdateDoc {
    pub text: Option<String>,
}

#[derive(ToSchema)]
pub struct NewAmenityDoc {
    pub name: String,
}

#[derive(ToSchema)]
pub struct AmenityUpdateDoc {
    pub name: Option<String>,
}

#[derive(ToSchema)]
pub struct SearchRequestDoc {
    pub states: Option<Vec<String>>,
    pub cities: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::index::status,
        crate::routes::index::stats,
        crate::routes::states::list,
        crate::routes::states::get,
        crate::routes::states::create,
        crate::routes::states::update,
        crate::routes::states::delete,
        crate::routes::cities::list_by_state,
        crate::routes::cities::get,
        crate::routes::cities::create,
        crate::routes::cities::update,
        crate::routes::cities::delete,
        crate::routes::places::list_by_city,
        crate::routes::places::get,
        crate::routes::places::create,
        crate::routes::places::update,
        crate::routes::places::delete,
        crate::routes::search::places_search,
        crate::routes::reviews::list_by_place,
        crate::routes::reviews::get,
        crate::routes::reviews::create,
        crate::routes::reviews::update,
        crate::routes::reviews::delete,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::create,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::amenities::list,
        crate::routes::amenities::get,
        crate::routes::amenities::create,
        crate::routes::amenities::update,
        crate::routes::amenities::delete,
        crate::routes::places_amenities::list,
        crate::routes::places_amenities::link,
        crate::routes::places_amenities::unlink,
    ),
    components(
        schemas(
            HealthDoc,
            StatsDoc,
            NewStateDoc,
            StateUpdateDoc,
            NewCityDoc,
            CityUpdateDoc,
            NewPlaceDoc,
            PlaceUpdateDoc,
            NewUserDoc,
            UserUpdateDoc,
            NewReviewDoc,
            ReviewUpdateDoc,
            NewAmenityDoc,
            AmenityUpdateDoc,
            SearchRequestDoc,
        )
    ),
    tags(
        (name = "index"),
        (name = "states"),
        (name = "cities"),
        (name = "places"),
        (name = "place amenities"),
        (name = "reviews"),
        (name = "users"),
        (name = "amenities")
    )
)]
pub struct ApiDoc;
