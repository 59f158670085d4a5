use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(ToSchema)]
pub struct DoctorCreateDoc {
    pub first_name: String,
    pub last_name: String,
    pub special_interest: Option<String>,
    pub email: String,
}

#[derive(ToSchema)]
pub struct DoctorReadDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub special_interest: Option<String>,
    pub email: String,
}

#[derive(ToSchema)]
pub struct PatientCreateDoc {
    pub first_name: String,
    pub last_name: String,
    #[schema(example = "1990-01-31")]
    pub date_of_birth: String,
}

#[derive(ToSchema)]
pub struct PatientReadDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[schema(example = "1990-01-31")]
    pub date_of_birth: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::doctors::list,
        crate::routes::doctors::create,
        crate::routes::doctors::get,
        crate::routes::doctors::update,
        crate::routes::doctors::delete,
        crate::routes::patients::list,
        crate::routes::patients::create,
        crate::routes::patients::get,
        crate::routes::patients::update,
        crate::routes::patients::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            ErrorDoc,
            DoctorCreateDoc,
            DoctorReadDoc,
            PatientCreateDoc,
            PatientReadDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "doctors"),
        (name = "patients")
    )
)]
pub struct ApiDoc;
