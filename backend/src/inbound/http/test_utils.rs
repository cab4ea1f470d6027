//! Test helpers for inbound HTTP components.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};

use super::state::HttpState;
use crate::Trace;

/// App with `state` installed, traced, and all API handlers mounted under
/// `/api/v1`.
pub(crate) fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(
            web::scope("/api/v1")
                .service(super::categories::list_categories)
                .service(super::categories::list_category_recipes)
                .service(super::discovery::list_mappings)
                .service(super::discovery::discover)
                .service(super::featured::list_featured)
                .service(super::ratings::get_rating),
        )
}
