//! Application factory.
//!
//! Builds the actix `App` with all routes, middleware, and state.
//! Generic over the repository traits so the integration tests run the
//! same wiring over in-memory mocks.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use mercato_core::repositories::{
    BankAccountRepository, PaymentRepository, ProductRepository, UserRepository,
};
use mercato_shared::types::ApiError;

use crate::middleware::{create_cors, JwtAuth};
use crate::routes;
use crate::state::AppState;

/// Create and configure the application with all dependencies.
pub fn create_app<U, P, B, Y>(
    app_state: web::Data<AppState<U, P, B, Y>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody<Error: std::fmt::Debug>,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    B: BankAccountRepository + 'static,
    Y: PaymentRepository + 'static,
{
    let tokens = Arc::clone(&app_state.tokens);
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(routes::health::health_check))
        .service(
            web::scope("/v1")
                .service(
                    web::scope("/user")
                        .route("/register", web::post().to(routes::auth::register::<U, P, B, Y>))
                        .route("/login", web::post().to(routes::auth::login::<U, P, B, Y>)),
                )
                .service(
                    web::scope("/product")
                        .route(
                            "",
                            web::get()
                                .to(routes::product::list::<U, P, B, Y>)
                                .wrap(JwtAuth::optional(Arc::clone(&tokens))),
                        )
                        .route(
                            "",
                            web::post()
                                .to(routes::product::create::<U, P, B, Y>)
                                .wrap(JwtAuth::required(Arc::clone(&tokens))),
                        )
                        .route(
                            "/{id}/stock",
                            web::get()
                                .to(routes::product::stock::<U, P, B, Y>)
                                .wrap(JwtAuth::required(Arc::clone(&tokens))),
                        )
                        .route(
                            "/{id}/buy",
                            web::post()
                                .to(routes::payment::buy::<U, P, B, Y>)
                                .wrap(JwtAuth::required(Arc::clone(&tokens))),
                        )
                        .route("/{id}", web::get().to(routes::product::show::<U, P, B, Y>))
                        .route(
                            "/{id}",
                            web::patch()
                                .to(routes::product::update::<U, P, B, Y>)
                                .wrap(JwtAuth::required(Arc::clone(&tokens))),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(routes::product::delete::<U, P, B, Y>)
                                .wrap(JwtAuth::required(Arc::clone(&tokens))),
                        ),
                )
                .service(
                    web::scope("/bank/account")
                        .wrap(JwtAuth::required(Arc::clone(&tokens)))
                        .route("", web::get().to(routes::bank_account::index::<U, P, B, Y>))
                        .route("", web::post().to(routes::bank_account::create::<U, P, B, Y>))
                        .route(
                            "/{id}",
                            web::patch().to(routes::bank_account::update::<U, P, B, Y>),
                        )
                        .route(
                            "/{id}",
                            web::delete().to(routes::bank_account::delete::<U, P, B, Y>),
                        ),
                )
                .service(
                    web::scope("/image")
                        .wrap(JwtAuth::required(tokens))
                        .route("", web::post().to(routes::image::upload::<U, P, B, Y>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiError::new("request resource not found"))
}
