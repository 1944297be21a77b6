use actix_web::{test, web, App};
use parley_backend_sdk::HttpResearchBackend;
use parley_gateway::config::AuthConfig;
use parley_gateway::handlers;
use parley_gateway::proxy::ProxyState;

/// Build a test service wired to the given backend URL, registering the same
/// routes as the real server.
pub async fn init_app(
    backend_url: &str,
    auth: AuthConfig,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let backend = HttpResearchBackend::new(backend_url).expect("valid backend url");
    let state = web::Data::new(ProxyState::new(backend, auth));

    test::init_service(
        App::new()
            .app_data(state)
            .service(handlers::sessions::list_sessions)
            .service(handlers::sessions::create_session)
            .service(handlers::sessions::get_session)
            .service(handlers::sessions::update_session)
            .service(handlers::sessions::delete_session)
            .service(handlers::sessions::get_session_messages)
            .service(handlers::sessions::post_session_message)
            .service(handlers::sessions::get_questionnaire)
            .service(handlers::sessions::submit_questionnaire)
            .service(handlers::simulation::simulate)
            .service(handlers::simulation::progress)
            .service(handlers::simulation::completed)
            .service(handlers::simulation::completed_by_id)
            .service(handlers::simulation::analyze)
            .service(handlers::history::get_history),
    )
    .await
}

pub fn dev_auth(token: &str) -> AuthConfig {
    AuthConfig {
        dev_token_enabled: true,
        dev_token: Some(token.to_string()),
    }
}
