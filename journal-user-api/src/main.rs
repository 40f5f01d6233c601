mod config;
mod dto;
mod error;
mod handlers;
mod state;

use axum::{
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "journal_user_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env();
    let state = AppState::new(&config).await?;

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    // The browser frontend sends credentials, so wildcard origins are out.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let app = Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Doctor endpoints
        .route(
            "/api/doctor/createDoctor",
            post(handlers::doctors::create_doctor),
        )
        .route(
            "/api/doctor/getDoctorByDoctorId/:doctorId",
            get(handlers::doctors::get_doctor_by_doctor_id),
        )
        .route(
            "/api/doctor/getDoctorByUserName/:userName",
            get(handlers::doctors::get_doctor_by_user_name),
        )
        .route(
            "/api/doctor/getDoctorsByOrganizationName/:organizationName",
            get(handlers::doctors::get_doctors_by_organization_name),
        )
        // Patient endpoints
        .route(
            "/api/patient/createPatient",
            post(handlers::patients::create_patient),
        )
        .route(
            "/api/patient/getByPatientId/:id",
            get(handlers::patients::get_by_patient_id),
        )
        .route(
            "/api/patient/getByUserName/:userName",
            get(handlers::patients::get_by_user_name),
        )
        .route(
            "/api/patient/getPatientsByDoctorName/:doctorName",
            get(handlers::patients::get_patients_by_doctor_name),
        )
        .route(
            "/api/patient/addDoctor/:patientName/:doctorName",
            put(handlers::patients::add_doctor),
        )
        // Employee endpoints
        .route(
            "/api/employee/createEmployee",
            post(handlers::employees::create_employee),
        )
        .route(
            "/api/employee/getEmployeeById/:id",
            get(handlers::employees::get_employee_by_id),
        )
        .route(
            "/api/employee/getEmployeeByUserName/:userName",
            get(handlers::employees::get_employee_by_user_name),
        )
        .route(
            "/api/employee/getEmployeesByOrganization/:orgName",
            get(handlers::employees::get_employees_by_organization),
        )
        // Account endpoints
        .route("/login", get(handlers::accounts::login))
        .route(
            "/getUserByUserName",
            get(handlers::accounts::get_user_by_user_name),
        )
        .route("/signup", post(handlers::accounts::signup))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
