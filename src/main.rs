use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use intake_bridge::config::AppConfig;
use intake_bridge::error::AppError;
use intake_bridge::intake::domain::IntakeRecord;
use intake_bridge::intake::{IntakeDocument, IntakeOutcome, IntakePipeline};
use intake_bridge::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
    pipeline: Arc<IntakePipeline>,
}

#[derive(Parser, Debug)]
#[command(
    name = "Case Intake Bridge",
    about = "Transform case intake form submissions into case-management records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with saved intake documents
    Intake {
        #[command(subcommand)]
        command: IntakeCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum IntakeCommand {
    /// Transform an intake JSON document and print the resulting records
    Transform(TransformArgs),
}

#[derive(Args, Debug)]
struct TransformArgs {
    /// Path to an intake record saved as JSON
    #[arg(long)]
    input: PathBuf,
    /// Pin the transform instant (RFC 3339); defaults to now
    #[arg(long, value_parser = parse_timestamp)]
    now: Option<DateTime<Utc>>,
    /// Print the full outcome as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Deserialize)]
struct TransformRequest {
    record: IntakeRecord,
    /// Optional pinned instant (RFC 3339) for deterministic output.
    #[serde(default)]
    now: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Intake {
            command: IntakeCommand::Transform(args),
        } => run_transform(args),
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| format!("failed to parse '{raw}' as RFC 3339 ({err})"))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
        pipeline: Arc::new(config.intake.pipeline()),
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/intake/transform", post(transform_endpoint))
        .layer(prometheus_layer)
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "case intake bridge ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_transform(args: TransformArgs) -> Result<(), AppError> {
    let TransformArgs { input, now, json } = args;

    let config = AppConfig::load()?;
    let pipeline = config.intake.pipeline();

    let record = IntakeDocument::from_path(input)?;
    let now = now.unwrap_or_else(Utc::now);
    let outcome = pipeline.process(&record, now);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome)
                .unwrap_or_else(|err| format!("{{\"error\": \"{err}\"}}"))
        );
    } else {
        render_outcome(&outcome);
    }

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn transform_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<TransformRequest>,
) -> Result<Json<IntakeOutcome>, AppError> {
    let TransformRequest { record, now } = payload;

    let now = match now {
        Some(raw) => parse_timestamp(&raw).map_err(AppError::BadRequest)?,
        None => Utc::now(),
    };

    Ok(Json(state.pipeline.process(&record, now)))
}

fn render_outcome(outcome: &IntakeOutcome) {
    println!("Intake transform");

    println!("\nPerson");
    println!(
        "- Name: {} {}",
        outcome.person.first_name, outcome.person.last_name
    );
    println!("- Email: {}", outcome.person.email);
    println!("- Phone: {}", outcome.person.phone);
    let address = &outcome.person.address;
    println!(
        "- Address: {} | {} | {} {}",
        address.street, address.city, address.state, address.zip
    );
    println!("- Status: {}", outcome.person.status.label());

    if outcome.person.authorized_reps.is_empty() {
        println!("- Authorized reps: none");
    } else {
        println!(
            "- Authorized reps: {}",
            outcome.person.authorized_reps.join("; ")
        );
    }
    if outcome.person.family_members.is_empty() {
        println!("- Family members: none");
    } else {
        println!(
            "- Family members: {}",
            outcome.person.family_members.join("; ")
        );
    }

    println!("\nCase");
    println!("- Type: {}", outcome.case_record.case_type.label());
    println!("- Status: {}", outcome.case_record.status.label());
    println!(
        "- Application date: {}",
        outcome.case_record.application_date
    );
    println!("- Admission date: {}", outcome.case_record.admission_date);
    if !outcome.case_record.spouse_name.is_empty() {
        println!("- Spouse: {}", outcome.case_record.spouse_name);
    }
    println!("- Description: {}", outcome.case_record.description);

    println!(
        "\nMetadata: source {} at {}",
        outcome.metadata.source, outcome.metadata.intake_date
    );

    if outcome.errors.is_empty() {
        println!("\nValidation: ok");
    } else {
        println!("\nValidation errors");
        for error in &outcome.errors {
            println!("- {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use intake_bridge::intake::domain::Relationship;

    fn test_state() -> AppState {
        // `PrometheusMetricLayer::pair` installs a process-global recorder and
        // panics if called twice, so tests share a single handle.
        static HANDLE: std::sync::OnceLock<PrometheusHandle> = std::sync::OnceLock::new();
        let handle = HANDLE
            .get_or_init(|| PrometheusMetricLayer::pair().1)
            .clone();
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: handle,
            pipeline: Arc::new(IntakePipeline::default()),
        }
    }

    fn sample_record() -> IntakeRecord {
        let mut record = IntakeRecord {
            applicant_name: "Mary Smith".to_string(),
            avs_consent_date: "01/15/2024".to_string(),
            ..IntakeRecord::default()
        };
        record.contact.address = "123 Main St, Springfield, IL 62701".to_string();
        record.relationships = vec![Relationship {
            name: "John Smith".to_string(),
            phone: String::new(),
            relation: "Spouse".to_string(),
        }];
        record
    }

    #[tokio::test]
    async fn transform_endpoint_returns_records_and_no_errors() {
        let request = TransformRequest {
            record: sample_record(),
            now: Some("2025-06-01T12:00:00Z".to_string()),
        };

        let Json(body) = transform_endpoint(State(test_state()), Json(request))
            .await
            .expect("transform succeeds");

        assert!(body.errors.is_empty());
        assert_eq!(body.person.first_name, "Mary");
        assert_eq!(body.person.address.state, "IL");
        assert_eq!(body.case_record.spouse_name, "John Smith");
        assert_eq!(body.case_record.application_date, "01/15/2024");
    }

    #[tokio::test]
    async fn transform_endpoint_pins_defaulted_dates_to_the_supplied_instant() {
        let mut record = sample_record();
        record.avs_consent_date.clear();
        let request = TransformRequest {
            record,
            now: Some("2025-06-01T12:00:00Z".to_string()),
        };

        let Json(body) = transform_endpoint(State(test_state()), Json(request))
            .await
            .expect("transform succeeds");

        let pinned = Utc
            .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .single()
            .expect("valid instant");
        assert_eq!(body.case_record.application_date, pinned.to_rfc3339());
        assert_eq!(body.metadata.intake_date, pinned.to_rfc3339());
    }

    #[tokio::test]
    async fn transform_endpoint_reports_validation_errors_with_ok_status() {
        let request = TransformRequest {
            record: IntakeRecord::default(),
            now: None,
        };

        let Json(body) = transform_endpoint(State(test_state()), Json(request))
            .await
            .expect("transform succeeds even when invalid");

        assert_eq!(
            body.errors,
            vec!["First name is required", "Last name is required"]
        );
    }

    #[tokio::test]
    async fn transform_endpoint_rejects_malformed_instants() {
        let request = TransformRequest {
            record: sample_record(),
            now: Some("yesterday".to_string()),
        };

        let error = transform_endpoint(State(test_state()), Json(request))
            .await
            .expect_err("expected bad request");
        match error {
            AppError::BadRequest(_) => {}
            other => panic!("expected bad request, got {other:?}"),
        }
    }
}
