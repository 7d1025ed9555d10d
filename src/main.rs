use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use sales_bonus::config::AppConfig;
use sales_bonus::error::AppError;
use sales_bonus::telemetry;
use sales_bonus::workflows::evaluation::{
    evaluation_router, Customer, CustomerRating, Evaluation, EvaluationGenerator,
    EvaluationService, Gender, InMemoryDirectory, InMemoryEvaluationRepository, OrderTotals,
    Position, Product, SalesOrder, Salesman, SocialPerformance, SocialPerformanceImporter,
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Sales Bonus Administration",
    about = "Administer salesman performance evaluations and yearly bonus approvals",
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
    /// Inspect evaluation drafts from the command line
    Evaluation {
        #[command(subcommand)]
        command: EvaluationCommand,
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
enum EvaluationCommand {
    /// Generate and render an evaluation draft without persisting it
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
struct PreviewArgs {
    /// Government ID of the salesman to evaluate
    #[arg(long)]
    salesman_id: u32,
    /// Evaluation year
    #[arg(long)]
    year: u16,
    /// Optional HR CSV export of social-performance goals to hydrate the demo directory
    #[arg(long)]
    social_csv: Option<PathBuf>,
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
        Command::Evaluation {
            command: EvaluationCommand::Preview(args),
        } => run_preview(args),
    }
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
    };

    // Demo data source until the real HR/CRM/ERP adapters are wired in.
    let directory = demo_directory();
    let repository = Arc::new(InMemoryEvaluationRepository::default());
    let service = Arc::new(EvaluationService::new(
        repository,
        evaluation_generator(&directory),
    ));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(evaluation_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "bonus administration service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_preview(args: PreviewArgs) -> Result<(), AppError> {
    let PreviewArgs {
        salesman_id,
        year,
        social_csv,
    } = args;

    let directory = demo_directory();
    if let Some(path) = social_csv {
        for record in SocialPerformanceImporter::from_path(path)? {
            directory.add_social_performance(record);
        }
    }

    let draft = evaluation_generator(&directory).generate(salesman_id, year)?;
    render_evaluation(&draft);

    Ok(())
}

fn evaluation_generator(directory: &Arc<InMemoryDirectory>) -> EvaluationGenerator {
    EvaluationGenerator::new(
        directory.clone(),
        directory.clone(),
        directory.clone(),
        directory.clone(),
    )
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

fn render_evaluation(draft: &Evaluation) {
    println!("Evaluation draft");
    println!(
        "{} ({}), year {}",
        draft.fullname(),
        draft.department(),
        draft.year()
    );

    if draft.sales_evaluation().is_empty() {
        println!("\nSales performance: no orders recorded");
    } else {
        println!("\nSales performance");
        for line in draft.sales_evaluation() {
            println!(
                "- {} x{} for {} (rating {}): {} EUR",
                line.product_name(),
                line.items(),
                line.customer(),
                line.customer_rating().label(),
                line.bonus()
            );
        }
    }

    if draft.social_evaluation().is_empty() {
        println!("\nSocial performance: no goals recorded");
    } else {
        println!("\nSocial performance");
        for goal in draft.social_evaluation() {
            println!(
                "- {} (target {}, actual {}): {} EUR",
                goal.description(),
                goal.target_value(),
                goal.actual_value(),
                goal.bonus()
            );
        }
    }

    println!("\nSales total:  {} EUR", draft.sales_total_bonus());
    println!("Social total: {} EUR", draft.social_total_bonus());
    println!("Total bonus:  {} EUR", draft.total_bonus());
}

/// Seeded directory mirroring the staging snapshots of the external systems.
fn demo_directory() -> Arc<InMemoryDirectory> {
    let directory = Arc::new(InMemoryDirectory::new());

    directory.add_salesman(
        Salesman::new(
            90123,
            "5BE0AE3E-FF96-40E2-A80B-B8A530D39EBC",
            "E0001",
            "John",
            "Smith",
            "Sales",
            "Senior Salesman",
            Some(Gender::Male),
        )
        .expect("demo salesman is valid"),
    );
    directory.add_salesman(
        Salesman::new(
            90124,
            "C7A0F5F2-2C13-4E5C-9F0C-5B7C2D4E8A11",
            "E0002",
            "Sabine",
            "Krause",
            "Sales",
            "Salesman",
            Some(Gender::Female),
        )
        .expect("demo salesman is valid"),
    );

    directory.add_customer(
        Customer::new(500, "cust-500", "Deutsche Bahn", CustomerRating::VeryGood)
            .expect("demo customer is valid"),
    );
    directory.add_customer(
        Customer::new(501, "cust-501", "Telekom", CustomerRating::Excellent)
            .expect("demo customer is valid"),
    );

    let hoover_clean = Product {
        product_id: 1,
        name: "HooverClean".to_string(),
        uid: "prod-1".to_string(),
        min_quantity: 1,
        max_quantity: 100,
        min_positions: 1,
        max_positions: 10,
    };
    let hoover_go = Product {
        product_id: 2,
        name: "HooverGo".to_string(),
        uid: "prod-2".to_string(),
        min_quantity: 1,
        max_quantity: 50,
        min_positions: 1,
        max_positions: 5,
    };

    directory.add_sales_order(
        SalesOrder::new(
            7001,
            "order-7001",
            500,
            90123,
            "Deutsche Bahn Q2",
            2024,
            1,
            2,
            4,
            OrderTotals {
                amount: 290.0,
                base_amount: 290.0,
                amount_including_tax: 345.1,
                ..OrderTotals::default()
            },
            vec![
                Position::new(1, "pos-1", 50.0, 50.0, 0.0, 0.0, 10, 5.0, hoover_clean.clone())
                    .expect("demo position is valid"),
                Position::new(2, "pos-2", 240.0, 240.0, 0.0, 0.0, 20, 12.0, hoover_go)
                    .expect("demo position is valid"),
            ],
        )
        .expect("demo order is valid"),
    );
    directory.add_sales_order(
        SalesOrder::new(
            7002,
            "order-7002",
            501,
            90123,
            "Telekom Q4",
            2024,
            2,
            2,
            4,
            OrderTotals {
                amount: 500.0,
                base_amount: 500.0,
                amount_including_tax: 595.0,
                ..OrderTotals::default()
            },
            vec![
                Position::new(3, "pos-3", 500.0, 500.0, 0.0, 0.0, 5, 100.0, hoover_clean)
                    .expect("demo position is valid"),
            ],
        )
        .expect("demo order is valid"),
    );

    directory.add_social_performance(
        SocialPerformance::new(90123, 1, "Leadership Competence", 4.0, 4.0, 2024)
            .expect("demo goal is valid"),
    );
    directory.add_social_performance(
        SocialPerformance::new(90123, 2, "Openness to Employee", 20.0, 25.0, 2024)
            .expect("demo goal is valid"),
    );

    directory
}
